use crate::{
    abstract_trait::{BookingQueryServiceTrait, DynBookingQueryRepository},
    domain::{
        requests::FindAllBookings,
        responses::{ApiResponse, ApiResponsePagination, BookingResponse, Pagination},
    },
    errors::{DomainError, ServiceError},
};
use async_trait::async_trait;

pub struct BookingQueryService {
    query: DynBookingQueryRepository,
}

impl BookingQueryService {
    pub fn new(query: DynBookingQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl BookingQueryServiceTrait for BookingQueryService {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<BookingResponse>, ServiceError> {
        let booking = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BookingNotFound)?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Booking fetched successfully".to_string(),
            data: BookingResponse::from(booking),
        })
    }

    async fn find_by_patient(
        &self,
        patient_id: i32,
        req: &FindAllBookings,
    ) -> Result<ApiResponsePagination<Vec<BookingResponse>>, ServiceError> {
        let (bookings, total) = self.query.find_by_patient(patient_id, req).await?;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Bookings fetched successfully".to_string(),
            data: bookings.into_iter().map(BookingResponse::from).collect(),
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }
}
