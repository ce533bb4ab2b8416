use crate::{
    domain::{
        requests::FindAllBookings,
        responses::{ApiResponse, ApiResponsePagination, BookingResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Booking,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBookingQueryRepository = Arc<dyn BookingQueryRepositoryTrait + Send + Sync>;
pub type DynBookingQueryService = Arc<dyn BookingQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait BookingQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, RepositoryError>;

    async fn exists_confirmed_for_schedule(
        &self,
        schedule_id: i32,
    ) -> Result<bool, RepositoryError>;

    async fn find_by_patient(
        &self,
        patient_id: i32,
        req: &FindAllBookings,
    ) -> Result<(Vec<Booking>, i64), RepositoryError>;
}

#[async_trait]
pub trait BookingQueryServiceTrait {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<BookingResponse>, ServiceError>;

    async fn find_by_patient(
        &self,
        patient_id: i32,
        req: &FindAllBookings,
    ) -> Result<ApiResponsePagination<Vec<BookingResponse>>, ServiceError>;
}
