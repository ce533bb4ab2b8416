use crate::{
    domain::{
        requests::{CreateBookingRecord, CreateBookingRequest},
        responses::{ApiResponse, BookingResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Booking,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynBookingCommandRepository = Arc<dyn BookingCommandRepositoryTrait + Send + Sync>;
pub type DynBookingCommandService = Arc<dyn BookingCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait BookingCommandRepositoryTrait {
    /// Consumes the schedule slot and inserts the booking in one
    /// transaction. The schedule row is locked for the duration, so two
    /// concurrent attempts serialize and the loser observes an unavailable
    /// slot (`RepositoryError::Conflict`).
    async fn create_booking(
        &self,
        req: &CreateBookingRecord,
    ) -> Result<Booking, RepositoryError>;
}

#[async_trait]
pub trait BookingCommandServiceTrait {
    async fn create_booking(
        &self,
        patient_id: i32,
        req: &CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, ServiceError>;
}
