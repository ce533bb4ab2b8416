use crate::{
    abstract_trait::{
        BookingCommandServiceTrait, DynBookingCommandRepository, DynBookingQueryRepository,
        DynScheduleQueryRepository, DynUserQueryRepository,
    },
    domain::{
        requests::{CreateBookingRecord, CreateBookingRequest},
        responses::{ApiResponse, BookingResponse},
    },
    errors::{DomainError, RepositoryError, ServiceError},
    model::UserRole,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct BookingCommandService {
    schedule_query: DynScheduleQueryRepository,
    booking_query: DynBookingQueryRepository,
    booking_command: DynBookingCommandRepository,
    user_query: DynUserQueryRepository,
}

impl BookingCommandService {
    pub fn new(
        schedule_query: DynScheduleQueryRepository,
        booking_query: DynBookingQueryRepository,
        booking_command: DynBookingCommandRepository,
        user_query: DynUserQueryRepository,
    ) -> Self {
        Self {
            schedule_query,
            booking_query,
            booking_command,
            user_query,
        }
    }
}

#[async_trait]
impl BookingCommandServiceTrait for BookingCommandService {
    async fn create_booking(
        &self,
        patient_id: i32,
        req: &CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, ServiceError> {
        info!(
            "📅 Booking schedule {} for patient {patient_id}",
            req.schedule_id
        );

        // Precondition order is part of the contract: existence before
        // availability before conflict before actor validation.
        let schedule = self
            .schedule_query
            .find_by_id(req.schedule_id)
            .await?
            .ok_or(DomainError::ScheduleNotFound)?;

        if !schedule.is_available {
            error!("❌ Schedule {} is not available", schedule.schedule_id);
            return Err(DomainError::ScheduleNotAvailable.into());
        }

        let already_booked = self
            .booking_query
            .exists_confirmed_for_schedule(schedule.schedule_id)
            .await?;

        if already_booked {
            error!(
                "❌ Schedule {} already has a confirmed booking",
                schedule.schedule_id
            );
            return Err(DomainError::ScheduleAlreadyBooked.into());
        }

        let patient = self
            .user_query
            .find_by_id(patient_id)
            .await?
            .ok_or(DomainError::UserNotExist)?;

        if patient.role != UserRole::Patient {
            error!("❌ User {patient_id} is not a patient");
            return Err(DomainError::RoleNotAllowed.into());
        }

        let record = CreateBookingRecord {
            schedule_id: schedule.schedule_id,
            patient_id: patient.user_id,
            note: req.note.clone(),
        };

        let booking = self
            .booking_command
            .create_booking(&record)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => DomainError::ScheduleNotFound.into(),
                RepositoryError::Conflict(_) => DomainError::ScheduleNotAvailable.into(),
                RepositoryError::AlreadyExists(_) => DomainError::ScheduleAlreadyBooked.into(),
                other => ServiceError::Repo(other),
            })?;

        info!(
            "✅ Booking {} created with status {:?}",
            booking.booking_id, booking.status
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Booking created successfully".to_string(),
            data: BookingResponse::from(booking),
        })
    }
}
