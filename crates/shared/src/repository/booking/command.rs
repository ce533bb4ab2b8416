use crate::{
    abstract_trait::BookingCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateBookingRecord, errors::RepositoryError,
    model::{Booking, BookingStatus, Schedule},
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct BookingCommandRepository {
    db: ConnectionPool,
}

impl BookingCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingCommandRepositoryTrait for BookingCommandRepository {
    async fn create_booking(
        &self,
        req: &CreateBookingRecord,
    ) -> Result<Booking, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Row lock serializes concurrent attempts on the same slot; the
        // availability re-check below is authoritative, the service-level
        // check is only for error ordering.
        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT * FROM schedules WHERE schedule_id = $1 FOR UPDATE
            "#,
        )
        .bind(req.schedule_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        if !schedule.is_available {
            warn!(
                "⚠️ Schedule {} was claimed by a concurrent booking",
                schedule.schedule_id
            );
            return Err(RepositoryError::Conflict(
                "schedule is no longer available".to_string(),
            ));
        }

        sqlx::query(
            r#"
            UPDATE schedules SET is_available = FALSE WHERE schedule_id = $1
            "#,
        )
        .bind(schedule.schedule_id)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                schedule_id,
                doctor_id,
                patient_id,
                appointment_date,
                note,
                status,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, CURRENT_TIMESTAMP)
            RETURNING *
            "#,
        )
        .bind(schedule.schedule_id)
        .bind(schedule.doctor_id)
        .bind(req.patient_id)
        .bind(schedule.date)
        .bind(&req.note)
        .bind(BookingStatus::Pending)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Booking {} created for schedule {} (patient {})",
            booking.booking_id, booking.schedule_id, booking.patient_id
        );

        Ok(booking)
    }
}
