use crate::{
    abstract_trait::BookingQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllBookings, errors::RepositoryError, model::Booking,
};
use async_trait::async_trait;
use sqlx::{FromRow, Row};

pub struct BookingQueryRepository {
    db: ConnectionPool,
}

impl BookingQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingQueryRepositoryTrait for BookingQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings WHERE booking_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(booking)
    }

    async fn exists_confirmed_for_schedule(
        &self,
        schedule_id: i32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE schedule_id = $1 AND status = 'confirmed'
            )
            "#,
        )
        .bind(schedule_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn find_by_patient(
        &self,
        patient_id: i32,
        req: &FindAllBookings,
    ) -> Result<(Vec<Booking>, i64), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let rows = sqlx::query(
            r#"
            SELECT *, COUNT(*) OVER() AS total_count
            FROM bookings
            WHERE patient_id = $1
            ORDER BY appointment_date DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(patient_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let total: i64 = rows
            .first()
            .map(|row| row.try_get("total_count"))
            .transpose()
            .map_err(RepositoryError::from)?
            .unwrap_or(0);

        let bookings = rows
            .iter()
            .map(Booking::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((bookings, total))
    }
}
