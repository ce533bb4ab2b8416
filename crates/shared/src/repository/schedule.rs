use crate::{
    abstract_trait::ScheduleQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Schedule,
};
use async_trait::async_trait;

pub struct ScheduleQueryRepository {
    db: ConnectionPool,
}

impl ScheduleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScheduleQueryRepositoryTrait for ScheduleQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT * FROM schedules WHERE schedule_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(schedule)
    }
}
