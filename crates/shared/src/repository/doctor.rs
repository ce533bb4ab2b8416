use crate::{
    abstract_trait::DoctorQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Doctor,
};
use async_trait::async_trait;

pub struct DoctorQueryRepository {
    db: ConnectionPool,
}

impl DoctorQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorQueryRepositoryTrait for DoctorQueryRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Doctor>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT * FROM doctors WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(doctor)
    }
}
