use crate::{
    abstract_trait::PatientQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Patient,
};
use async_trait::async_trait;

pub struct PatientQueryRepository {
    db: ConnectionPool,
}

impl PatientQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PatientQueryRepositoryTrait for PatientQueryRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Patient>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let patient = sqlx::query_as::<_, Patient>(
            r#"
            SELECT * FROM patients WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(patient)
    }
}
