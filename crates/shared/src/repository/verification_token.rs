use crate::{
    abstract_trait::VerificationTokenQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::VerificationToken,
};
use async_trait::async_trait;

pub struct VerificationTokenQueryRepository {
    db: ConnectionPool,
}

impl VerificationTokenQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VerificationTokenQueryRepositoryTrait for VerificationTokenQueryRepository {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let verification_token = sqlx::query_as::<_, VerificationToken>(
            r#"
            SELECT * FROM verification_tokens WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(verification_token)
    }
}
