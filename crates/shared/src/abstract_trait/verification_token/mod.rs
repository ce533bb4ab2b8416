use crate::{errors::RepositoryError, model::VerificationToken};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynVerificationTokenQueryRepository =
    Arc<dyn VerificationTokenQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait VerificationTokenQueryRepositoryTrait {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, RepositoryError>;
}
