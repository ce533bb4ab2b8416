use crate::{errors::RepositoryError, model::Patient};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPatientQueryRepository = Arc<dyn PatientQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PatientQueryRepositoryTrait {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Patient>, RepositoryError>;
}
