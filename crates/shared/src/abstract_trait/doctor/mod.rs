use crate::{errors::RepositoryError, model::Doctor};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDoctorQueryRepository = Arc<dyn DoctorQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait DoctorQueryRepositoryTrait {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Doctor>, RepositoryError>;
}
