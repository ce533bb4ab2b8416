use crate::{errors::RepositoryError, model::Schedule};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynScheduleQueryRepository = Arc<dyn ScheduleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ScheduleQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, RepositoryError>;
}
