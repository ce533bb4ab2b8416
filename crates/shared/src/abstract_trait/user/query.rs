use crate::{
    domain::{
        requests::FindAllUsers,
        responses::{ApiResponse, ApiResponsePagination, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Registered users only (doctors and patients), paged.
    async fn find_registered(
        &self,
        req: &FindAllUsers,
    ) -> Result<(Vec<User>, i64), RepositoryError>;

    /// Doctor users still awaiting review, paged.
    async fn find_pending_doctors(
        &self,
        req: &FindAllUsers,
    ) -> Result<(Vec<User>, i64), RepositoryError>;
}

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;

    async fn find_all(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ServiceError>;

    async fn find_pending_doctors(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ServiceError>;
}
