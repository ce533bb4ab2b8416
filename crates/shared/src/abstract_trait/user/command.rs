use crate::{
    domain::{
        requests::{
            CreateDoctorRecord, CreatePatientRecord, CreateUserRecord, CreateUserRequest,
            CreateVerificationTokenRequest, ReviewDoctorRegistrationRequest,
            UpdateUserActiveRequest,
        },
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Doctor, Patient, User, VerificationToken},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;
pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

/// Write side of the user store. Each method is one atomic unit of work:
/// every row it touches commits together or not at all.
#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_patient_account(
        &self,
        user: &CreateUserRecord,
        profile: &CreatePatientRecord,
        token: &CreateVerificationTokenRequest,
    ) -> Result<(User, Patient, VerificationToken), RepositoryError>;

    async fn create_doctor_account(
        &self,
        user: &CreateUserRecord,
        profile: &CreateDoctorRecord,
    ) -> Result<(User, Doctor), RepositoryError>;

    async fn approve_doctor(
        &self,
        user_id: i32,
        token: &CreateVerificationTokenRequest,
    ) -> Result<(User, VerificationToken), RepositoryError>;

    async fn reject_doctor(&self, user_id: i32) -> Result<User, RepositoryError>;

    async fn update_active_status(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<User, RepositoryError>;

    async fn activate_account(&self, user_id: i32, token: &str) -> Result<User, RepositoryError>;

    async fn ensure_admin(&self, user: &CreateUserRecord) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;

    async fn review_doctor_registration(
        &self,
        user_id: i32,
        req: &ReviewDoctorRegistrationRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;

    async fn update_user_active_status(
        &self,
        user_id: i32,
        req: &UpdateUserActiveRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;

    async fn activate_account(&self, token: &str)
    -> Result<ApiResponse<UserResponse>, ServiceError>;
}
