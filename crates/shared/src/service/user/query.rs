use crate::{
    abstract_trait::{
        DynDoctorQueryRepository, DynPatientQueryRepository, DynUserQueryRepository,
        UserQueryServiceTrait,
    },
    domain::{
        requests::FindAllUsers,
        responses::{ApiResponse, ApiResponsePagination, Pagination, UserResponse},
    },
    errors::{DomainError, ServiceError},
    model::{User, UserRole},
};
use async_trait::async_trait;
use tracing::info;

pub struct UserQueryService {
    query: DynUserQueryRepository,
    patient_query: DynPatientQueryRepository,
    doctor_query: DynDoctorQueryRepository,
}

impl UserQueryService {
    pub fn new(
        query: DynUserQueryRepository,
        patient_query: DynPatientQueryRepository,
        doctor_query: DynDoctorQueryRepository,
    ) -> Self {
        Self {
            query,
            patient_query,
            doctor_query,
        }
    }

    /// Joins the role profile onto the user row. A registered user without
    /// its profile row is a data-integrity failure, not a normal outcome.
    async fn join_profile(&self, user: User) -> Result<UserResponse, ServiceError> {
        match user.role {
            UserRole::Doctor => {
                let doctor = self
                    .doctor_query
                    .find_by_user_id(user.user_id)
                    .await?
                    .ok_or(DomainError::UserNotFoundFromToken)?;
                Ok(UserResponse::from_doctor(user, doctor))
            }
            UserRole::Patient => {
                let patient = self
                    .patient_query
                    .find_by_user_id(user.user_id)
                    .await?
                    .ok_or(DomainError::UserNotFoundFromToken)?;
                Ok(UserResponse::from_patient(user, patient))
            }
            _ => Err(DomainError::Unauthorized.into()),
        }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFoundFromToken)?;

        let response = self.join_profile(user).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User fetched successfully".to_string(),
            data: response,
        })
    }

    async fn find_all(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ServiceError> {
        let (users, total) = self.query.find_registered(req).await?;

        let mut responses = Vec::with_capacity(users.len());
        for user in users {
            responses.push(self.join_profile(user).await?);
        }

        info!("✅ Fetched {} users (total {total})", responses.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Users fetched successfully".to_string(),
            data: responses,
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }

    async fn find_pending_doctors(
        &self,
        req: &FindAllUsers,
    ) -> Result<ApiResponsePagination<Vec<UserResponse>>, ServiceError> {
        let (users, total) = self.query.find_pending_doctors(req).await?;

        let mut responses = Vec::with_capacity(users.len());
        for user in users {
            responses.push(self.join_profile(user).await?);
        }

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Pending doctors fetched successfully".to_string(),
            data: responses,
            pagination: Pagination::new(req.page, req.page_size, total),
        })
    }
}
