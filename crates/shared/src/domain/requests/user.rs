use crate::{
    errors::{DomainError, ServiceError, ValidationError},
    model::{DoctorReviewStatus, UserRole},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllUsers {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, message = "Full name must be at least 2 characters"))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, message = "Phone must be at least 6 characters"))]
    pub phone: String,

    pub address: String,

    pub gender: String,

    pub date_of_birth: NaiveDate,

    pub avatar_url: Option<String>,

    #[validate(length(min = 6))]
    pub password: String,

    pub role: UserRole,

    pub insurance_number: Option<String>,
    pub national_id: Option<String>,
    pub medical_history: Option<String>,

    pub department: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
}

/// Role-specific half of a registration request, parsed up front so that an
/// unsupported role or a missing profile field rejects the request before
/// anything is persisted.
#[derive(Debug, Clone)]
pub enum RegistrationDetails {
    Patient {
        insurance_number: String,
        national_id: String,
        medical_history: Option<String>,
    },
    Doctor {
        department: String,
        specialization: String,
        bio: Option<String>,
    },
}

fn non_blank(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl TryFrom<&CreateUserRequest> for RegistrationDetails {
    type Error = ServiceError;

    fn try_from(req: &CreateUserRequest) -> Result<Self, Self::Error> {
        match req.role {
            UserRole::Patient => {
                let insurance_number = non_blank(&req.insurance_number)
                    .ok_or(ValidationError::PatientInfoRequired)?;
                let national_id =
                    non_blank(&req.national_id).ok_or(ValidationError::PatientInfoRequired)?;

                Ok(RegistrationDetails::Patient {
                    insurance_number,
                    national_id,
                    medical_history: non_blank(&req.medical_history),
                })
            }
            UserRole::Doctor => {
                let department =
                    non_blank(&req.department).ok_or(ValidationError::DoctorInfoRequired)?;
                let specialization =
                    non_blank(&req.specialization).ok_or(ValidationError::DoctorInfoRequired)?;

                Ok(RegistrationDetails::Doctor {
                    department,
                    specialization,
                    bio: non_blank(&req.bio),
                })
            }
            _ => Err(DomainError::RoleNotAllowed.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReviewDoctorRegistrationRequest {
    pub is_approved: bool,

    #[validate(length(max = 500, message = "Reject reason must be at most 500 characters"))]
    pub reject_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserActiveRequest {
    pub is_active: bool,
}

/// Repository-facing user record: password already hashed, flags resolved.
#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub avatar_url: Option<String>,
    pub password: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    pub review_status: Option<DoctorReviewStatus>,
}

#[derive(Debug, Clone)]
pub struct CreatePatientRecord {
    pub insurance_number: String,
    pub national_id: String,
    pub medical_history: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateDoctorRecord {
    pub department: String,
    pub specialization: String,
    pub bio: Option<String>,
}
