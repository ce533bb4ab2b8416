use crate::model::{Doctor, DoctorReviewStatus, Patient, User, UserRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PatientProfileResponse {
    pub insurance_number: String,
    pub national_id: String,
    pub medical_history: Option<String>,
}

impl From<Patient> for PatientProfileResponse {
    fn from(value: Patient) -> Self {
        PatientProfileResponse {
            insurance_number: value.insurance_number,
            national_id: value.national_id,
            medical_history: value.medical_history,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DoctorProfileResponse {
    pub department: String,
    pub specialization: String,
    pub bio: Option<String>,
    pub rating_avg: f32,
}

impl From<Doctor> for DoctorProfileResponse {
    fn from(value: Doctor) -> Self {
        DoctorProfileResponse {
            department: value.department,
            specialization: value.specialization,
            bio: value.bio,
            rating_avg: value.rating_avg,
        }
    }
}

/// Role-agnostic projection merging the user row with its role profile.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gender: String,
    pub date_of_birth: String,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    pub review_status: Option<DoctorReviewStatus>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    pub patient: Option<PatientProfileResponse>,
    pub doctor: Option<DoctorProfileResponse>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            full_name: value.full_name,
            email: value.email,
            phone: value.phone,
            address: value.address,
            gender: value.gender,
            date_of_birth: value.date_of_birth.to_string(),
            avatar_url: value.avatar_url,
            role: value.role,
            is_verified: value.is_verified,
            is_active: value.is_active,
            review_status: value.review_status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            patient: None,
            doctor: None,
        }
    }
}

impl UserResponse {
    pub fn from_patient(user: User, patient: Patient) -> Self {
        let mut response = UserResponse::from(user);
        response.patient = Some(PatientProfileResponse::from(patient));
        response
    }

    pub fn from_doctor(user: User, doctor: Doctor) -> Self {
        let mut response = UserResponse::from(user);
        response.doctor = Some(DoctorProfileResponse::from(doctor));
        response
    }
}
