use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1))]
    pub schedule_id: i32,

    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllBookings {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

/// Repository-facing booking record. Doctor reference and appointment date
/// are taken from the schedule row inside the booking transaction.
#[derive(Debug, Clone)]
pub struct CreateBookingRecord {
    pub schedule_id: i32,
    pub patient_id: i32,
    pub note: Option<String>,
}
