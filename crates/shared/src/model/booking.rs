use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub booking_id: i32,
    pub schedule_id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
    pub appointment_date: NaiveDateTime,
    pub note: Option<String>,
    pub status: BookingStatus,
    pub created_at: Option<NaiveDateTime>,
}
