use crate::model::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct BookingResponse {
    pub id: i32,
    pub schedule_id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
    pub appointment_date: String,
    pub note: Option<String>,
    pub status: BookingStatus,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        BookingResponse {
            id: value.booking_id,
            schedule_id: value.schedule_id,
            doctor_id: value.doctor_id,
            patient_id: value.patient_id,
            appointment_date: value.appointment_date.to_string(),
            note: value.note,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
