use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A doctor-owned appointment slot. `is_available` stays true until exactly
/// one booking consumes the slot, after which it is permanently false.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    pub schedule_id: i32,
    pub doctor_id: i32,
    pub date: NaiveDateTime,
    pub is_available: bool,
    pub created_at: Option<NaiveDateTime>,
}
