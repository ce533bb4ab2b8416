use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub patient_id: i32,
    pub user_id: i32,
    pub insurance_number: String,
    pub national_id: String,
    pub medical_history: Option<String>,
}
