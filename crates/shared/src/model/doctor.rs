use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub doctor_id: i32,
    pub user_id: i32,
    pub department: String,
    pub specialization: String,
    pub bio: Option<String>,
    pub rating_avg: f32,
}
