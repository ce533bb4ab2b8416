use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Single-use activation credential, valid until `expiry_date` and deleted
/// on consumption.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VerificationToken {
    pub token_id: i32,
    pub user_id: i32,
    pub token: String,
    pub expiry_date: NaiveDateTime,
}
