use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct CreateVerificationTokenRequest {
    pub token: String,
    pub expiry_date: NaiveDateTime,
}
