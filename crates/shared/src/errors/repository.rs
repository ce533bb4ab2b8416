use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        if matches!(err, SqlxError::RowNotFound) {
            return RepositoryError::NotFound;
        }

        if let SqlxError::Database(db_err) = &err {
            let code = db_err.code().map(|c| c.into_owned());
            let message = db_err.message().to_string();
            match code.as_deref() {
                Some("23505") => return RepositoryError::AlreadyExists(message),
                Some("23503") => return RepositoryError::ForeignKey(message),
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}
