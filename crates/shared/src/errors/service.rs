use crate::errors::{DomainError, RepositoryError, ValidationError};
use bcrypt::BcryptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Validation failed: {0:?}")]
    RequestValidation(Vec<String>),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("Email dispatch failed: {0}")]
    Email(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
