use crate::errors::{
    DomainError, ErrorResponse, RepositoryError, ServiceError, ValidationError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Gone(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Domain(domain_err) => {
                let msg = domain_err.to_string();
                match domain_err {
                    DomainError::ScheduleNotFound
                    | DomainError::BookingNotFound
                    | DomainError::UserNotExist
                    | DomainError::UserNotFoundFromToken
                    | DomainError::VerificationTokenInvalid => HttpError::NotFound(msg),

                    DomainError::ScheduleNotAvailable
                    | DomainError::ScheduleAlreadyBooked
                    | DomainError::UserExists
                    | DomainError::DoctorAlreadyApproved
                    | DomainError::DoctorAlreadyRejected
                    | DomainError::AccountAlreadyActive
                    | DomainError::AccountAlreadyDeactivate => HttpError::Conflict(msg),

                    DomainError::RoleNotAllowed | DomainError::Unauthorized => {
                        HttpError::Forbidden(msg)
                    }

                    DomainError::VerificationTokenExpired => HttpError::Gone(msg),
                }
            }

            ServiceError::Validation(validation_err) => match validation_err {
                ValidationError::PatientInfoRequired | ValidationError::DoctorInfoRequired => {
                    HttpError::BadRequest(validation_err.to_string())
                }
            },

            ServiceError::RequestValidation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Email(msg) => HttpError::Internal(msg),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Gone(msg) => (StatusCode::GONE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
