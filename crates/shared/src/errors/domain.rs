use thiserror::Error;

/// Closed set of state-machine and actor failures. Each variant is a hard
/// stop with its own semantic code; none is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Schedule not found")]
    ScheduleNotFound,

    #[error("Schedule is not available")]
    ScheduleNotAvailable,

    #[error("Schedule already has a confirmed booking")]
    ScheduleAlreadyBooked,

    #[error("Booking not found")]
    BookingNotFound,

    #[error("User already exists")]
    UserExists,

    #[error("User does not exist")]
    UserNotExist,

    #[error("Role is not allowed for this operation")]
    RoleNotAllowed,

    #[error("Doctor registration has already been approved")]
    DoctorAlreadyApproved,

    #[error("Doctor registration has already been rejected")]
    DoctorAlreadyRejected,

    #[error("Account is already active")]
    AccountAlreadyActive,

    #[error("Account is already deactivated")]
    AccountAlreadyDeactivate,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("No profile found for the resolved user")]
    UserNotFoundFromToken,

    #[error("Verification token is invalid")]
    VerificationTokenInvalid,

    #[error("Verification token has expired")]
    VerificationTokenExpired,
}

/// Missing role-specific registration fields. Kept apart from
/// [`DomainError`]: these reject the request body, not a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Insurance number and national id are required for patients")]
    PatientInfoRequired,

    #[error("Department and specialization are required for doctors")]
    DoctorInfoRequired,
}
