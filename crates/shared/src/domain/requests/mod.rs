mod booking;
mod user;
mod verification_token;

pub use self::booking::{CreateBookingRecord, CreateBookingRequest, FindAllBookings};
pub use self::user::{
    CreateDoctorRecord, CreatePatientRecord, CreateUserRecord, CreateUserRequest, FindAllUsers,
    RegistrationDetails, ReviewDoctorRegistrationRequest, UpdateUserActiveRequest,
};
pub use self::verification_token::CreateVerificationTokenRequest;
