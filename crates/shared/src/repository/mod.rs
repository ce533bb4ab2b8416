mod booking;
mod doctor;
mod patient;
mod schedule;
mod user;
mod verification_token;

pub use self::booking::BookingRepository;
pub use self::doctor::DoctorQueryRepository;
pub use self::patient::PatientQueryRepository;
pub use self::schedule::ScheduleQueryRepository;
pub use self::user::UserRepository;
pub use self::verification_token::VerificationTokenQueryRepository;
