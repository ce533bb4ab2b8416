mod booking;
mod doctor;
mod patient;
mod schedule;
mod user;
mod verification_token;

pub use self::booking::{Booking, BookingStatus};
pub use self::doctor::Doctor;
pub use self::patient::Patient;
pub use self::schedule::Schedule;
pub use self::user::{DoctorReviewStatus, User, UserRole};
pub use self::verification_token::VerificationToken;
