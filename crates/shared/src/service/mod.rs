mod booking;
mod user;

pub use self::booking::{BookingService, BookingServiceDeps};
pub use self::user::{UserService, UserServiceDeps};
