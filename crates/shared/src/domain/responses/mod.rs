mod api;
mod booking;
mod pagination;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::booking::BookingResponse;
pub use self::pagination::Pagination;
pub use self::user::{DoctorProfileResponse, PatientProfileResponse, UserResponse};
