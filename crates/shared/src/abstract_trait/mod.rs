mod booking;
mod doctor;
mod email;
mod hashing;
mod patient;
mod schedule;
mod user;
mod verification_token;

pub use self::booking::{
    BookingCommandRepositoryTrait, BookingCommandServiceTrait, BookingQueryRepositoryTrait,
    BookingQueryServiceTrait, DynBookingCommandRepository, DynBookingCommandService,
    DynBookingQueryRepository, DynBookingQueryService,
};
pub use self::doctor::{DoctorQueryRepositoryTrait, DynDoctorQueryRepository};
pub use self::email::{DynEmailService, EmailRequest, EmailServiceTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::patient::{DynPatientQueryRepository, PatientQueryRepositoryTrait};
pub use self::schedule::{DynScheduleQueryRepository, ScheduleQueryRepositoryTrait};
pub use self::user::{
    DynUserCommandRepository, DynUserCommandService, DynUserQueryRepository, DynUserQueryService,
    UserCommandRepositoryTrait, UserCommandServiceTrait, UserQueryRepositoryTrait,
    UserQueryServiceTrait,
};
pub use self::verification_token::{
    DynVerificationTokenQueryRepository, VerificationTokenQueryRepositoryTrait,
};
