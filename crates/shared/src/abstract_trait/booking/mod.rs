mod command;
mod query;

pub use self::command::{
    BookingCommandRepositoryTrait, BookingCommandServiceTrait, DynBookingCommandRepository,
    DynBookingCommandService,
};
pub use self::query::{
    BookingQueryRepositoryTrait, BookingQueryServiceTrait, DynBookingQueryRepository,
    DynBookingQueryService,
};
