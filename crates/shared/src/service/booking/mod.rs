mod command;
mod query;

use self::command::BookingCommandService;
use self::query::BookingQueryService;

use crate::abstract_trait::{
    DynBookingCommandRepository, DynBookingCommandService, DynBookingQueryRepository,
    DynBookingQueryService, DynScheduleQueryRepository, DynUserQueryRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct BookingService {
    pub query: DynBookingQueryService,
    pub command: DynBookingCommandService,
}

pub struct BookingServiceDeps {
    pub schedule_query: DynScheduleQueryRepository,
    pub booking_query: DynBookingQueryRepository,
    pub booking_command: DynBookingCommandRepository,
    pub user_query: DynUserQueryRepository,
}

impl BookingService {
    pub fn new(deps: BookingServiceDeps) -> Self {
        let BookingServiceDeps {
            schedule_query,
            booking_query,
            booking_command,
            user_query,
        } = deps;

        let query_service =
            Arc::new(BookingQueryService::new(booking_query.clone())) as DynBookingQueryService;

        let command_service = Arc::new(BookingCommandService::new(
            schedule_query,
            booking_query,
            booking_command,
            user_query,
        )) as DynBookingCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
