mod command;
mod query;

use self::command::BookingCommandRepository;
use self::query::BookingQueryRepository;

use crate::{
    abstract_trait::{DynBookingCommandRepository, DynBookingQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct BookingRepository {
    pub query: DynBookingQueryRepository,
    pub command: DynBookingCommandRepository,
}

impl BookingRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query =
            Arc::new(BookingQueryRepository::new(pool.clone())) as DynBookingQueryRepository;
        let command =
            Arc::new(BookingCommandRepository::new(pool.clone())) as DynBookingCommandRepository;

        Self { query, command }
    }
}
