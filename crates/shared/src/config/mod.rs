mod app;
mod database;
mod hashing;

pub use self::app::{AdminConfig, Config, EmailConfig};
pub use self::database::{ConnectionManager, ConnectionPool, run_migrations};
pub use self::hashing::Hashing;
