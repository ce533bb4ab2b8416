mod service;

pub use self::service::EmailService;
