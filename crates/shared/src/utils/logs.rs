use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(component: &str) {
    let is_dev = std::env::var("DEV_MODE")
        .map(|val| val == "true" || val == "1")
        .unwrap_or(false);

    let default_directive = if is_dev { "debug" } else { "info" };
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(is_dev)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();

    tracing::info!("Logger initialized for {component}");
}
