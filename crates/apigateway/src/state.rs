use email::EmailService;
use shared::{
    abstract_trait::{DynEmailService, DynHashing},
    config::{Config, ConnectionPool, Hashing},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub hashing: DynHashing,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let email = Arc::new(EmailService::new(&config.email_config)) as DynEmailService;

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hashing: hashing.clone(),
            email,
            base_url: config.base_url.clone(),
        });

        Self {
            di_container,
            hashing,
        }
    }
}
