mod command;
mod query;

use self::command::{UserCommandService, UserCommandServiceDeps};
use self::query::UserQueryService;

use crate::abstract_trait::{
    DynDoctorQueryRepository, DynEmailService, DynHashing, DynPatientQueryRepository,
    DynUserCommandRepository, DynUserCommandService, DynUserQueryRepository, DynUserQueryService,
    DynVerificationTokenQueryRepository,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct UserService {
    pub query: DynUserQueryService,
    pub command: DynUserCommandService,
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService")
            .field("query", &"Arc<dyn UserQueryServiceTrait>")
            .field("command", &"Arc<dyn UserCommandServiceTrait>")
            .finish()
    }
}

pub struct UserServiceDeps {
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub patient_query: DynPatientQueryRepository,
    pub doctor_query: DynDoctorQueryRepository,
    pub token_query: DynVerificationTokenQueryRepository,
    pub hashing: DynHashing,
    pub email: DynEmailService,
    pub base_url: String,
}

impl UserService {
    pub fn new(deps: UserServiceDeps) -> Self {
        let UserServiceDeps {
            user_query,
            user_command,
            patient_query,
            doctor_query,
            token_query,
            hashing,
            email,
            base_url,
        } = deps;

        let query_service = Arc::new(UserQueryService::new(
            user_query.clone(),
            patient_query,
            doctor_query,
        )) as DynUserQueryService;

        let command_service = Arc::new(UserCommandService::new(UserCommandServiceDeps {
            query: user_query,
            command: user_command,
            token_query,
            hashing,
            email,
            base_url,
        })) as DynUserCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
