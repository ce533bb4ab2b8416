use crate::{
    abstract_trait::{
        DynDoctorQueryRepository, DynEmailService, DynHashing, DynPatientQueryRepository,
        DynScheduleQueryRepository, DynVerificationTokenQueryRepository,
    },
    config::{AdminConfig, ConnectionPool},
    domain::requests::CreateUserRecord,
    errors::ServiceError,
    model::UserRole,
    repository::{
        BookingRepository, DoctorQueryRepository, PatientQueryRepository,
        ScheduleQueryRepository, UserRepository, VerificationTokenQueryRepository,
    },
    service::{BookingService, BookingServiceDeps, UserService, UserServiceDeps},
};
use chrono::NaiveDate;
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_service: UserService,
    pub booking_service: BookingService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_service", &"<UserService>")
            .field("booking_service", &"<BookingService>")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hashing: DynHashing,
    pub email: DynEmailService,
    pub base_url: String,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hashing,
            email,
            base_url,
        } = deps;

        let user_repository = UserRepository::new(pool.clone());
        let booking_repository = BookingRepository::new(pool.clone());

        let patient_query =
            Arc::new(PatientQueryRepository::new(pool.clone())) as DynPatientQueryRepository;
        let doctor_query =
            Arc::new(DoctorQueryRepository::new(pool.clone())) as DynDoctorQueryRepository;
        let schedule_query =
            Arc::new(ScheduleQueryRepository::new(pool.clone())) as DynScheduleQueryRepository;
        let token_query = Arc::new(VerificationTokenQueryRepository::new(pool.clone()))
            as DynVerificationTokenQueryRepository;

        let user_service = UserService::new(UserServiceDeps {
            user_query: user_repository.query.clone(),
            user_command: user_repository.command.clone(),
            patient_query,
            doctor_query,
            token_query,
            hashing,
            email,
            base_url,
        });

        let booking_service = BookingService::new(BookingServiceDeps {
            schedule_query,
            booking_query: booking_repository.query.clone(),
            booking_command: booking_repository.command.clone(),
            user_query: user_repository.query.clone(),
        });

        Self {
            user_service,
            booking_service,
        }
    }
}

/// Seeds the configured admin account. Idempotent: an existing row with the
/// same email is left untouched.
pub async fn bootstrap_admin(
    pool: &ConnectionPool,
    hashing: &DynHashing,
    admin: &AdminConfig,
) -> Result<(), ServiceError> {
    let repository = UserRepository::new(pool.clone());

    let password = hashing.hash_password(&admin.password).await?;

    let record = CreateUserRecord {
        full_name: admin.full_name.clone(),
        email: admin.email.clone(),
        phone: String::new(),
        address: String::new(),
        gender: "unspecified".to_string(),
        date_of_birth: NaiveDate::default(),
        avatar_url: None,
        password,
        role: UserRole::Admin,
        is_verified: true,
        is_active: true,
        review_status: None,
    };

    repository.command.ensure_admin(&record).await?;

    info!("✅ Admin account ensured for {}", admin.email);

    Ok(())
}
