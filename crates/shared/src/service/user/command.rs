use crate::{
    abstract_trait::{
        DynEmailService, DynHashing, DynUserCommandRepository, DynUserQueryRepository,
        DynVerificationTokenQueryRepository, EmailRequest, UserCommandServiceTrait,
    },
    domain::{
        requests::{
            CreateDoctorRecord, CreatePatientRecord, CreateUserRecord, CreateUserRequest,
            CreateVerificationTokenRequest, RegistrationDetails,
            ReviewDoctorRegistrationRequest, UpdateUserActiveRequest,
        },
        responses::{ApiResponse, UserResponse},
    },
    errors::{DomainError, RepositoryError, ServiceError},
    model::{DoctorReviewStatus, User, UserRole},
    utils::{EmailTemplateData, generate_random_string},
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{error, info};

const TOKEN_LENGTH: usize = 40;
const TOKEN_TTL_HOURS: i64 = 1;

pub struct UserCommandService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    token_query: DynVerificationTokenQueryRepository,
    hashing: DynHashing,
    email: DynEmailService,
    base_url: String,
}

pub struct UserCommandServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub token_query: DynVerificationTokenQueryRepository,
    pub hashing: DynHashing,
    pub email: DynEmailService,
    pub base_url: String,
}

impl UserCommandService {
    pub fn new(deps: UserCommandServiceDeps) -> Self {
        let UserCommandServiceDeps {
            query,
            command,
            token_query,
            hashing,
            email,
            base_url,
        } = deps;

        Self {
            query,
            command,
            token_query,
            hashing,
            email,
            base_url,
        }
    }

    fn new_verification_token(&self) -> Result<CreateVerificationTokenRequest, ServiceError> {
        let token = generate_random_string(TOKEN_LENGTH).map_err(|e| {
            error!("❌ Failed to generate verification token: {e:?}");
            ServiceError::Internal("Failed to generate verification token".into())
        })?;

        Ok(CreateVerificationTokenRequest {
            token,
            expiry_date: Utc::now().naive_utc() + Duration::hours(TOKEN_TTL_HOURS),
        })
    }

    fn activation_link(&self, token: &str) -> String {
        format!(
            "{}/api/auth/activate?token={token}",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Dispatch after the owning transaction has committed. A failure here
    /// never reverses the committed state; it is flagged for manual
    /// reconciliation and surfaced to the caller.
    async fn dispatch_email(
        &self,
        to: &str,
        subject: &str,
        data: EmailTemplateData,
    ) -> Result<(), ServiceError> {
        let request = EmailRequest {
            to: to.to_string(),
            subject: subject.to_string(),
            data,
        };

        if let Err(e) = self.email.send(&request).await {
            error!(
                "❌ Notification dispatch to {to} failed after commit, \
                 flagging for manual reconciliation: {e}"
            );
            return Err(ServiceError::Email(format!(
                "record updated but the notification to {to} was not delivered"
            )));
        }

        Ok(())
    }

    fn user_record(req: &CreateUserRequest, hashed_password: String, role: UserRole) -> CreateUserRecord {
        CreateUserRecord {
            full_name: req.full_name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            address: req.address.clone(),
            gender: req.gender.clone(),
            date_of_birth: req.date_of_birth,
            avatar_url: req.avatar_url.clone(),
            password: hashed_password,
            role,
            is_verified: false,
            is_active: false,
            review_status: match role {
                UserRole::Doctor => Some(DoctorReviewStatus::Pending),
                _ => None,
            },
        }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering new account | email: {}", req.email);

        let email_taken = self.query.exists_by_email(&req.email).await.map_err(|e| {
            error!("❌ Failed to check email in DB: {e:?}");
            ServiceError::Repo(e)
        })?;

        if email_taken {
            error!("❌ Email already taken | email: {}", req.email);
            return Err(DomainError::UserExists.into());
        }

        // Role-specific fields are validated before anything is persisted,
        // so a bad request never leaves a bare user row behind.
        let details = RegistrationDetails::try_from(req)?;

        let hashed_password = self.hashing.hash_password(&req.password).await?;

        match details {
            RegistrationDetails::Patient {
                insurance_number,
                national_id,
                medical_history,
            } => {
                let user_record = Self::user_record(req, hashed_password, UserRole::Patient);
                let profile = CreatePatientRecord {
                    insurance_number,
                    national_id,
                    medical_history,
                };
                let token_request = self.new_verification_token()?;

                let (user, patient, token) = self
                    .command
                    .create_patient_account(&user_record, &profile, &token_request)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::AlreadyExists(_) => DomainError::UserExists.into(),
                        other => ServiceError::Repo(other),
                    })?;

                let data = EmailTemplateData {
                    title: "Activate your account".to_string(),
                    message: format!(
                        "Hi {}, your patient account has been created. \
                         The activation link below expires in one hour.",
                        user.full_name
                    ),
                    button: "Activate account".to_string(),
                    link: self.activation_link(&token.token),
                };
                self.dispatch_email(&user.email, "Activate your account", data)
                    .await?;

                info!("✅ Patient registered successfully: {}", user.email);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "User registered successfully".to_string(),
                    data: UserResponse::from_patient(user, patient),
                })
            }

            RegistrationDetails::Doctor {
                department,
                specialization,
                bio,
            } => {
                let user_record = Self::user_record(req, hashed_password, UserRole::Doctor);
                let profile = CreateDoctorRecord {
                    department,
                    specialization,
                    bio,
                };

                let (user, doctor) = self
                    .command
                    .create_doctor_account(&user_record, &profile)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::AlreadyExists(_) => DomainError::UserExists.into(),
                        other => ServiceError::Repo(other),
                    })?;

                let data = EmailTemplateData {
                    title: "Registration received".to_string(),
                    message: format!(
                        "Hi {}, your doctor registration is awaiting review by an \
                         administrator. You will be able to activate your account \
                         once it has been approved.",
                        user.full_name
                    ),
                    button: "Visit the clinic portal".to_string(),
                    link: self.base_url.clone(),
                };
                self.dispatch_email(&user.email, "Registration pending approval", data)
                    .await?;

                info!("✅ Doctor registered successfully: {}", user.email);

                Ok(ApiResponse {
                    status: "success".to_string(),
                    message: "User registered successfully".to_string(),
                    data: UserResponse::from_doctor(user, doctor),
                })
            }
        }
    }

    async fn review_doctor_registration(
        &self,
        user_id: i32,
        req: &ReviewDoctorRegistrationRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!(
            "📋 Reviewing doctor registration | user_id: {user_id} approved: {}",
            req.is_approved
        );

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotExist)?;

        if user.role != UserRole::Doctor {
            return Err(DomainError::RoleNotAllowed.into());
        }

        match user.review_status {
            Some(DoctorReviewStatus::Approved) => {
                return Err(DomainError::DoctorAlreadyApproved.into());
            }
            Some(DoctorReviewStatus::Rejected) => {
                return Err(DomainError::DoctorAlreadyRejected.into());
            }
            _ => {}
        }

        let user: User = if req.is_approved {
            let token_request = self.new_verification_token()?;
            let (user, token) = self.command.approve_doctor(user_id, &token_request).await?;

            let data = EmailTemplateData {
                title: "Registration approved".to_string(),
                message: format!(
                    "Hi {}, your doctor registration has been approved. \
                     The activation link below expires in one hour.",
                    user.full_name
                ),
                button: "Activate account".to_string(),
                link: self.activation_link(&token.token),
            };
            self.dispatch_email(&user.email, "Activate your account", data)
                .await?;

            user
        } else {
            let user = self.command.reject_doctor(user_id).await?;

            let reason = req
                .reject_reason
                .clone()
                .unwrap_or_else(|| "Your registration did not pass review.".to_string());

            let data = EmailTemplateData {
                title: "Registration rejected".to_string(),
                message: format!("Hi {}, {reason}", user.full_name),
                button: "Visit the clinic portal".to_string(),
                link: self.base_url.clone(),
            };
            self.dispatch_email(&user.email, "Registration rejected", data)
                .await?;

            user
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Doctor registration reviewed".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn update_user_active_status(
        &self,
        user_id: i32,
        req: &UpdateUserActiveRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotExist)?;

        if user.is_active == req.is_active {
            return Err(if user.is_active {
                DomainError::AccountAlreadyActive.into()
            } else {
                DomainError::AccountAlreadyDeactivate.into()
            });
        }

        let user = self
            .command
            .update_active_status(user_id, req.is_active)
            .await?;

        let (subject, data) = if req.is_active {
            (
                "Account activated",
                EmailTemplateData {
                    title: "Account activated".to_string(),
                    message: format!(
                        "Hi {}, your account has been activated by an administrator.",
                        user.full_name
                    ),
                    button: "Sign in".to_string(),
                    link: self.base_url.clone(),
                },
            )
        } else {
            (
                "Account deactivated",
                EmailTemplateData {
                    title: "Account deactivated".to_string(),
                    message: format!(
                        "Hi {}, your account has been deactivated. Contact the \
                         clinic if you believe this is a mistake.",
                        user.full_name
                    ),
                    button: "Contact us".to_string(),
                    link: self.base_url.clone(),
                },
            )
        };
        self.dispatch_email(&user.email, subject, data).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User active status updated".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn activate_account(
        &self,
        token: &str,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let verification_token = self
            .token_query
            .find_by_token(token)
            .await?
            .ok_or(DomainError::VerificationTokenInvalid)?;

        if Utc::now().naive_utc() > verification_token.expiry_date {
            return Err(DomainError::VerificationTokenExpired.into());
        }

        let user = self
            .query
            .find_by_id(verification_token.user_id)
            .await?
            .ok_or(DomainError::UserNotFoundFromToken)?;

        let user = self
            .command
            .activate_account(user.user_id, &verification_token.token)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => DomainError::VerificationTokenInvalid.into(),
                other => ServiceError::Repo(other),
            })?;

        info!("✅ Account activated: {}", user.email);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Account activated successfully".to_string(),
            data: UserResponse::from(user),
        })
    }
}
