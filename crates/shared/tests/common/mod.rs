#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use shared::{
    abstract_trait::{
        BookingCommandRepositoryTrait, BookingQueryRepositoryTrait, DoctorQueryRepositoryTrait,
        DynBookingCommandRepository, DynBookingQueryRepository, DynDoctorQueryRepository,
        DynEmailService, DynHashing, DynPatientQueryRepository, DynScheduleQueryRepository,
        DynUserCommandRepository, DynUserQueryRepository, DynVerificationTokenQueryRepository,
        EmailRequest, EmailServiceTrait, PatientQueryRepositoryTrait,
        ScheduleQueryRepositoryTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait,
        VerificationTokenQueryRepositoryTrait,
    },
    config::Hashing,
    domain::requests::{
        CreateBookingRecord, CreateDoctorRecord, CreatePatientRecord, CreateUserRecord,
        CreateUserRequest, CreateVerificationTokenRequest, FindAllBookings, FindAllUsers,
    },
    errors::{RepositoryError, ServiceError},
    model::{
        Booking, BookingStatus, Doctor, DoctorReviewStatus, Patient, Schedule, User, UserRole,
        VerificationToken,
    },
    service::{BookingService, BookingServiceDeps, UserService, UserServiceDeps},
};

pub const BASE_URL: &str = "http://localhost:8080";

/// In-memory stand-in for the Postgres store. Every write helper mimics the
/// atomicity of the real repository: it either applies all of its rows or
/// returns before touching anything.
#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<Vec<User>>,
    pub patients: Mutex<Vec<Patient>>,
    pub doctors: Mutex<Vec<Doctor>>,
    pub schedules: Mutex<Vec<Schedule>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub tokens: Mutex<Vec<VerificationToken>>,
    next_id: Mutex<i32>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn alloc_id(&self) -> i32 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }

    fn build_user(&self, record: &CreateUserRecord) -> User {
        User {
            user_id: self.alloc_id(),
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            gender: record.gender.clone(),
            date_of_birth: record.date_of_birth,
            avatar_url: record.avatar_url.clone(),
            password: record.password.clone(),
            role: record.role,
            is_verified: record.is_verified,
            is_active: record.is_active,
            review_status: record.review_status,
            rejected_at: None,
            created_at: Some(Utc::now().naive_utc()),
            updated_at: Some(Utc::now().naive_utc()),
        }
    }

    pub fn insert_user(&self, role: UserRole, email: &str) -> User {
        let user = User {
            user_id: self.alloc_id(),
            full_name: format!("Test {role:?}"),
            email: email.to_string(),
            phone: "555-0100".to_string(),
            address: "12 Clinic Road".to_string(),
            gender: "female".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            avatar_url: None,
            password: "hashed".to_string(),
            role,
            is_verified: false,
            is_active: false,
            review_status: match role {
                UserRole::Doctor => Some(DoctorReviewStatus::Pending),
                _ => None,
            },
            rejected_at: None,
            created_at: Some(Utc::now().naive_utc()),
            updated_at: Some(Utc::now().naive_utc()),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn insert_patient(&self, email: &str) -> User {
        let user = self.insert_user(UserRole::Patient, email);
        self.patients.lock().unwrap().push(Patient {
            patient_id: self.alloc_id(),
            user_id: user.user_id,
            insurance_number: "INS-1001".to_string(),
            national_id: "NID-1001".to_string(),
            medical_history: None,
        });
        user
    }

    pub fn insert_doctor(&self, email: &str) -> User {
        let user = self.insert_user(UserRole::Doctor, email);
        self.doctors.lock().unwrap().push(Doctor {
            doctor_id: self.alloc_id(),
            user_id: user.user_id,
            department: "Cardiology".to_string(),
            specialization: "Cardiologist".to_string(),
            bio: None,
            rating_avg: 0.0,
        });
        user
    }

    pub fn insert_schedule(&self, doctor_id: i32, is_available: bool) -> Schedule {
        let schedule = Schedule {
            schedule_id: self.alloc_id(),
            doctor_id,
            date: Utc::now().naive_utc() + Duration::days(3),
            is_available,
            created_at: Some(Utc::now().naive_utc()),
        };
        self.schedules.lock().unwrap().push(schedule.clone());
        schedule
    }

    pub fn insert_booking(&self, schedule: &Schedule, patient_id: i32, status: BookingStatus) {
        let booking = Booking {
            booking_id: self.alloc_id(),
            schedule_id: schedule.schedule_id,
            doctor_id: schedule.doctor_id,
            patient_id,
            appointment_date: schedule.date,
            note: None,
            status,
            created_at: Some(Utc::now().naive_utc()),
        };
        self.bookings.lock().unwrap().push(booking);
    }

    pub fn insert_token(&self, user_id: i32, token: &str, expiry: chrono::NaiveDateTime) {
        self.tokens.lock().unwrap().push(VerificationToken {
            token_id: self.alloc_id(),
            user_id,
            token: token.to_string(),
            expiry_date: expiry,
        });
    }

    pub fn schedule(&self, schedule_id: i32) -> Schedule {
        self.schedules
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.schedule_id == schedule_id)
            .cloned()
            .expect("schedule not seeded")
    }

    pub fn user(&self, user_id: i32) -> User {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .expect("user not seeded")
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn find_registered(
        &self,
        req: &FindAllUsers,
    ) -> Result<(Vec<User>, i64), RepositoryError> {
        let users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| matches!(u.role, UserRole::Doctor | UserRole::Patient))
            .cloned()
            .collect();

        let total = users.len() as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as usize;
        let page = users
            .into_iter()
            .skip(offset)
            .take(req.page_size as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_pending_doctors(
        &self,
        req: &FindAllUsers,
    ) -> Result<(Vec<User>, i64), RepositoryError> {
        let users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| {
                u.role == UserRole::Doctor
                    && u.review_status == Some(DoctorReviewStatus::Pending)
            })
            .cloned()
            .collect();

        let total = users.len() as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as usize;
        let page = users
            .into_iter()
            .skip(offset)
            .take(req.page_size as usize)
            .collect();

        Ok((page, total))
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryStore {
    async fn create_patient_account(
        &self,
        user: &CreateUserRecord,
        profile: &CreatePatientRecord,
        token: &CreateVerificationTokenRequest,
    ) -> Result<(User, Patient, VerificationToken), RepositoryError> {
        if self.users.lock().unwrap().iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::AlreadyExists(user.email.clone()));
        }

        let user = self.build_user(user);
        let patient = Patient {
            patient_id: self.alloc_id(),
            user_id: user.user_id,
            insurance_number: profile.insurance_number.clone(),
            national_id: profile.national_id.clone(),
            medical_history: profile.medical_history.clone(),
        };
        let token = VerificationToken {
            token_id: self.alloc_id(),
            user_id: user.user_id,
            token: token.token.clone(),
            expiry_date: token.expiry_date,
        };

        self.users.lock().unwrap().push(user.clone());
        self.patients.lock().unwrap().push(patient.clone());
        self.tokens.lock().unwrap().push(token.clone());

        Ok((user, patient, token))
    }

    async fn create_doctor_account(
        &self,
        user: &CreateUserRecord,
        profile: &CreateDoctorRecord,
    ) -> Result<(User, Doctor), RepositoryError> {
        if self.users.lock().unwrap().iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::AlreadyExists(user.email.clone()));
        }

        let user = self.build_user(user);
        let doctor = Doctor {
            doctor_id: self.alloc_id(),
            user_id: user.user_id,
            department: profile.department.clone(),
            specialization: profile.specialization.clone(),
            bio: profile.bio.clone(),
            rating_avg: 0.0,
        };

        self.users.lock().unwrap().push(user.clone());
        self.doctors.lock().unwrap().push(doctor.clone());

        Ok((user, doctor))
    }

    async fn approve_doctor(
        &self,
        user_id: i32,
        token: &CreateVerificationTokenRequest,
    ) -> Result<(User, VerificationToken), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| {
                u.user_id == user_id
                    && u.role == UserRole::Doctor
                    && u.review_status == Some(DoctorReviewStatus::Pending)
            })
            .ok_or_else(|| {
                RepositoryError::Conflict("doctor registration is not pending review".to_string())
            })?;

        user.review_status = Some(DoctorReviewStatus::Approved);
        let user = user.clone();
        drop(users);

        let token = VerificationToken {
            token_id: self.alloc_id(),
            user_id: user.user_id,
            token: token.token.clone(),
            expiry_date: token.expiry_date,
        };
        self.tokens.lock().unwrap().push(token.clone());

        Ok((user, token))
    }

    async fn reject_doctor(&self, user_id: i32) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| {
                u.user_id == user_id
                    && u.role == UserRole::Doctor
                    && u.review_status == Some(DoctorReviewStatus::Pending)
            })
            .ok_or_else(|| {
                RepositoryError::Conflict("doctor registration is not pending review".to_string())
            })?;

        user.review_status = Some(DoctorReviewStatus::Rejected);
        user.rejected_at = Some(Utc::now().naive_utc());

        Ok(user.clone())
    }

    async fn update_active_status(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.is_active = is_active;

        Ok(user.clone())
    }

    async fn activate_account(&self, user_id: i32, token: &str) -> Result<User, RepositoryError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| t.token != token);
        if tokens.len() == before {
            return Err(RepositoryError::Conflict(
                "verification token already consumed".to_string(),
            ));
        }
        drop(tokens);

        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.is_verified = true;
        user.is_active = true;

        Ok(user.clone())
    }

    async fn ensure_admin(&self, user: &CreateUserRecord) -> Result<(), RepositoryError> {
        let exists = self.users.lock().unwrap().iter().any(|u| u.email == user.email);
        if !exists {
            let user = self.build_user(user);
            self.users.lock().unwrap().push(user);
        }
        Ok(())
    }
}

#[async_trait]
impl PatientQueryRepositoryTrait for MemoryStore {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Patient>, RepositoryError> {
        Ok(self
            .patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl DoctorQueryRepositoryTrait for MemoryStore {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Doctor>, RepositoryError> {
        Ok(self
            .doctors
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl ScheduleQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, RepositoryError> {
        Ok(self
            .schedules
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.schedule_id == id)
            .cloned())
    }
}

#[async_trait]
impl VerificationTokenQueryRepositoryTrait for MemoryStore {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, RepositoryError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token == token)
            .cloned())
    }
}

#[async_trait]
impl BookingQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, RepositoryError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.booking_id == id)
            .cloned())
    }

    async fn exists_confirmed_for_schedule(
        &self,
        schedule_id: i32,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.schedule_id == schedule_id && b.status == BookingStatus::Confirmed))
    }

    async fn find_by_patient(
        &self,
        patient_id: i32,
        req: &FindAllBookings,
    ) -> Result<(Vec<Booking>, i64), RepositoryError> {
        let bookings: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.patient_id == patient_id)
            .cloned()
            .collect();

        let total = bookings.len() as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as usize;
        let page = bookings
            .into_iter()
            .skip(offset)
            .take(req.page_size as usize)
            .collect();

        Ok((page, total))
    }
}

#[async_trait]
impl BookingCommandRepositoryTrait for MemoryStore {
    async fn create_booking(
        &self,
        req: &CreateBookingRecord,
    ) -> Result<Booking, RepositoryError> {
        let mut schedules = self.schedules.lock().unwrap();
        let schedule = schedules
            .iter_mut()
            .find(|s| s.schedule_id == req.schedule_id)
            .ok_or(RepositoryError::NotFound)?;

        if !schedule.is_available {
            return Err(RepositoryError::Conflict(
                "schedule is no longer available".to_string(),
            ));
        }

        schedule.is_available = false;
        let schedule = schedule.clone();
        drop(schedules);

        let booking = Booking {
            booking_id: self.alloc_id(),
            schedule_id: schedule.schedule_id,
            doctor_id: schedule.doctor_id,
            patient_id: req.patient_id,
            appointment_date: schedule.date,
            note: req.note.clone(),
            status: BookingStatus::Pending,
            created_at: Some(Utc::now().naive_utc()),
        };
        self.bookings.lock().unwrap().push(booking.clone());

        Ok(booking)
    }
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub link: String,
    pub message: String,
}

/// Mailer double that records every dispatch; flip `fail` to simulate the
/// gateway going down after a committed transaction.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentEmail>>,
    pub fail: AtomicBool,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> SentEmail {
        self.sent
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no email was dispatched")
    }

    pub fn fail_next_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingMailer {
    async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ServiceError::Email("smtp relay unreachable".to_string()));
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: req.to.clone(),
            subject: req.subject.clone(),
            link: req.data.link.clone(),
            message: req.data.message.clone(),
        });

        Ok(())
    }
}

pub fn user_service(store: &Arc<MemoryStore>, mailer: &Arc<RecordingMailer>) -> UserService {
    UserService::new(UserServiceDeps {
        user_query: store.clone() as DynUserQueryRepository,
        user_command: store.clone() as DynUserCommandRepository,
        patient_query: store.clone() as DynPatientQueryRepository,
        doctor_query: store.clone() as DynDoctorQueryRepository,
        token_query: store.clone() as DynVerificationTokenQueryRepository,
        hashing: Arc::new(Hashing::new()) as DynHashing,
        email: mailer.clone() as DynEmailService,
        base_url: BASE_URL.to_string(),
    })
}

pub fn booking_service(store: &Arc<MemoryStore>) -> BookingService {
    BookingService::new(BookingServiceDeps {
        schedule_query: store.clone() as DynScheduleQueryRepository,
        booking_query: store.clone() as DynBookingQueryRepository,
        booking_command: store.clone() as DynBookingCommandRepository,
        user_query: store.clone() as DynUserQueryRepository,
    })
}

pub fn patient_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        full_name: "Paula Patient".to_string(),
        email: email.to_string(),
        phone: "555-0101".to_string(),
        address: "12 Clinic Road".to_string(),
        gender: "female".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1992, 7, 3).unwrap(),
        avatar_url: None,
        password: "secret-password".to_string(),
        role: UserRole::Patient,
        insurance_number: Some("INS-2001".to_string()),
        national_id: Some("NID-2001".to_string()),
        medical_history: Some("No known allergies".to_string()),
        department: None,
        specialization: None,
        bio: None,
    }
}

pub fn doctor_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        full_name: "Dana Doctor".to_string(),
        email: email.to_string(),
        phone: "555-0102".to_string(),
        address: "90 Hospital Avenue".to_string(),
        gender: "female".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 1, 20).unwrap(),
        avatar_url: None,
        password: "secret-password".to_string(),
        role: UserRole::Doctor,
        insurance_number: None,
        national_id: None,
        medical_history: None,
        department: Some("Cardiology".to_string()),
        specialization: Some("Cardiologist".to_string()),
        bio: Some("Ten years of practice".to_string()),
    }
}
