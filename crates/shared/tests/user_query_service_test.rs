mod common;

use assert_matches::assert_matches;
use common::{MemoryStore, RecordingMailer, user_service};
use shared::{
    domain::requests::FindAllUsers,
    errors::{DomainError, ServiceError},
    model::UserRole,
};

fn page(page: i32, page_size: i32) -> FindAllUsers {
    FindAllUsers {
        page,
        page_size,
        search: String::new(),
    }
}

#[tokio::test]
async fn find_by_id_joins_the_patient_profile() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();
    let patient = store.insert_patient("paula@clinic.test");

    let service = user_service(&store, &mailer);
    let response = service
        .query
        .find_by_id(patient.user_id)
        .await
        .expect("lookup should succeed");

    assert_eq!(response.data.role, UserRole::Patient);
    assert!(response.data.patient.is_some());
    assert!(response.data.doctor.is_none());
}

#[tokio::test]
async fn find_by_id_joins_the_doctor_profile() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();
    let doctor = store.insert_doctor("dana@clinic.test");

    let service = user_service(&store, &mailer);
    let response = service
        .query
        .find_by_id(doctor.user_id)
        .await
        .expect("lookup should succeed");

    assert_eq!(response.data.role, UserRole::Doctor);
    let profile = response.data.doctor.expect("doctor profile in view");
    assert_eq!(profile.department, "Cardiology");
}

#[tokio::test]
async fn find_by_id_rejects_roles_without_a_profile_view() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();
    let admin = store.insert_user(UserRole::Admin, "root@clinic.test");

    let service = user_service(&store, &mailer);
    let err = service.query.find_by_id(admin.user_id).await.unwrap_err();

    assert_matches!(err, ServiceError::Domain(DomainError::Unauthorized));
}

#[tokio::test]
async fn missing_profile_row_is_a_data_integrity_failure() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();
    // User row exists but its patient profile is gone.
    let orphan = store.insert_user(UserRole::Patient, "ghost@clinic.test");

    let service = user_service(&store, &mailer);
    let err = service.query.find_by_id(orphan.user_id).await.unwrap_err();

    assert_matches!(
        err,
        ServiceError::Domain(DomainError::UserNotFoundFromToken)
    );
}

#[tokio::test]
async fn unknown_user_id_fails_with_user_not_found_from_token() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();

    let service = user_service(&store, &mailer);
    let err = service.query.find_by_id(404).await.unwrap_err();

    assert_matches!(
        err,
        ServiceError::Domain(DomainError::UserNotFoundFromToken)
    );
}

#[tokio::test]
async fn find_all_pages_and_reports_totals() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();
    store.insert_patient("a@clinic.test");
    store.insert_patient("b@clinic.test");
    store.insert_doctor("c@clinic.test");

    let service = user_service(&store, &mailer);

    let first_page = service
        .query
        .find_all(&page(1, 2))
        .await
        .expect("listing should succeed");
    assert_eq!(first_page.data.len(), 2);
    assert_eq!(first_page.pagination.total_items, 3);
    assert_eq!(first_page.pagination.total_pages, 2);

    let second_page = service
        .query
        .find_all(&page(2, 2))
        .await
        .expect("listing should succeed");
    assert_eq!(second_page.data.len(), 1);
}

#[tokio::test]
async fn find_all_excludes_admin_accounts() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();
    store.insert_patient("a@clinic.test");
    store.insert_user(UserRole::Admin, "root@clinic.test");

    let service = user_service(&store, &mailer);
    let response = service
        .query
        .find_all(&page(1, 10))
        .await
        .expect("listing should succeed");

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.pagination.total_items, 1);
}

#[tokio::test]
async fn pending_doctors_listing_only_returns_unreviewed_accounts() {
    let store = MemoryStore::new();
    let mailer = RecordingMailer::new();
    let pending = store.insert_doctor("pending@clinic.test");
    let reviewed = store.insert_doctor("approved@clinic.test");
    {
        let mut users = store.users.lock().unwrap();
        users
            .iter_mut()
            .find(|u| u.user_id == reviewed.user_id)
            .unwrap()
            .review_status = Some(shared::model::DoctorReviewStatus::Approved);
    }
    store.insert_patient("paula@clinic.test");

    let service = user_service(&store, &mailer);
    let response = service
        .query
        .find_pending_doctors(&page(1, 10))
        .await
        .expect("listing should succeed");

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].id, pending.user_id);
}
