use crate::{middleware::ValidatedJson, state::AppState};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    abstract_trait::{DynUserCommandService, DynUserQueryService},
    domain::{
        requests::{FindAllUsers, ReviewDoctorRegistrationRequest, UpdateUserActiveRequest},
        responses::{ApiResponse, ApiResponsePagination, UserResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "User",
    params(FindAllUsers),
    responses(
        (status = 200, description = "List of users", body = ApiResponsePagination<Vec<UserResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserQueryService>,
    Query(params): Query<FindAllUsers>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/users/pending-doctors",
    tag = "User",
    params(FindAllUsers),
    responses(
        (status = 200, description = "Doctors awaiting review", body = ApiResponsePagination<Vec<UserResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_pending_doctors(
    Extension(service): Extension<DynUserQueryService>,
    Query(params): Query<FindAllUsers>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_pending_doctors(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
        (status = 403, description = "Role has no profile view")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/review",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    request_body = ReviewDoctorRegistrationRequest,
    responses(
        (status = 200, description = "Registration reviewed", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
        (status = 403, description = "User is not a doctor"),
        (status = 409, description = "Registration already reviewed")
    )
)]
pub async fn review_doctor_handler(
    Extension(service): Extension<DynUserCommandService>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<ReviewDoctorRegistrationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.review_doctor_registration(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/active",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserActiveRequest,
    responses(
        (status = 200, description = "Active status updated", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found"),
        (status = 409, description = "Requested state equals current state")
    )
)]
pub async fn update_active_status_handler(
    Extension(service): Extension<DynUserCommandService>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateUserActiveRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_user_active_status(id, &body).await?;
    Ok(Json(response))
}

pub fn user_routes(state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users", get(get_users))
        .route("/api/users/pending-doctors", get(get_pending_doctors))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/review", put(review_doctor_handler))
        .route("/api/users/{id}/active", put(update_active_status_handler))
        .layer(Extension(state.di_container.user_service.query.clone()))
        .layer(Extension(
            state.di_container.user_service.command.clone(),
        ))
}
