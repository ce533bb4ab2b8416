use crate::{middleware::ValidatedJson, state::AppState};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use shared::{
    abstract_trait::DynUserCommandService,
    domain::{requests::CreateUserRequest, responses::{ApiResponse, UserResponse}},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ActivateQuery {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Account registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "Missing role-specific fields"),
        (status = 403, description = "Role not allowed"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynUserCommandService>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_user(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/activate",
    params(ActivateQuery),
    responses(
        (status = 200, description = "Account activated", body = ApiResponse<UserResponse>),
        (status = 404, description = "Unknown verification token"),
        (status = 410, description = "Verification token expired")
    ),
    tag = "Auth"
)]
pub async fn activate_account_handler(
    Extension(service): Extension<DynUserCommandService>,
    Query(query): Query<ActivateQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.activate_account(&query.token).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/activate", get(activate_account_handler))
        .layer(Extension(
            state.di_container.user_service.command.clone(),
        ))
}
