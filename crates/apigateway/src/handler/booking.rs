use crate::{middleware::ValidatedJson, state::AppState};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynBookingCommandService, DynBookingQueryService},
    domain::{
        requests::{CreateBookingRequest, FindAllBookings},
        responses::{ApiResponse, ApiResponsePagination, BookingResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/patients/{patient_id}/bookings",
    tag = "Booking",
    params(("patient_id" = i32, Path, description = "Patient user ID")),
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created", body = ApiResponse<BookingResponse>),
        (status = 404, description = "Schedule or user not found"),
        (status = 403, description = "User is not a patient"),
        (status = 409, description = "Schedule unavailable or already booked")
    )
)]
pub async fn create_booking_handler(
    Extension(service): Extension<DynBookingCommandService>,
    Path(patient_id): Path<i32>,
    ValidatedJson(body): ValidatedJson<CreateBookingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_booking(patient_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/patients/{patient_id}/bookings",
    tag = "Booking",
    params(
        ("patient_id" = i32, Path, description = "Patient user ID"),
        FindAllBookings
    ),
    responses(
        (status = 200, description = "Bookings for the patient", body = ApiResponsePagination<Vec<BookingResponse>>)
    )
)]
pub async fn get_patient_bookings(
    Extension(service): Extension<DynBookingQueryService>,
    Path(patient_id): Path<i32>,
    Query(params): Query<FindAllBookings>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_patient(patient_id, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Booking",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingResponse>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    Extension(service): Extension<DynBookingQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

pub fn booking_routes(state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/patients/{patient_id}/bookings",
            post(create_booking_handler).get(get_patient_bookings),
        )
        .route("/api/bookings/{id}", get(get_booking))
        .layer(Extension(
            state.di_container.booking_service.command.clone(),
        ))
        .layer(Extension(state.di_container.booking_service.query.clone()))
}
