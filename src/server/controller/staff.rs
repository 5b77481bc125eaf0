use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        staff::{CreatePilotDto, CreateStaffDto, PilotCreatedDto, StaffCreatedDto},
    },
    server::{
        error::AppError,
        model::staff::{CreatePilotParams, CreateStaffParams},
        service::staff::StaffService,
        state::AppState,
    },
};

/// Tag for grouping staff endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

/// Create a staff member with contact details.
///
/// The staff ID is generated from the name: lowercased first initial plus surname, with a
/// numeric suffix when that ID is taken. A salary of zero counts as missing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Name, salary and contact details
///
/// # Returns
/// - `200 OK` - Staff member created, `id` holds the generated staff ID
/// - `400 Bad Request` - A field is missing or the body is malformed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = STAFF_TAG,
    request_body = CreateStaffDto,
    responses(
        (status = 200, description = "Staff member created", body = StaffCreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    payload: Result<Json<CreateStaffDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateStaffParams::from_dto(payload)?;

    let staff = StaffService::new(&state.db).create(params).await?;

    Ok(Json(staff.into_created_dto()))
}

/// Make an existing staff member a pilot.
///
/// # Returns
/// - `200 OK` - Pilot rating recorded
/// - `400 Bad Request` - Staff ID or type rating missing
/// - `404 Not Found` - Staff member does not exist
/// - `409 Conflict` - Staff member is already a pilot
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pilot",
    tag = STAFF_TAG,
    request_body = CreatePilotDto,
    responses(
        (status = 200, description = "Pilot rating recorded", body = PilotCreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 404, description = "Staff member does not exist", body = ErrorDto),
        (status = 409, description = "Staff member is already a pilot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pilot(
    State(state): State<AppState>,
    payload: Result<Json<CreatePilotDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreatePilotParams::from_dto(payload)?;

    let pilot = StaffService::new(&state.db).create_pilot(params).await?;

    Ok(Json(pilot.into_created_dto()))
}
