use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{CreateCrewAssignmentDto, CrewAssignmentCreatedDto, FlightListDto},
    },
    server::{
        controller::flight::into_flight_list,
        error::AppError,
        model::assignment::CrewAssignment,
        service::{flight::FlightService, flight_crew::FlightCrewService},
        state::AppState,
    },
};

/// Tag for grouping crew endpoints in OpenAPI documentation
pub static FLIGHT_CREW_TAG: &str = "flight crew";

/// Assign a staff member to a flight.
///
/// # Returns
/// - `200 OK` - Staff member assigned
/// - `400 Bad Request` - Missing field, unknown staff member or flight, or already assigned
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flightcrew",
    tag = FLIGHT_CREW_TAG,
    request_body = CreateCrewAssignmentDto,
    responses(
        (status = 200, description = "Staff member assigned", body = CrewAssignmentCreatedDto),
        (status = 400, description = "Missing field, unknown reference or duplicate assignment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_crew_assignment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCrewAssignmentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let assignment = CrewAssignment::from_dto(payload)?;

    let assignment = FlightCrewService::new(&state.db).assign(assignment).await?;

    Ok(Json(assignment.into_created_dto()))
}

/// List the flights a staff member is assigned to.
///
/// # Returns
/// - `200 OK` - Assigned flights ordered by flight number
/// - `404 Not Found` - Staff member has no assignments
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flightcrew/{staff_id}",
    tag = FLIGHT_CREW_TAG,
    params(
        ("staff_id" = String, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Assigned flights", body = FlightListDto),
        (status = 404, description = "No assignments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_flights(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(&state.db)
        .get_for_staff(&staff_id)
        .await?;

    Ok(Json(into_flight_list(flights)))
}
