use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{CreateFlightPathDto, FlightPathCreatedDto},
    },
    server::{
        error::AppError, model::assignment::FlightPathStop,
        service::flight_path::FlightPathService, state::AppState,
    },
};

/// Tag for grouping flight path endpoints in OpenAPI documentation
pub static FLIGHT_PATH_TAG: &str = "flight path";

/// Add a city to a flight's route.
///
/// # Returns
/// - `200 OK` - City added to the route
/// - `400 Bad Request` - Missing field, unknown flight or city, or city already on the route
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flightpath",
    tag = FLIGHT_PATH_TAG,
    request_body = CreateFlightPathDto,
    responses(
        (status = 200, description = "City added to the route", body = FlightPathCreatedDto),
        (status = 400, description = "Missing field, unknown reference or duplicate stop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight_path(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightPathDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let stop = FlightPathStop::from_dto(payload)?;

    let stop = FlightPathService::new(&state.db).add_stop(stop).await?;

    Ok(Json(stop.into_created_dto()))
}
