use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ResponseStatus},
        flight::{CreateFlightDto, FlightCreatedDto, FlightFilterQuery, FlightListDto},
    },
    server::{
        error::AppError,
        model::flight::{CreateFlightParams, Flight, FlightFilter},
        service::flight::FlightService,
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Wraps flights in the listing response shared by every flight query.
pub fn into_flight_list(flights: Vec<Flight>) -> FlightListDto {
    FlightListDto {
        flights: flights.into_iter().map(Flight::into_summary_dto).collect(),
        status: ResponseStatus::Success,
    }
}

/// Schedule a flight and assign its pilot.
///
/// The pilot must exist, the airplane must exist, and the pilot's type rating must not
/// order after the airplane's rating. The flight and the pilot's crew assignment are
/// written together or not at all.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Flight number, airplane serial, route, times and pilot ID
///
/// # Returns
/// - `200 OK` - Flight scheduled
/// - `400 Bad Request` - Missing field, unknown pilot or airplane, or insufficient rating
/// - `409 Conflict` - Flight number already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flight",
    tag = FLIGHT_TAG,
    request_body = CreateFlightDto,
    responses(
        (status = 200, description = "Flight scheduled", body = FlightCreatedDto),
        (status = 400, description = "Missing field, unknown reference or insufficient rating", body = ErrorDto),
        (status = 409, description = "Flight number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlightDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateFlightParams::from_dto(payload)?;

    let scheduled = FlightService::new(&state.db).create(params).await?;

    Ok(Json(scheduled.into_created_dto()))
}

/// List flights, optionally filtered by exact origin and destination.
///
/// # Returns
/// - `200 OK` - Matching flights ordered by flight number
/// - `404 Not Found` - No flight matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_TAG,
    params(FlightFilterQuery),
    responses(
        (status = 200, description = "Matching flights", body = FlightListDto),
        (status = 404, description = "No flight matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = FlightFilter::from_query(query);

    let flights = FlightService::new(&state.db).get_filtered(filter).await?;

    Ok(Json(into_flight_list(flights)))
}

/// Search flights by a substring of the flight number.
///
/// # Returns
/// - `200 OK` - Flights whose number contains the pattern
/// - `404 Not Found` - No flight number contains the pattern
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights/search/{pattern}",
    tag = FLIGHT_TAG,
    params(
        ("pattern" = String, Path, description = "Substring of the flight number")
    ),
    responses(
        (status = 200, description = "Matching flights", body = FlightListDto),
        (status = 404, description = "No flight matches the pattern", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_flights(
    State(state): State<AppState>,
    Path(pattern): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(&state.db).search(&pattern).await?;

    Ok(Json(into_flight_list(flights)))
}

/// List every flight; the search endpoint with an empty pattern.
#[utoipa::path(
    get,
    path = "/api/flights/search/",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "All flights", body = FlightListDto),
        (status = 404, description = "No flights scheduled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_all_flights(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let flights = FlightService::new(&state.db).search("").await?;

    Ok(Json(into_flight_list(flights)))
}

/// Delete a flight together with its crew, route and bookings.
///
/// Succeeds even when no flight has the given number.
///
/// # Returns
/// - `200 OK` - Flight and dependents removed
/// - `400 Bad Request` - Flight number is not a whole number
/// - `500 Internal Server Error` - Database error; nothing is removed
#[utoipa::path(
    delete,
    path = "/api/flight/{flight_num}",
    tag = FLIGHT_TAG,
    params(
        ("flight_num" = i64, Path, description = "Flight number")
    ),
    responses(
        (status = 200, description = "Flight deleted", body = MessageDto),
        (status = 400, description = "Flight number is not a whole number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    flight_num: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(flight_num) = flight_num?;

    FlightService::new(&state.db).delete(flight_num).await?;

    Ok(Json(MessageDto::success(format!(
        "Flight number {} and its dependencies deleted successfully",
        flight_num
    ))))
}
