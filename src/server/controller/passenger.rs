use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResponseStatus},
        passenger::{
            BookingCreatedDto, BookingListDto, CreateBookingDto, CreatePassengerDto,
            PassengerCreatedDto,
        },
    },
    server::{
        error::AppError,
        model::{assignment::Booking, flight::Flight, passenger::CreatePassengerParams},
        service::{booking::BookingService, passenger::PassengerService},
        state::AppState,
    },
};

/// Tag for grouping passenger endpoints in OpenAPI documentation
pub static PASSENGER_TAG: &str = "passenger";

/// Register a passenger account.
///
/// The username becomes the passenger ID. The password is stored only as a salted hash.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, name, password and contact details
///
/// # Returns
/// - `200 OK` - Passenger registered
/// - `400 Bad Request` - A field is missing or the body is malformed
/// - `409 Conflict` - Username already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/passenger",
    tag = PASSENGER_TAG,
    request_body = CreatePassengerDto,
    responses(
        (status = 200, description = "Passenger registered", body = PassengerCreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_passenger(
    State(state): State<AppState>,
    payload: Result<Json<CreatePassengerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreatePassengerParams::from_dto(payload)?;

    let passenger = PassengerService::new(&state.db).register(params).await?;

    Ok(Json(passenger.into_created_dto()))
}

/// Book a passenger onto a flight.
///
/// # Returns
/// - `200 OK` - Booking created
/// - `400 Bad Request` - Missing field, unknown passenger or flight, or duplicate booking
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/booking",
    tag = PASSENGER_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Booking created", body = BookingCreatedDto),
        (status = 400, description = "Missing field, unknown reference or duplicate booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let booking = Booking::from_dto(payload)?;

    let booking = BookingService::new(&state.db).create(booking).await?;

    Ok(Json(booking.into_created_dto()))
}

/// List the flights a passenger has booked.
///
/// # Returns
/// - `200 OK` - Booked flights ordered by flight number
/// - `404 Not Found` - Passenger has no bookings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/{passenger_id}",
    tag = PASSENGER_TAG,
    params(
        ("passenger_id" = String, Path, description = "Passenger username")
    ),
    responses(
        (status = 200, description = "Booked flights", body = BookingListDto),
        (status = 404, description = "No bookings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    Path(passenger_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let flights = BookingService::new(&state.db)
        .get_for_passenger(&passenger_id)
        .await?;

    Ok(Json(BookingListDto {
        bookings: flights.into_iter().map(Flight::into_summary_dto).collect(),
        status: ResponseStatus::Success,
    }))
}
