use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        airplane::{AirplaneCreatedDto, CreateAirplaneDto},
        api::ErrorDto,
    },
    server::{
        error::AppError, model::airplane::CreateAirplaneParams,
        service::airplane::AirplaneService, state::AppState,
    },
};

/// Tag for grouping airplane endpoints in OpenAPI documentation
pub static AIRPLANE_TAG: &str = "airplane";

/// Register a new airplane.
///
/// Adds an airplane to the fleet under its serial number. The type rating is the highest
/// pilot rating allowed to fly it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Serial number, manufacturer, model number and type rating
///
/// # Returns
/// - `200 OK` - Airplane registered, `id` holds the serial number
/// - `400 Bad Request` - A field is missing or the body is malformed
/// - `409 Conflict` - Serial number already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/airplanes",
    tag = AIRPLANE_TAG,
    request_body = CreateAirplaneDto,
    responses(
        (status = 200, description = "Airplane registered", body = AirplaneCreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 409, description = "Serial number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    payload: Result<Json<CreateAirplaneDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateAirplaneParams::from_dto(payload)?;

    let airplane = AirplaneService::new(&state.db).create(params).await?;

    Ok(Json(airplane.into_created_dto()))
}
