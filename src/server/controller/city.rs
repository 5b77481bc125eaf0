use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        city::{CityCreatedDto, CreateCityDto},
    },
    server::{
        error::AppError, model::city::CreateCityParams, service::city::CityService,
        state::AppState,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

/// Add a city that flights can route through.
///
/// `cityID` is optional; the database assigns the next free ID when it is omitted.
///
/// # Returns
/// - `200 OK` - City added, `id` holds the city ID
/// - `400 Bad Request` - Name or country missing
/// - `409 Conflict` - Supplied city ID already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/intercity",
    tag = CITY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 200, description = "City added", body = CityCreatedDto),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 409, description = "City ID already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    payload: Result<Json<CreateCityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateCityParams::from_dto(payload)?;

    let city = CityService::new(&state.db).create(params).await?;

    Ok(Json(city.into_created_dto()))
}
