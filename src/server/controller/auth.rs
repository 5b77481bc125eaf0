use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        passenger::{LoginDto, LoginSuccessDto},
    },
    server::{
        error::AppError, model::passenger::LoginParams, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Check a passenger's username and password.
///
/// No session or token is issued; the response only reports whether the credentials are
/// valid. Empty fields are rejected before any password comparison.
///
/// # Returns
/// - `200 OK` - Credentials valid, body echoes the username
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials valid", body = LoginSuccessDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Username or password incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = LoginParams::from_dto(payload)?;

    let passenger = AuthService::new(&state.db).login(params).await?;

    Ok(Json(passenger.into_login_dto()))
}
