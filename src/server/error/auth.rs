use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username unknown or password does not match the stored hash.
    ///
    /// Both cases share one message so a response never reveals whether a username is registered.
    /// Results in a 401 Unauthorized response.
    #[error("Username or password incorrect")]
    InvalidCredentials,

    /// Password could not be hashed when registering a passenger.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `InvalidCredentials`
/// - 500 Internal Server Error - For `HashingFailed`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(self.to_string())),
            )
                .into_response(),
            Self::HashingFailed(ref reason) => {
                tracing::error!("Password hashing failed: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(self.to_string())),
                )
                    .into_response()
            }
        }
    }
}
