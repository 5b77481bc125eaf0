//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so handlers
//! can return it directly. Every error body has the shape `{"message": ..., "status": "error"}`.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Message returned when a create request omits a required field.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error. The raw error message is returned to the
    /// caller as well as logged, since the API is an internal administration tool.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Request body could not be parsed as the expected JSON document.
    ///
    /// Results in 400 Bad Request with the extractor's explanation.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Path segment could not be parsed into the handler's parameter type.
    ///
    /// Results in 400 Bad Request with the extractor's explanation.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Covers missing fields, references to rows that do not exist, rating mismatches and
    /// duplicate assignments. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Uniqueness violation on a primary entity.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Shorthand for the 400 returned when any required field is absent.
    pub fn missing_fields() -> Self {
        Self::BadRequest(ALL_FIELDS_REQUIRED.to_string())
    }

    /// Maps an insert failure, turning a unique violation into `on_duplicate`.
    ///
    /// Pre-insert checks catch the common case; this covers a concurrent writer inserting
    /// the same key between the check and the write.
    pub fn from_insert(err: DbErr, on_duplicate: impl FnOnce() -> AppError) -> Self {
        if is_unique_violation(&err) {
            on_duplicate()
        } else {
            Self::DbErr(err)
        }
    }
}

/// Returns true when the store rejected a write because a primary key or unique index
/// already holds the value.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `JsonRejection` and `PathRejection`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For storage and configuration errors
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response(),
            Self::JsonRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(rejection.body_text())),
            )
                .into_response(),
            Self::PathRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(rejection.body_text())),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns its message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        tracing::error!("{}", message);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto::new(message))).into_response()
    }
}
