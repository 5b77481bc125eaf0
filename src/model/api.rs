use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome marker included in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
    pub status: ResponseStatus,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Error,
        }
    }
}

/// Success response carrying only a message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
    pub status: ResponseStatus,
}

impl MessageDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: ResponseStatus::Success,
        }
    }
}
