use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<UnknownGroup> for AppError {
    fn from(err: UnknownGroup) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failures of the outbound schedule request.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("schedule endpoint returned {0}")]
    Status(u16),

    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown group: {0}")]
pub struct UnknownGroup(pub String);
