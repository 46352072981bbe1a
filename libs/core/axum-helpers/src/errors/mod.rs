pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_config::Environment;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response body.
///
/// Every error surfaces to clients as `{"error": "<message>"}`. In the
/// development environment a `stack` field carries the debug rendering of
/// the error for easier diagnosis; it is never emitted in production.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Item not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Debug rendering of the error, present only in development
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Application error type that converts into HTTP responses.
///
/// Domain crates define their own `thiserror` enums and convert into this
/// type, which owns the status mapping and the response envelope.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let stack = Environment::from_env()
            .is_development()
            .then(|| format!("{self:?}"));

        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Io(err) => {
                tracing::error!("I/O error: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            stack,
        });

        (status, body).into_response()
    }
}
