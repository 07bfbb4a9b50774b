//! API error types and JSON error response formatting.
//!
//! ApiError provides a consistent JSON error response format across all
//! endpoints, mapping core errors to appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use segue_core::error::SegueError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "not_found").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid parameters.
    BadRequest(String),
    /// 404 Not Found - track name or index does not exist.
    NotFound(String),
    /// 500 Internal Server Error - unexpected server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<SegueError> for ApiError {
    fn from(err: SegueError) -> Self {
        match &err {
            // A stale or foreign index is a client-side lookup miss from
            // the API's perspective, same as an unknown name.
            SegueError::NotFound { .. } | SegueError::IndexOutOfRange { .. } => {
                ApiError::NotFound(err.to_string())
            }
            SegueError::Config(msg) => ApiError::BadRequest(msg.clone()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}
