//! Maps domain `AppError` to AIS protocol HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use ais_core::error::{AppError, ErrorKind};

/// Numeric error codes carried in every error body, fixed by the
/// protocol.
mod ais_code {
    pub const INVALID_REQUEST: i32 = 0;
    pub const NOT_FOUND: i32 = 4;
    pub const METHOD_NOT_ALLOWED: i32 = 7;
    pub const GONE: i32 = 9;
    pub const INTERNAL_ERROR: i32 = 11;
    pub const QUERY_FAILED: i32 = 12;
    pub const UNSUPPORTED_MEDIA: i32 = 17;
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Protocol error code.
    pub error_code: i32,
    /// Human-readable message.
    pub message: String,
}

/// Handler-level error wrapper around the domain error.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match err.kind {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, ais_code::NOT_FOUND),
            ErrorKind::Gone => (StatusCode::GONE, ais_code::GONE),
            // The destination of a move/copy not resolving is reported
            // on the same status and code as a plain miss; the message
            // names the destination.
            ErrorKind::InvalidParent => (StatusCode::NOT_FOUND, ais_code::NOT_FOUND),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, ais_code::QUERY_FAILED),
            ErrorKind::BadRequest => (StatusCode::BAD_REQUEST, ais_code::INVALID_REQUEST),
            ErrorKind::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, ais_code::METHOD_NOT_ALLOWED)
            }
            ErrorKind::UnsupportedMedia => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, ais_code::UNSUPPORTED_MEDIA)
            }
            ErrorKind::Internal | ErrorKind::Configuration => {
                tracing::error!(error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, ais_code::INTERNAL_ERROR)
            }
        };

        let body = ApiErrorResponse {
            error_code,
            message: err.message,
        };
        (status, Json(body)).into_response()
    }
}
