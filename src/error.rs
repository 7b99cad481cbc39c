use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Request-level failures surfaced to HTTP callers.
///
/// Client-facing messages are fixed per variant; store-level detail is logged
/// server-side at the call site and never echoed in the response body.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or oversized input. Client fault, not retryable as-is.
    Validation { message: String },
    /// Referral code unknown. The client must correct the code.
    NotFound { message: String },
    /// The click insert failed. Transient; the caller may retry.
    StoreWrite,
    /// Any other failure. Treated as transient; the caller may retry.
    Unhandled,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::StoreWrite => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to track".to_string(),
            ),
            AppError::Unhandled => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Service temporarily unavailable".to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
