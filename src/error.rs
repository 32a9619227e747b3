//! Application error taxonomy and HTTP mapping.
//!
//! Every error kind maps directly to a boundary status response; nothing is
//! retried internally. `Storage` is the only kind that is not a caller
//! mistake and the only one logged at error level. Signature mismatches and
//! unknown-token lookups are routine occurrences (stale or tampered links)
//! and are never treated as system faults.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors surfaced by the tracking engine and its storage backends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required pixel parameter (tid, mid, or sig) was absent or empty.
    #[error("{message}")]
    MissingParameters { message: String, details: Value },

    /// The provided signature does not match the signed tid/mid pair.
    #[error("{message}")]
    InvalidSignature { message: String, details: Value },

    /// Caller-supplied input failed validation (e.g. empty destination URL).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Unknown token or missing resource.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The underlying store is unavailable or a query failed.
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn missing_parameters(message: impl Into<String>, details: Value) -> Self {
        Self::MissingParameters {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_signature(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidSignature {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::MissingParameters { message, details } => (
                StatusCode::BAD_REQUEST,
                "missing_parameters",
                message,
                details,
            ),
            AppError::InvalidSignature { message, details } => (
                StatusCode::BAD_REQUEST,
                "invalid_signature",
                message,
                details,
            ),
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Storage { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        AppError::storage("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::missing_parameters("Missing parameters", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::invalid_signature("Invalid signature", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::bad_request("Missing url", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::not_found("Unknown link", json!({})),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::storage("Database error", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Unknown link", json!({ "token": "abc" }));
        assert_eq!(err.to_string(), "Unknown link");
    }
}
