use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// =============================================================================
// ApiError
// =============================================================================

/// Errors surfaced to HTTP clients.
///
/// Errors render as plain text with a trailing newline. Clients match the
/// 404 body `"Task not found\n"` byte-for-byte, so the exact string is part
/// of the wire contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Task not found")]
    TaskNotFound,

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), format!("{self}\n")).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
