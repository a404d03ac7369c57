//! Error types for the store and service boundaries.
//!
//! [`StoreError`] is what repositories report; it never reaches a client.
//! [`AppError`] is the service-level taxonomy, mapped to HTTP responses by a
//! fixed table in its [`IntoResponse`] implementation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Failure reported by a link store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("constraint violation: {}", .constraint.as_deref().unwrap_or("unknown"))]
    ConstraintViolation { constraint: Option<String> },

    /// A schema CHECK constraint rejected the row.
    #[error("check violation: {}", .constraint.as_deref().unwrap_or("unknown"))]
    CheckViolation { constraint: Option<String> },

    /// The store could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store call did not complete within the configured bound.
    #[error("store call timed out")]
    Timeout,
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            let constraint = db.constraint().map(str::to_owned);

            if db.is_unique_violation() {
                return StoreError::ConstraintViolation { constraint };
            }
            if db.is_check_violation() {
                return StoreError::CheckViolation { constraint };
            }
        }

        StoreError::Unavailable(e.to_string())
    }
}

/// Service-level error returned to HTTP handlers and the admin CLI.
///
/// Messages are client-safe: store details are logged where they occur and
/// never carried in this type.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Invalid code format")]
    InvalidCode,

    #[error("Code already exists")]
    CodeTaken,

    #[error("Not found")]
    NotFound,

    #[error("Server error")]
    Timeout,

    #[error("Server error")]
    Internal,
}

impl AppError {
    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidCode => StatusCode::BAD_REQUEST,
            AppError::CodeTaken => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Timeout | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
