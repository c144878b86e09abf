//! Error handling for the WeFarm account/history backend
//!
//! The wire contract predates this server: clients expect HTTP 200 with a
//! `{success, message}` envelope on every outcome, failures included. The
//! error response therefore always carries status 200 and signals failure
//! through the envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure envelope matching the legacy wire contract
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                "A server error occurred. Please try again.".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                "A server error occurred. Please try again.".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            success: false,
            message,
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Result type alias for the backend
pub type AppResult<T> = Result<T, AppError>;
