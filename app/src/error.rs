//! Error handling for the diagnosis pipeline
//!
//! Precondition failures are not errors: they resolve to redirects in the
//! guard layer. Errors here cover external-call failures and the handful of
//! user-visible aborts (e.g. branching to the heatmap without a location).

use thiserror::Error;

use crate::flow::location::GeolocationError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Location not found. Please set location first.")]
    LocationRequired,

    #[error("Location not found")]
    PlaceNotFound,

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    #[error("All questions must be answered before requesting a diagnosis")]
    ConversationIncomplete,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ExternalService(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias for the pipeline
pub type AppResult<T> = Result<T, AppError>;
