//! Route definitions for the WeFarm account/history backend
//!
//! Legacy flat paths, no versioned prefix: clients predate this server.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/save_diagnosis", post(handlers::save_diagnosis))
        .route("/get_history", get(handlers::get_history))
}
