//! Liveness endpoint for the account/history service

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Report service identity and whether the diagnosis store is reachable
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(HealthResponse {
        service: "wefarm-account-history",
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
