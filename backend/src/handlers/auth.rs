//! Authentication handlers
//!
//! Request fields are optional at the deserialization layer so that a
//! missing field answers with the failure envelope instead of a transport
//! error.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::AuthService;
use crate::AppState;

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

fn required(field: Option<String>, name: &'static str) -> Result<String, AppError> {
    field.ok_or(AppError::MissingField(name))
}

/// Register endpoint handler
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let username = required(body.username, "username")?;
    let password = required(body.password, "password")?;

    let auth_service = AuthService::new(state.db.clone());
    auth_service.register(&username, &password).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Registration successful".to_string(),
    }))
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = required(body.username, "username")?;
    let password = required(body.password, "password")?;

    let auth_service = AuthService::new(state.db.clone());
    let user = auth_service.login(&username, &password).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: UserResponse {
            id: user.id,
            username: user.username,
        },
    }))
}
