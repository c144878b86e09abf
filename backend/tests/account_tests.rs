//! Account and history wire contract tests
//!
//! DB-free checks of the behaviors the legacy clients depend on: the
//! always-200 failure envelope, missing-field handling, credential
//! validation, and password hashing. Tests needing live rows run against
//! a real database elsewhere; everything here uses a lazy pool that never
//! connects.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use proptest::prelude::*;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use shared::{validate_confidence, validate_credentials};
use wefarm_backend::config::{Config, DatabaseConfig, ServerConfig};
use wefarm_backend::{create_app, AppError, AppState};

fn test_state() -> AppState {
    let db = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/wefarm_test")
        .unwrap();
    AppState {
        db,
        config: Arc::new(Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://postgres@localhost/wefarm_test".to_string(),
                max_connections: 1,
                min_connections: 1,
            },
        }),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Failure envelope
// ============================================================================

#[tokio::test]
async fn domain_errors_answer_200_with_the_failure_envelope() {
    let response = AppError::DuplicateUsername.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"success": false, "message": "Username already exists"}));

    let response = AppError::InvalidCredentials.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn internal_errors_never_leak_details() {
    let response = AppError::Internal("bcrypt exploded".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert!(!message.contains("bcrypt"));
}

// ============================================================================
// Missing-field handling (no database touched)
// ============================================================================

#[tokio::test]
async fn register_without_password_gets_the_envelope_not_a_transport_error() {
    let app = create_app(test_state());
    let request = Request::post("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username": "farmer1"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing field: password");
}

#[tokio::test]
async fn get_history_requires_a_user_id() {
    let app = create_app(test_state());
    let request = Request::get("/get_history").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing field: user_id");
}

#[tokio::test]
async fn root_identifies_the_service() {
    let app = create_app(test_state());
    let request = Request::get("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_identity_and_database_state() {
    let app = create_app(test_state());
    let request = Request::get("/health").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["service"], "wefarm-account-history");
    assert_eq!(body["status"], "healthy");
    // lazy pool, nothing listening
    assert_eq!(body["database"], "disconnected");
}

// ============================================================================
// Credential validation properties
// ============================================================================

fn username_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{2,20}"
}

fn password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#$%]{6,20}"
}

proptest! {
    #[test]
    fn well_formed_credentials_validate(
        username in username_strategy(),
        password in password_strategy(),
    ) {
        prop_assert!(validate_credentials(&username, &password).is_ok());
    }

    #[test]
    fn blank_username_is_rejected(password in password_strategy()) {
        prop_assert!(validate_credentials("", &password).is_err());
        prop_assert!(validate_credentials("   ", &password).is_err());
    }

    #[test]
    fn overlong_username_is_rejected(
        username in "[a-z]{51,80}",
        password in password_strategy(),
    ) {
        prop_assert!(validate_credentials(&username, &password).is_err());
    }

    #[test]
    fn stored_confidence_stays_in_unit_interval(confidence in 0.0f64..=1.0) {
        prop_assert!(validate_confidence(confidence).is_ok());
    }

    #[test]
    fn out_of_range_confidence_is_rejected(confidence in 1.0001f64..100.0) {
        prop_assert!(validate_confidence(confidence).is_err());
        prop_assert!(validate_confidence(-confidence).is_err());
    }
}

// ============================================================================
// Password hashing
// ============================================================================

proptest! {
    // bcrypt is slow; keep the case count small
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn hashing_verifies_only_the_original_password(password in password_strategy()) {
        let hashed = bcrypt::hash(&password, 4).unwrap();
        prop_assert!(bcrypt::verify(&password, &hashed).unwrap());
        prop_assert!(!bcrypt::verify("not-the-password", &hashed).unwrap());
        // the hash never embeds the cleartext
        prop_assert!(!hashed.contains(&password));
    }
}
