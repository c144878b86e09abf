//! Authentication service for user registration and login

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use shared::validate_credentials;

use crate::error::{AppError, AppResult};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
}

/// User info returned to a freshly logged-in client
#[derive(Debug)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
}

/// User row from the database
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a new user account
    pub async fn register(&self, username: &str, password: &str) -> AppResult<i64> {
        validate_credentials(username, password)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let existing =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = $1")
                .bind(username)
                .fetch_one(&self.db)
                .await?;
        if existing > 0 {
            return Err(AppError::DuplicateUsername);
        }

        let password_hash = hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(username)
        .bind(&password_hash)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(username, "user registered");
        Ok(id)
    }

    /// Verify credentials and return the user.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable on the
    /// wire.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser> {
        validate_credentials(username, password)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let matches = verify(password, &row.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;
        if !matches {
            return Err(AppError::InvalidCredentials);
        }

        Ok(AuthenticatedUser {
            id: row.id,
            username: row.username,
        })
    }
}
