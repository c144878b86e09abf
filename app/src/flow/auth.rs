//! Login and registration against the account service

use shared::validate_credentials;

use crate::error::AppResult;
use crate::external::account::{Envelope, LoginResponse};
use crate::external::AccountClient;
use crate::session::{SessionStore, StorageBackend};

/// Outcome of a register or login attempt, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

pub struct AuthFlow<'a, B: StorageBackend> {
    account: &'a AccountClient,
    store: &'a SessionStore<B>,
}

impl<'a, B: StorageBackend> AuthFlow<'a, B> {
    pub fn new(account: &'a AccountClient, store: &'a SessionStore<B>) -> Self {
        Self { account, store }
    }

    pub async fn register(&self, username: &str, password: &str) -> AppResult<AuthOutcome> {
        if let Err(message) = validate_credentials(username, password) {
            return Ok(AuthOutcome {
                success: false,
                message: message.to_string(),
            });
        }
        let Envelope { success, message } = self.account.register(username, password).await?;
        Ok(AuthOutcome { success, message })
    }

    /// Attempt login; a successful response opens the session
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthOutcome> {
        if let Err(message) = validate_credentials(username, password) {
            return Ok(AuthOutcome {
                success: false,
                message: message.to_string(),
            });
        }

        let LoginResponse {
            success,
            message,
            user,
        } = self.account.login(username, password).await?;

        if success {
            if let Some(user) = &user {
                self.store.login(&user.username, &user.id.to_string())?;
                tracing::info!(username = %user.username, "user logged in");
            }
        }
        Ok(AuthOutcome { success, message })
    }

    /// Logout clears the whole session record in one step
    pub fn logout(&self) -> AppResult<()> {
        self.store.clear()
    }
}
