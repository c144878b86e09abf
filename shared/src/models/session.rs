//! User session model

use serde::{Deserialize, Serialize};

/// Login state created at sign-in and cleared at logout
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Session {
    pub is_logged_in: bool,
    pub username: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// Session for a freshly authenticated user
    pub fn logged_in(username: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            username: Some(username.into()),
            user_id: Some(user_id.into()),
        }
    }

    /// Display name, falling back to the generic greeting target
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Farmer")
    }
}
