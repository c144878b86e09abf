//! HTTP request handlers for the WeFarm account/history backend

pub mod auth;
pub mod diagnosis;
pub mod health;

pub use auth::{login, register};
pub use diagnosis::{get_history, save_diagnosis};
pub use health::health_check;
