//! Shared types and models for the WeFarm crop disease diagnosis platform
//!
//! This crate contains types shared between the diagnosis pipeline client
//! and the account/history backend.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
