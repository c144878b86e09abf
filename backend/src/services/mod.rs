//! Business logic services for the WeFarm account/history backend

pub mod auth;
pub mod diagnosis;

pub use auth::AuthService;
pub use diagnosis::DiagnosisService;
