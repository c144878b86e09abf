//! Diagnosis history and user feedback models

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// One row of a user's diagnosis history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisHistoryEntry {
    pub id: String,
    pub date: String,
    pub disease: String,
    pub severity: Severity,
    pub confidence: f64,
}

/// A feedback entry appended by the feedback screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackEntry {
    pub username: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}
