//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Coarse severity label attached to a diagnosis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Map a free-text risk label to a severity bucket.
    ///
    /// Unrecognized or absent labels fall back to `Low`, matching how
    /// history rows without a risk column are displayed.
    pub fn from_risk_label(label: Option<&str>) -> Self {
        match label.map(|l| l.to_lowercase()) {
            Some(l) if l == "high" => Severity::High,
            Some(l) if l == "medium" => Severity::Medium,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}
