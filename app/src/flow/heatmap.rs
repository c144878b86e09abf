//! Regional risk heatmap
//!
//! The density overlay is a presentation placeholder: a deterministic fan
//! of six weighted points around the center, not a statistical model.

use serde::Serialize;

use shared::{Coordinates, PlaceCandidate};

use crate::error::{AppError, AppResult};
use crate::external::geocoding::{short_display_name, GeocodingClient};

/// Offset (degrees latitude, degrees longitude) and intensity per point
const HEAT_OFFSETS: [(f64, f64, f64); 6] = [
    (0.0, 0.0, 0.85),
    (0.0009, 0.0028, 0.7),
    (-0.0006, 0.0038, 0.6),
    (0.0014, 0.0048, 0.5),
    (0.0028, 0.0012, 0.55),
    (-0.0009, -0.0018, 0.4),
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HeatPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub intensity: f64,
}

/// The six overlay points for a center, in fixed order
pub fn heat_points(center: Coordinates) -> Vec<HeatPoint> {
    HEAT_OFFSETS
        .iter()
        .map(|&(dlat, dlon, intensity)| HeatPoint {
            latitude: center.latitude + dlat,
            longitude: center.longitude + dlon,
            intensity,
        })
        .collect()
}

/// Hand-off from the heatmap to the treatment screen for a picked region
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionRisk {
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub risk_level: String,
}

pub struct HeatmapFlow<'a> {
    geocoding: &'a GeocodingClient,
    search_country: &'a str,
}

impl<'a> HeatmapFlow<'a> {
    pub fn new(geocoding: &'a GeocodingClient, search_country: &'a str) -> Self {
        Self {
            geocoding,
            search_country,
        }
    }

    /// Country-scoped place search resolving free text to a new center.
    ///
    /// Candidate labels truncate to the first two comma segments of the
    /// full display name.
    pub async fn search_region(&self, query: &str) -> AppResult<Vec<PlaceCandidate>> {
        let scoped = format!("{}, {}", query, self.search_country);
        let mut candidates = self.geocoding.search(&scoped).await?;
        if candidates.is_empty() {
            return Err(AppError::PlaceNotFound);
        }
        for candidate in &mut candidates {
            candidate.name = short_display_name(&candidate.display_name, 2);
        }
        Ok(candidates)
    }

    /// Region summary passed along when the user drills into treatment
    pub fn region_risk(&self, candidate: &PlaceCandidate) -> RegionRisk {
        RegionRisk {
            region: candidate.name.clone(),
            latitude: candidate.latitude,
            longitude: candidate.longitude,
            risk_level: "High".to_string(),
        }
    }
}
