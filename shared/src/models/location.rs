//! Location models

use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// A resolved farm location
///
/// `city` and `country` are best-effort: reverse geocoding may fail without
/// failing location acquisition, in which case they are absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: None,
            country: None,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// "City, Country" label, omitting whichever part is missing
    pub fn display_label(&self) -> String {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) if !country.is_empty() => {
                format!("{}, {}", city, country)
            }
            (Some(city), _) => city.clone(),
            (None, Some(country)) => country.clone(),
            (None, None) => format!("{:.4}, {:.4}", self.latitude, self.longitude),
        }
    }
}

/// A candidate returned by forward place search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_prefers_city_and_country() {
        let mut loc = Location::new(18.78, 98.98);
        assert_eq!(loc.display_label(), "18.7800, 98.9800");

        loc.city = Some("Chiang Mai".to_string());
        assert_eq!(loc.display_label(), "Chiang Mai");

        loc.country = Some("Thailand".to_string());
        assert_eq!(loc.display_label(), "Chiang Mai, Thailand");
    }

    #[test]
    fn display_label_ignores_empty_country() {
        let loc = Location {
            latitude: 10.0,
            longitude: 76.0,
            city: Some("Palakkad".to_string()),
            country: Some(String::new()),
        };
        assert_eq!(loc.display_label(), "Palakkad");
    }
}
