//! Reverse geocoding and place search
//!
//! Reverse lookups go to BigDataCloud's keyless client endpoint; forward
//! place search goes to Nominatim.

use reqwest::Client;
use serde::Deserialize;

use shared::PlaceCandidate;

use crate::error::{AppError, AppResult};

const USER_AGENT: &str = "wefarm-app/0.1";

#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    reverse_base_url: String,
    search_base_url: String,
}

/// Human-readable place names for a coordinate pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseGeocode {
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BdcResponse {
    #[serde(default)]
    city: String,
    #[serde(default)]
    locality: String,
    #[serde(default, rename = "countryName")]
    country_name: String,
}

#[derive(Debug, Deserialize)]
struct NominatimItem {
    lat: String,
    lon: String,
    display_name: String,
}

impl GeocodingClient {
    pub fn new(reverse_base_url: String, search_base_url: String) -> Self {
        Self {
            client: Client::new(),
            reverse_base_url,
            search_base_url,
        }
    }

    /// Resolve a coordinate pair to city and country names.
    ///
    /// The provider sometimes returns an empty `city` for rural points,
    /// in which case the broader locality stands in.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> AppResult<ReverseGeocode> {
        let url = format!(
            "{}/reverse-geocode-client?latitude={}&longitude={}&localityLanguage=en",
            self.reverse_base_url, latitude, longitude
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "reverse geocoding returned {}",
                response.status()
            )));
        }

        let data: BdcResponse = response.json().await?;
        let city = if !data.city.is_empty() {
            Some(data.city)
        } else if !data.locality.is_empty() {
            Some(data.locality)
        } else {
            None
        };
        let country = (!data.country_name.is_empty()).then_some(data.country_name);
        Ok(ReverseGeocode { city, country })
    }

    /// Search for places by free-text query, at most five candidates
    pub async fn search(&self, query: &str) -> AppResult<Vec<PlaceCandidate>> {
        let url = format!("{}/search", self.search_base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "5")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "place search returned {}",
                response.status()
            )));
        }

        let items: Vec<NominatimItem> = response.json().await?;
        let candidates = items
            .into_iter()
            .filter_map(|item| {
                let latitude = item.lat.parse::<f64>().ok()?;
                let longitude = item.lon.parse::<f64>().ok()?;
                Some(PlaceCandidate {
                    name: short_display_name(&item.display_name, 1),
                    latitude,
                    longitude,
                    display_name: item.display_name,
                })
            })
            .collect();
        Ok(candidates)
    }
}

/// First `segments` comma-separated parts of a Nominatim display name
pub fn short_display_name(display_name: &str, segments: usize) -> String {
    display_name
        .split(',')
        .take(segments)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_display_name_keeps_leading_segments() {
        let full = "Nashik, Nashik District, Maharashtra, 422001, India";
        assert_eq!(short_display_name(full, 1), "Nashik");
        assert_eq!(short_display_name(full, 2), "Nashik, Nashik District");
    }

    #[test]
    fn short_display_name_handles_short_input() {
        assert_eq!(short_display_name("Pune", 2), "Pune");
    }
}
