//! Location acquisition
//!
//! Two acquisition paths, device geolocation and free-text place search,
//! converge on the same `Location` record written to the session store.
//! Reverse geocoding is best-effort on both paths: its failure only omits
//! the city and country fields, never the acquired coordinates.

use thiserror::Error;

use shared::{Coordinates, Location, PlaceCandidate};

use crate::error::{AppError, AppResult};
use crate::external::GeocodingClient;
use crate::session::{SessionStore, StorageBackend};

/// Fallback coordinates when no position can be determined
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 19.07,
    longitude: 72.87,
};

/// Why the device could not produce a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Location permission was denied")]
    PermissionDenied,
    #[error("Location information unavailable")]
    PositionUnavailable,
    #[error("Location request timed out")]
    Timeout,
}

/// Source of device positions, abstracted for tests and headless runs
pub trait GeolocationProvider {
    fn current_position(
        &self,
    ) -> impl std::future::Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

/// Where the location screen currently stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Idle,
    Requesting,
    Granted(Location),
    Denied(GeolocationError),
}

pub struct LocationFlow<'a, B: StorageBackend> {
    geocoding: &'a GeocodingClient,
    store: &'a SessionStore<B>,
    state: LocationState,
}

impl<'a, B: StorageBackend> LocationFlow<'a, B> {
    pub fn new(geocoding: &'a GeocodingClient, store: &'a SessionStore<B>) -> Self {
        Self {
            geocoding,
            store,
            state: LocationState::Idle,
        }
    }

    pub fn state(&self) -> &LocationState {
        &self.state
    }

    /// Reset back to Idle so the user can pick a different location
    pub fn change_location(&mut self) {
        self.state = LocationState::Idle;
    }

    /// Device path: ask the provider for a position, then enrich it
    pub async fn detect<P: GeolocationProvider>(&mut self, provider: &P) -> AppResult<Location> {
        self.state = LocationState::Requesting;
        let coords = match provider.current_position().await {
            Ok(coords) => coords,
            Err(cause) => {
                self.state = LocationState::Denied(cause);
                return Err(cause.into());
            }
        };

        let mut location = Location::new(coords.latitude, coords.longitude);
        match self.geocoding.reverse(coords.latitude, coords.longitude).await {
            Ok(names) => {
                location.city = names.city;
                location.country = names.country;
            }
            Err(err) => {
                tracing::warn!(error = %err, "reverse geocoding failed, keeping bare coordinates");
            }
        }

        self.store.set_location(location.clone())?;
        self.state = LocationState::Granted(location.clone());
        Ok(location)
    }

    /// Search path: free-text query resolving to up to five candidates
    pub async fn search(&self, query: &str) -> AppResult<Vec<PlaceCandidate>> {
        let candidates = self.geocoding.search(query).await?;
        if candidates.is_empty() {
            return Err(AppError::PlaceNotFound);
        }
        Ok(candidates)
    }

    /// Search path: the user picked a candidate.
    ///
    /// Reverse geocoding fills in city and country; a missing city falls
    /// back to the candidate's own name, and a failed lookup keeps the
    /// candidate name with an empty country.
    pub async fn choose(&mut self, candidate: &PlaceCandidate) -> AppResult<Location> {
        let mut location = Location::new(candidate.latitude, candidate.longitude);
        match self.geocoding.reverse(candidate.latitude, candidate.longitude).await {
            Ok(names) => {
                location.city = names.city.or_else(|| Some(candidate.name.clone()));
                location.country = names.country;
            }
            Err(err) => {
                tracing::warn!(error = %err, "reverse geocoding failed for picked place");
                location.city = Some(candidate.name.clone());
                location.country = Some(String::new());
            }
        }

        self.store.set_location(location.clone())?;
        self.state = LocationState::Granted(location.clone());
        Ok(location)
    }
}
