//! Weather screen flow
//!
//! Fetch failure here substitutes the fixed fallback record instead of
//! surfacing an error; the screen always has something to show.

use shared::{Location, WeatherReport};

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;
use crate::session::{SessionStore, StorageBackend};

pub struct WeatherFlow<'a, B: StorageBackend> {
    weather: &'a WeatherClient,
    store: &'a SessionStore<B>,
}

impl<'a, B: StorageBackend> WeatherFlow<'a, B> {
    pub fn new(weather: &'a WeatherClient, store: &'a SessionStore<B>) -> Self {
        Self { weather, store }
    }

    /// Current conditions for the stored location.
    ///
    /// Requires a location in the session; the guard layer normally
    /// redirects before this runs, so a missing location here is a
    /// programming error surfaced as `LocationRequired`.
    pub async fn load(&self) -> AppResult<WeatherReport> {
        let data = self.store.load()?;
        let location = data.location.ok_or(AppError::LocationRequired)?;
        Ok(self.report_for(&location).await)
    }

    /// Fetch with the graceful-degradation policy applied
    pub async fn report_for(&self, location: &Location) -> WeatherReport {
        match self
            .weather
            .current_weather(location.latitude, location.longitude)
            .await
        {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(error = %err, "weather fetch failed, using fallback record");
                WeatherReport::fallback()
            }
        }
    }
}
