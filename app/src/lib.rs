//! WeFarm diagnosis pipeline
//!
//! The client-side session/state-handoff pipeline of the WeFarm crop
//! disease platform: a typed session store, a centralized route-guard
//! table, per-screen flows, and HTTP clients for the external
//! collaborators (weather, geocoding, prediction, account/history).

pub mod config;
pub mod error;
pub mod external;
pub mod flow;
pub mod guard;
pub mod navigation;
pub mod session;

pub use config::Config;
pub use error::{AppError, AppResult};

use crate::external::{AccountClient, GeocodingClient, PredictionClient, WeatherClient};
use crate::session::{FileBackend, SessionStore};

/// Clients and session store assembled from one configuration
pub struct App {
    pub config: Config,
    pub weather: WeatherClient,
    pub geocoding: GeocodingClient,
    pub prediction: PredictionClient,
    pub account: AccountClient,
    pub store: SessionStore<FileBackend>,
}

impl App {
    pub fn from_config(config: Config) -> Self {
        let weather = WeatherClient::with_base_url(config.weather.base_url.clone());
        let geocoding = GeocodingClient::new(
            config.geocoding.reverse_base_url.clone(),
            config.geocoding.search_base_url.clone(),
        );
        let prediction = PredictionClient::new(config.prediction.base_url.clone());
        let account = AccountClient::new(config.account.base_url.clone());
        let store = SessionStore::new(FileBackend::new(&config.session.file_path));
        Self {
            config,
            weather,
            geocoding,
            prediction,
            account,
            store,
        }
    }
}
