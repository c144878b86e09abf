//! Configuration for the diagnosis pipeline
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WEFARM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Prediction service configuration
    pub prediction: PredictionConfig,

    /// Account/history service configuration
    pub account: AccountConfig,

    /// Weather service configuration
    pub weather: WeatherConfig,

    /// Geocoding services configuration
    pub geocoding: GeocodingConfig,

    /// Heatmap screen configuration
    pub heatmap: HeatmapConfig,

    /// Session store configuration
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Prediction service base URL
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    /// Account/history service base URL
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Current-conditions API base URL
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Reverse-geocoding API base URL
    pub reverse_base_url: String,

    /// Forward place-search API base URL
    pub search_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeatmapConfig {
    /// Country appended to region searches on the heatmap screen
    pub search_country: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Path of the durable session file
    pub file_path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WEFARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("prediction.base_url", "http://127.0.0.1:8000")?
            .set_default("account.base_url", "http://localhost:8080")?
            .set_default("weather.base_url", "https://api.open-meteo.com/v1")?
            .set_default(
                "geocoding.reverse_base_url",
                "https://api.bigdatacloud.net/data",
            )?
            .set_default(
                "geocoding.search_base_url",
                "https://nominatim.openstreetmap.org",
            )?
            .set_default("heatmap.search_country", "India")?
            .set_default("session.file_path", ".wefarm-session.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WEFARM_ prefix)
            .add_source(
                Environment::with_prefix("WEFARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
