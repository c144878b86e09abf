//! Clients for the services the pipeline talks to

pub mod account;
pub mod geocoding;
pub mod prediction;
pub mod weather;

pub use account::AccountClient;
pub use geocoding::GeocodingClient;
pub use prediction::PredictionClient;
pub use weather::WeatherClient;
