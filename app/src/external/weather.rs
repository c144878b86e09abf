//! Open-Meteo client for current conditions
//!
//! Open-Meteo is keyless. The raw response carries numeric weather codes
//! and metric floats; mapping to the display report happens here so the
//! rest of the pipeline only ever sees a `WeatherReport`.

use reqwest::Client;
use serde::Deserialize;

use shared::{condition_for_code, icon_for_code, WeatherReport};

use crate::error::{AppError, AppResult};

/// Current-conditions variables requested from Open-Meteo
const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code,apparent_temperature,pressure_msl,visibility";

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    current: OpenMeteoCurrent,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: u16,
    apparent_temperature: f64,
    pressure_msl: f64,
    /// Meters, converted to whole kilometers in the report
    visibility: f64,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::with_base_url("https://api.open-meteo.com/v1".to_string())
    }

    /// Custom base URL, for tests against a local mock
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch current conditions for a coordinate pair
    pub async fn current_weather(&self, latitude: f64, longitude: f64) -> AppResult<WeatherReport> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}",
            self.base_url, latitude, longitude, CURRENT_FIELDS
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "weather service returned {}",
                response.status()
            )));
        }

        let data: OpenMeteoResponse = response.json().await?;
        Ok(report_from_current(&data.current))
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

fn report_from_current(current: &OpenMeteoCurrent) -> WeatherReport {
    WeatherReport {
        temperature_celsius: current.temperature_2m.round() as i32,
        humidity_percent: current.relative_humidity_2m.round() as i32,
        wind_speed_kmh: current.wind_speed_10m.round() as i32,
        condition: condition_for_code(current.weather_code),
        icon: icon_for_code(current.weather_code),
        feels_like_celsius: current.apparent_temperature.round() as i32,
        pressure_hpa: current.pressure_msl.round() as i32,
        visibility_km: (current.visibility / 1000.0).round() as i32,
    }
}
