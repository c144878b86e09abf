//! Weather models and weather-code classification
//!
//! Current conditions are keyed by a numeric weather code. The code maps to
//! one of eight condition buckets and, separately, to one of five icon
//! buckets via ordered threshold tables. Both mappings are total.

use serde::{Deserialize, Serialize};

/// Condition bucket for a numeric weather code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Foggy,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "Clear Sky",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon bucket for a numeric weather code (coarser than the condition table)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Storm,
}

/// Map a weather code to its condition bucket
pub fn condition_for_code(code: u16) -> WeatherCondition {
    match code {
        0 => WeatherCondition::ClearSky,
        1..=3 => WeatherCondition::PartlyCloudy,
        4..=49 => WeatherCondition::Foggy,
        50..=59 => WeatherCondition::Drizzle,
        60..=69 => WeatherCondition::Rain,
        70..=79 => WeatherCondition::Snow,
        80..=99 => WeatherCondition::Thunderstorm,
        _ => WeatherCondition::Unknown,
    }
}

/// Map a weather code to its icon bucket
pub fn icon_for_code(code: u16) -> WeatherIcon {
    match code {
        0 => WeatherIcon::Clear,
        1..=3 => WeatherIcon::PartlyCloudy,
        4..=59 => WeatherIcon::Cloudy,
        60..=79 => WeatherIcon::Rain,
        _ => WeatherIcon::Storm,
    }
}

/// Current conditions as shown on the weather screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub temperature_celsius: i32,
    pub humidity_percent: i32,
    pub wind_speed_kmh: i32,
    pub condition: WeatherCondition,
    pub icon: WeatherIcon,
    pub feels_like_celsius: i32,
    pub pressure_hpa: i32,
    pub visibility_km: i32,
}

impl WeatherReport {
    /// Fixed record substituted when the weather fetch fails.
    ///
    /// A network failure degrades to this value instead of surfacing an
    /// error state on the screen.
    pub fn fallback() -> Self {
        Self {
            temperature_celsius: 28,
            humidity_percent: 65,
            wind_speed_kmh: 12,
            condition: WeatherCondition::PartlyCloudy,
            icon: WeatherIcon::PartlyCloudy,
            feels_like_celsius: 30,
            pressure_hpa: 1013,
            visibility_km: 10,
        }
    }

    /// Advisory text keyed off the humidity reading
    pub fn advisory(&self) -> &'static str {
        if self.humidity_percent > 70 {
            "High humidity detected. Monitor crops for fungal diseases like blight and mildew. \
             Ensure proper ventilation in fields."
        } else if self.humidity_percent < 40 {
            "Low humidity conditions. Consider irrigation to prevent water stress on crops."
        } else {
            "Weather conditions are favorable for most crops. Continue regular monitoring for \
             any signs of disease."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_thresholds() {
        assert_eq!(condition_for_code(0), WeatherCondition::ClearSky);
        assert_eq!(condition_for_code(1), WeatherCondition::PartlyCloudy);
        assert_eq!(condition_for_code(3), WeatherCondition::PartlyCloudy);
        assert_eq!(condition_for_code(4), WeatherCondition::Foggy);
        assert_eq!(condition_for_code(49), WeatherCondition::Foggy);
        assert_eq!(condition_for_code(50), WeatherCondition::Drizzle);
        assert_eq!(condition_for_code(59), WeatherCondition::Drizzle);
        assert_eq!(condition_for_code(60), WeatherCondition::Rain);
        assert_eq!(condition_for_code(69), WeatherCondition::Rain);
        assert_eq!(condition_for_code(70), WeatherCondition::Snow);
        assert_eq!(condition_for_code(79), WeatherCondition::Snow);
        assert_eq!(condition_for_code(80), WeatherCondition::Thunderstorm);
        assert_eq!(condition_for_code(99), WeatherCondition::Thunderstorm);
        assert_eq!(condition_for_code(100), WeatherCondition::Unknown);
    }

    #[test]
    fn icon_thresholds() {
        assert_eq!(icon_for_code(0), WeatherIcon::Clear);
        assert_eq!(icon_for_code(2), WeatherIcon::PartlyCloudy);
        assert_eq!(icon_for_code(45), WeatherIcon::Cloudy);
        assert_eq!(icon_for_code(59), WeatherIcon::Cloudy);
        assert_eq!(icon_for_code(61), WeatherIcon::Rain);
        assert_eq!(icon_for_code(79), WeatherIcon::Rain);
        assert_eq!(icon_for_code(95), WeatherIcon::Storm);
    }

    #[test]
    fn fallback_report_values() {
        let report = WeatherReport::fallback();
        assert_eq!(report.temperature_celsius, 28);
        assert_eq!(report.humidity_percent, 65);
        assert_eq!(report.wind_speed_kmh, 12);
        assert_eq!(report.condition, WeatherCondition::PartlyCloudy);
        assert_eq!(report.icon, WeatherIcon::PartlyCloudy);
        assert_eq!(report.feels_like_celsius, 30);
        assert_eq!(report.pressure_hpa, 1013);
        assert_eq!(report.visibility_km, 10);
    }

    #[test]
    fn advisory_buckets() {
        let mut report = WeatherReport::fallback();
        report.humidity_percent = 80;
        assert!(report.advisory().contains("fungal"));
        report.humidity_percent = 30;
        assert!(report.advisory().contains("irrigation"));
        report.humidity_percent = 55;
        assert!(report.advisory().contains("favorable"));
    }
}
