// Core structs: WeatherReading, WeatherCondition, subsystem errors
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation from the weather source (remote feed or local generator).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub timestamp: DateTime<Utc>,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Atmospheric pressure, hPa.
    pub pressure: f64,
    /// km/h.
    pub wind_speed: f64,
    /// Degrees, 0-360.
    pub wind_direction: f64,
    /// Millimeters over the hour.
    pub precipitation: f64,
    pub condition: WeatherCondition,
    pub uv_index: f64,
    /// Kilometers.
    pub visibility: f64,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl WeatherCondition {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Snowy => "snowy",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("http error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status: {0}")]
    InvalidResponse(u16),
    #[error("payload decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SourceError::Timeout
        } else if e.is_decode() {
            SourceError::Decode(e.to_string())
        } else {
            SourceError::Http(e.to_string())
        }
    }
}
