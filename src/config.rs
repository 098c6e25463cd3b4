use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of a remote weather feed. When unset (or unreachable) the
    /// local generator supplies readings instead.
    pub remote_url: Option<String>,
    pub fetch_timeout_seconds: u64,
    pub poll_interval_seconds: u64,
    /// Max readings kept in the history buffer.
    pub buffer_capacity: usize,
    /// Hours of history collected on the first cycle.
    pub bootstrap_hours: u32,
    pub forecast_horizon_hours: usize,
    pub smoothing_window: usize,
    pub location: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote_url: None,
            fetch_timeout_seconds: 10,
            poll_interval_seconds: 3600,
            buffer_capacity: 168,
            bootstrap_hours: 72,
            forecast_horizon_hours: 24,
            smoothing_window: 3,
            location: "Simulated Location".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
