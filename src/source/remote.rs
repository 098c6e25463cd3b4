use crate::model::{SourceError, WeatherReading};
use crate::source::Source;
use reqwest::Client;
use std::time::Duration;

/// Client for a remote weather feed serving hourly readings as a JSON array.
pub struct RemoteSource {
    client: Client,
    base_url: String,
}

impl RemoteSource {
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent("weatherdeck/0.1")
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client, base_url })
    }

    fn history_url(&self, hours: u32) -> String {
        format!("{}/weather?hours={}", self.base_url.trim_end_matches('/'), hours)
    }
}

#[async_trait::async_trait]
impl Source for RemoteSource {
    async fn fetch_history(&self, hours: u32) -> Result<Vec<WeatherReading>, SourceError> {
        let response = self.client.get(self.history_url(hours)).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(response.status().as_u16()));
        }

        let readings = response.json::<Vec<WeatherReading>>().await?;
        Ok(readings)
    }
}
