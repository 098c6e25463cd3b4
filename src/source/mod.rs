// Weather source module: remote JSON feed with fallback to the local
// mock generator.

pub mod generator;
pub mod remote;

use crate::model::{SourceError, WeatherReading};
use generator::MockGenerator;
use remote::RemoteSource;
use tracing::warn;

/// Contract for anything that can supply a window of hourly readings.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn fetch_history(&self, hours: u32) -> Result<Vec<WeatherReading>, SourceError>;
}

/// Fetches `hours` of readings from the remote feed when one is configured,
/// falling back to the local generator on any failure. Collection itself
/// never fails; a remote problem degrades to synthetic data with a warning.
pub async fn collect_history(
    remote: Option<&RemoteSource>,
    generator: &mut MockGenerator,
    hours: u32,
) -> Vec<WeatherReading> {
    if let Some(source) = remote {
        match source.fetch_history(hours).await {
            Ok(readings) if !readings.is_empty() => return readings,
            Ok(_) => warn!("Remote source returned no readings, using generator"),
            Err(e) => warn!("Remote source failed ({e}), using generator"),
        }
    }
    generator.generate_history(hours)
}
