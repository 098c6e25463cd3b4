mod analyzer;
mod buffer;
mod config;
mod model;
mod report;
mod source;

use analyzer::{Metric, detect_seasonality, extract_time_series, forecast, linear_regression,
    moving_average};
use analyzer::seasonality::DEFAULT_MAX_PERIOD_HOURS;
use buffer::ReadingBuffer;
use config::{AppConfig, load_config};
use futures::future::join_all;
use model::WeatherReading;
use source::generator::MockGenerator;
use source::remote::RemoteSource;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration, falling back to defaults so a missing file never
    // stops the dashboard
    let config: Arc<AppConfig> = match load_config("weatherdeck.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            warn!("Config load error ({e}), using defaults");
            Arc::new(AppConfig::default())
        }
    };

    // Remote source is optional; the generator always exists as fallback
    let remote = match &config.remote_url {
        Some(url) => match RemoteSource::new(url.clone(), config.fetch_timeout_seconds) {
            Ok(source) => {
                info!("Remote source configured: {url}");
                Some(source)
            }
            Err(e) => {
                error!("Failed to build remote client: {e}");
                None
            }
        },
        None => None,
    };
    let mut generator = MockGenerator::new(config.location.clone());

    let buffer = Arc::new(Mutex::new(ReadingBuffer::new(config.buffer_capacity)));

    info!("weatherdeck started");

    let mut first_cycle = true;
    loop {
        let hours = if first_cycle { config.bootstrap_hours } else { 1 };
        first_cycle = false;

        info!("Collecting {hours}h of readings...");
        let readings = source::collect_history(remote.as_ref(), &mut generator, hours).await;

        {
            let mut buffer_guard = buffer.lock().await;
            for reading in readings {
                buffer_guard.push(reading);
            }
            if let Some(stats) = buffer_guard.stats() {
                info!(
                    "Buffer: {} readings, {} .. {}, temp avg {:.1} (min {:.1}, max {:.1}), mostly {}",
                    stats.total_readings,
                    stats.oldest,
                    stats.newest,
                    stats.temperature.avg,
                    stats.temperature.min,
                    stats.temperature.max,
                    stats.most_common_condition.label(),
                );
            }
        }

        let snapshot: Arc<Vec<WeatherReading>> =
            Arc::new(buffer.lock().await.snapshot());

        // Analyze all metrics concurrently
        let tasks: Vec<_> = Metric::ALL
            .iter()
            .map(|&metric| analyze_metric(metric, snapshot.clone(), config.clone()))
            .collect();
        join_all(tasks).await;

        info!(
            "Waiting {}s until the next collection (ctrl-c to stop)...",
            config.poll_interval_seconds
        );
        tokio::select! {
            _ = sleep(Duration::from_secs(config.poll_interval_seconds)) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown requested.");
                break;
            }
        }
    }
}

/// Runs the full analysis pipeline for one metric over a buffer snapshot and
/// logs the results. Never fails; every stage degrades to an empty or
/// default result on thin data.
async fn analyze_metric(metric: Metric, readings: Arc<Vec<WeatherReading>>, config: Arc<AppConfig>) {
    let series = extract_time_series(&readings, metric);
    if series.is_empty() {
        warn!("No usable {} samples in the buffer", metric.label());
        return;
    }

    let smoothed = moving_average(&series, config.smoothing_window);
    if let Some(last) = smoothed.last() {
        info!(
            "{}: smoothed over {} samples, latest {:.1}",
            metric.label(),
            smoothed.len(),
            last.value,
        );
    }

    let trend = linear_regression(&series);
    info!("{}", report::describe_trend(metric, &trend));

    let pattern = detect_seasonality(&series, DEFAULT_MAX_PERIOD_HOURS);
    info!("{}", report::describe_seasonality(metric, pattern.as_ref()));

    let projection = forecast(&series, config.forecast_horizon_hours);
    info!("{}", report::describe_forecast(metric, &projection));
}
