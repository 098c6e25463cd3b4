use crate::analyzer::seasonality::{DEFAULT_MAX_PERIOD_HOURS, detect_seasonality};
use crate::analyzer::series::{TimeSeriesPoint, hours_between};
use crate::analyzer::trend::linear_regression;
use chrono::Duration;
use std::f64::consts::TAU;

/// Minimum history length before a projection is worth anything.
const MIN_HISTORY: usize = 5;

/// Projects the series `horizon_hours` steps past its last sample, one point
/// per hour. The trend line is re-anchored on the raw mean of the input
/// rather than the fitted intercept, so the projection tracks the overall
/// level instead of compounding the regression's own offset. A detected
/// seasonal cycle rides on top as a sine wave.
///
/// Returns an empty vector when the history is shorter than [`MIN_HISTORY`];
/// otherwise the output always has exactly `horizon_hours` points and every
/// value is finite.
pub fn forecast(series: &[TimeSeriesPoint], horizon_hours: usize) -> Vec<TimeSeriesPoint> {
    if series.len() < MIN_HISTORY {
        return Vec::new();
    }

    let trend = linear_regression(series);
    let pattern = detect_seasonality(series, DEFAULT_MAX_PERIOD_HOURS);

    let first = series[0];
    let last = series[series.len() - 1];
    let mean = series.iter().map(|p| p.value).sum::<f64>() / series.len() as f64;

    (1..=horizon_hours)
        .map(|h| {
            let timestamp = last.timestamp + Duration::hours(h as i64);
            let hours_from_start = hours_between(first.timestamp, timestamp);

            let mut value = trend.slope * hours_from_start + mean;
            if let Some(p) = &pattern {
                value += p.amplitude
                    * (TAU * hours_from_start / p.period_hours as f64 + p.phase).sin();
            }
            if !value.is_finite() {
                value = last.value;
            }

            TimeSeriesPoint { timestamp, value }
        })
        .collect()
}
