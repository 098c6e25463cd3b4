use crate::analyzer::series::TimeSeriesPoint;
use serde::Serialize;

/// Default upper bound on candidate periods, in hours. One day covers the
/// diurnal cycles the dashboard cares about.
pub const DEFAULT_MAX_PERIOD_HOURS: usize = 24;

/// Minimum absolute lag autocovariance for a pattern to count. Unscaled by
/// variance, so the check is sensitive to the series' units.
pub const MIN_CORRELATION: f64 = 0.3;

/// A repeating cycle found by the autocorrelation scan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonalPattern {
    /// Hours per cycle, at least 2.
    pub period_hours: u32,
    /// Always >= 0.
    pub amplitude: f64,
    /// Radians. Unestimated placeholder, always 0; a real estimate needs
    /// spectral analysis.
    pub phase: f64,
}

fn autocovariance(values: &[f64], mean: f64, lag: usize) -> f64 {
    let count = values.len() - lag;
    let sum: f64 = (0..count)
        .map(|i| (values[i] - mean) * (values[i + lag] - mean))
        .sum();
    sum / count as f64
}

/// Brute-force scan of candidate periods in `[2, min(max_period, len/2)]`,
/// picking the lag with the largest absolute autocovariance. Ties keep the
/// smallest period. Returns `None` for short input (`len < 2 * max_period`)
/// or when the best signal falls under [`MIN_CORRELATION`].
pub fn detect_seasonality(
    series: &[TimeSeriesPoint],
    max_period: usize,
) -> Option<SeasonalPattern> {
    let len = series.len();
    if max_period < 2 || len < 2 * max_period {
        return None;
    }

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let mean = values.iter().sum::<f64>() / len as f64;

    let mut best_period = 0usize;
    let mut best_cov = 0.0f64;
    for period in 2..=max_period.min(len / 2) {
        let cov = autocovariance(&values, mean, period);
        if cov.is_finite() && cov.abs() > best_cov.abs() {
            best_cov = cov;
            best_period = period;
        }
    }

    if best_period == 0 || best_cov.abs() < MIN_CORRELATION {
        return None;
    }

    Some(SeasonalPattern {
        period_hours: best_period as u32,
        amplitude: best_cov.abs().sqrt(),
        phase: 0.0,
    })
}
