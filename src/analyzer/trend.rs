use crate::analyzer::series::{TimeSeriesPoint, hours_between};
use serde::Serialize;

/// Slope threshold (value-units per hour) below which a trend counts as
/// stable. A fixed design constant, not derived from the data's scale;
/// callers with wildly different units must rescale first.
pub const STABLE_SLOPE_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Result of an ordinary least-squares fit over one metric series.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendAnalysis {
    /// Value-units per hour.
    pub slope: f64,
    pub direction: TrendDirection,
    /// R² of the fitted line, clamped to [0, 1].
    pub strength: f64,
    /// Fitted value one hour past the last sample.
    pub prediction: f64,
}

impl TrendAnalysis {
    fn flat() -> Self {
        TrendAnalysis {
            slope: 0.0,
            direction: TrendDirection::Stable,
            strength: 0.0,
            prediction: 0.0,
        }
    }
}

fn classify(slope: f64) -> TrendDirection {
    if slope > STABLE_SLOPE_THRESHOLD {
        TrendDirection::Increasing
    } else if slope < -STABLE_SLOPE_THRESHOLD {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

/// Ordinary least-squares regression of value against elapsed hours since
/// the first sample. Total over its input: degenerate or non-finite cases
/// fall back to a flat trend instead of failing.
pub fn linear_regression(series: &[TimeSeriesPoint]) -> TrendAnalysis {
    if series.len() < 2 {
        return TrendAnalysis::flat();
    }

    let n = series.len() as f64;
    let t0 = series[0].timestamp;
    let xs: Vec<f64> = series.iter().map(|p| hours_between(t0, p.timestamp)).collect();

    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = series.iter().map(|p| p.value).sum();
    let sum_xy: f64 = xs.iter().zip(series).map(|(x, p)| x * p.value).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();

    let y_mean = sum_y / n;
    let denominator = n * sum_x2 - sum_x * sum_x;

    let (mut slope, mut intercept) = if denominator.abs() < f64::EPSILON {
        // all x effectively equal (e.g. repeated timestamps)
        (0.0, y_mean)
    } else {
        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        (slope, (sum_y - slope * sum_x) / n)
    };
    if !slope.is_finite() || !intercept.is_finite() {
        slope = 0.0;
        intercept = y_mean;
    }

    let ss_tot: f64 = series.iter().map(|p| (p.value - y_mean).powi(2)).sum();
    let ss_res: f64 = xs
        .iter()
        .zip(series)
        .map(|(x, p)| (p.value - (slope * x + intercept)).powi(2))
        .sum();
    let strength = if ss_tot <= f64::EPSILON {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };
    let strength = if strength.is_finite() {
        strength.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let last = series[series.len() - 1];
    let mut prediction = slope * (xs[xs.len() - 1] + 1.0) + intercept;
    if !prediction.is_finite() {
        prediction = last.value;
    }

    TrendAnalysis {
        slope,
        direction: classify(slope),
        strength,
        prediction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::series::tests::points;
    use chrono::{TimeZone, Utc};

    const TOL: f64 = 1e-9;

    #[test]
    fn short_series_is_flat() {
        for series in [Vec::new(), points(&[42.0])] {
            let trend = linear_regression(&series);
            assert_eq!(trend.slope, 0.0);
            assert_eq!(trend.direction, TrendDirection::Stable);
            assert_eq!(trend.strength, 0.0);
            assert_eq!(trend.prediction, 0.0);
        }
    }

    #[test]
    fn perfect_linear_fit() {
        let series = points(&[0.0, 1.0, 2.0, 3.0]);
        let trend = linear_regression(&series);
        assert!((trend.slope - 1.0).abs() < TOL);
        assert!((trend.strength - 1.0).abs() < TOL);
        assert_eq!(trend.direction, TrendDirection::Increasing);
        assert!((trend.prediction - 4.0).abs() < TOL);
    }

    #[test]
    fn constant_series_is_stable() {
        let series = points(&[7.5; 10]);
        let trend = linear_regression(&series);
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.strength, 0.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
        assert!((trend.prediction - 7.5).abs() < TOL);
    }

    #[test]
    fn decreasing_series() {
        let series = points(&[10.0, 8.0, 6.0, 4.0]);
        let trend = linear_regression(&series);
        assert!((trend.slope + 2.0).abs() < TOL);
        assert_eq!(trend.direction, TrendDirection::Decreasing);
        assert!((trend.prediction - 2.0).abs() < TOL);
    }

    #[test]
    fn gentle_slope_is_stable() {
        // slope of 0.05/h sits inside the stability band
        let series = points(&[0.0, 0.05, 0.10, 0.15]);
        let trend = linear_regression(&series);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn repeated_timestamps_degenerate_to_mean() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let series: Vec<_> = [3.0, 5.0, 7.0]
            .iter()
            .map(|&value| TimeSeriesPoint { timestamp: t, value })
            .collect();
        let trend = linear_regression(&series);
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.direction, TrendDirection::Stable);
        assert!((trend.prediction - 5.0).abs() < TOL);
        assert!(trend.strength.is_finite());
    }

    #[test]
    fn deterministic() {
        let series = points(&[1.0, 4.0, 2.0, 8.0, 5.0, 7.0]);
        let a = linear_regression(&series);
        let b = linear_regression(&series);
        assert_eq!(a.slope.to_bits(), b.slope.to_bits());
        assert_eq!(a.strength.to_bits(), b.strength.to_bits());
        assert_eq!(a.prediction.to_bits(), b.prediction.to_bits());
        assert_eq!(a.direction, b.direction);
    }

    #[test]
    fn outputs_always_finite() {
        let series = points(&[1e300, -1e300, 1e300, -1e300]);
        let trend = linear_regression(&series);
        assert!(trend.slope.is_finite());
        assert!(trend.strength.is_finite());
        assert!(trend.prediction.is_finite());
    }
}
