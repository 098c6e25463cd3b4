// Human-readable summaries of analysis output, for the log surface and
// dashboard badges.

use crate::analyzer::series::TimeSeriesPoint;
use crate::analyzer::trend::{TrendAnalysis, TrendDirection};
use crate::analyzer::{Metric, SeasonalPattern};

pub fn describe_trend(metric: Metric, trend: &TrendAnalysis) -> String {
    let arrow = match trend.direction {
        TrendDirection::Increasing => "↑",
        TrendDirection::Decreasing => "↓",
        TrendDirection::Stable => "→",
    };
    format!(
        "{} {} {} ({:+.3}/h, r²={:.2}, next≈{:.1})",
        metric.label(),
        arrow,
        trend.direction.label(),
        trend.slope,
        trend.strength,
        trend.prediction,
    )
}

pub fn describe_seasonality(metric: Metric, pattern: Option<&SeasonalPattern>) -> String {
    match pattern {
        Some(p) => format!(
            "{}: {}-hour cycle, amplitude {:.2}",
            metric.label(),
            p.period_hours,
            p.amplitude,
        ),
        None => format!("{}: no significant seasonal pattern", metric.label()),
    }
}

pub fn describe_forecast(metric: Metric, projection: &[TimeSeriesPoint]) -> String {
    match (projection.first(), projection.last()) {
        (Some(first), Some(last)) => format!(
            "{}: {} points, {:.1} → {:.1}",
            metric.label(),
            projection.len(),
            first.value,
            last.value,
        ),
        _ => format!("{}: insufficient history for a forecast", metric.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::series::tests::points;
    use crate::analyzer::{forecast, linear_regression};

    #[test]
    fn trend_line_mentions_direction_and_prediction() {
        let trend = linear_regression(&points(&[0.0, 1.0, 2.0, 3.0]));
        let line = describe_trend(Metric::Temperature, &trend);
        assert!(line.contains("temperature"));
        assert!(line.contains("increasing"));
        assert!(line.contains("4.0"));
    }

    #[test]
    fn seasonality_line_handles_absence() {
        let line = describe_seasonality(Metric::Pressure, None);
        assert!(line.contains("no significant seasonal pattern"));
    }

    #[test]
    fn forecast_line_reports_point_count() {
        let projection = forecast(&points(&[1.0, 2.0, 3.0, 4.0, 5.0]), 6);
        let line = describe_forecast(Metric::Humidity, &projection);
        assert!(line.contains("6 points"));
    }

    #[test]
    fn empty_forecast_is_called_out() {
        let line = describe_forecast(Metric::WindSpeed, &[]);
        assert!(line.contains("insufficient history"));
    }
}
