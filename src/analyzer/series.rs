use crate::model::WeatherReading;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One sample of an extracted metric series. Sequences are ordered by
/// ascending timestamp; ordering is the caller's responsibility, nothing
/// here sorts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Statically-checked selector for the numeric fields the analyzer
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
    WindSpeed,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pressure,
        Metric::WindSpeed,
    ];

    pub fn value(&self, reading: &WeatherReading) -> f64 {
        match self {
            Metric::Temperature => reading.temperature,
            Metric::Humidity => reading.humidity,
            Metric::Pressure => reading.pressure,
            Metric::WindSpeed => reading.wind_speed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Pressure => "pressure",
            Metric::WindSpeed => "wind_speed",
        }
    }
}

/// Fractional hours elapsed from `start` to `end`. Sub-hour precision via
/// milliseconds.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}

/// Projects one metric out of raw readings into a time series, preserving
/// order. Readings whose selected field is not a finite number are silently
/// dropped; an empty result is legal and every downstream function accepts
/// it.
pub fn extract_time_series(readings: &[WeatherReading], metric: Metric) -> Vec<TimeSeriesPoint> {
    readings
        .iter()
        .filter_map(|r| {
            let value = metric.value(r);
            value.is_finite().then_some(TimeSeriesPoint {
                timestamp: r.timestamp,
                value,
            })
        })
        .collect()
}

/// Trailing moving average. Emits `max(0, len - window_size + 1)` points,
/// each stamped with the timestamp of the last sample in its window.
pub fn moving_average(series: &[TimeSeriesPoint], window_size: usize) -> Vec<TimeSeriesPoint> {
    if window_size == 0 || series.len() < window_size {
        return Vec::new();
    }
    series
        .windows(window_size)
        .map(|window| TimeSeriesPoint {
            timestamp: window[window_size - 1].timestamp,
            value: window.iter().map(|p| p.value).sum::<f64>() / window_size as f64,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::WeatherCondition;
    use chrono::TimeZone;

    fn reading(hour: u32, temperature: f64) -> WeatherReading {
        WeatherReading {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
            temperature,
            humidity: 55.0,
            pressure: 1013.0,
            wind_speed: 8.0,
            wind_direction: 180.0,
            precipitation: 0.0,
            condition: WeatherCondition::Sunny,
            uv_index: 3.0,
            visibility: 20.0,
            location: "test".into(),
        }
    }

    pub(crate) fn points(values: &[f64]) -> Vec<TimeSeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| TimeSeriesPoint {
                timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::hours(i as i64),
                value,
            })
            .collect()
    }

    #[test]
    fn extract_keeps_order_and_drops_non_finite() {
        let readings = vec![
            reading(0, 10.0),
            reading(1, f64::NAN),
            reading(2, 12.0),
            reading(3, f64::INFINITY),
            reading(4, 11.0),
        ];
        let series = extract_time_series(&readings, Metric::Temperature);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].value, 10.0);
        assert_eq!(series[1].value, 12.0);
        assert_eq!(series[2].value, 11.0);
        assert!(series[0].timestamp < series[1].timestamp);
    }

    #[test]
    fn extract_selects_the_requested_field() {
        let readings = vec![reading(0, 10.0)];
        let humidity = extract_time_series(&readings, Metric::Humidity);
        assert_eq!(humidity[0].value, 55.0);
    }

    #[test]
    fn moving_average_window_shrink() {
        let series = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for w in 1..=7 {
            let smoothed = moving_average(&series, w);
            assert_eq!(
                smoothed.len(),
                if w > series.len() { 0 } else { series.len() - w + 1 }
            );
        }
    }

    #[test]
    fn moving_average_values_and_timestamps() {
        let series = points(&[1.0, 2.0, 3.0, 4.0]);
        let smoothed = moving_average(&series, 2);
        assert_eq!(smoothed.len(), 3);
        assert_eq!(smoothed[0].value, 1.5);
        assert_eq!(smoothed[1].value, 2.5);
        assert_eq!(smoothed[2].value, 3.5);
        // each point carries the timestamp of the window's last sample
        assert_eq!(smoothed[0].timestamp, series[1].timestamp);
        assert_eq!(smoothed[2].timestamp, series[3].timestamp);
    }

    #[test]
    fn moving_average_oversized_window_is_empty() {
        let series = points(&[1.0, 2.0]);
        assert!(moving_average(&series, 3).is_empty());
        assert!(moving_average(&[], 1).is_empty());
    }

    #[test]
    fn hours_between_sub_hour_precision() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = start + chrono::Duration::minutes(90);
        assert!((hours_between(start, end) - 1.5).abs() < 1e-9);
    }
}
