use crate::analyzer::Metric;
use crate::model::{WeatherCondition, WeatherReading};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};

/// Bounded FIFO over the most recent readings. Appending past capacity
/// silently evicts the oldest entry; readings are kept in arrival order
/// (oldest at the front).
pub struct ReadingBuffer {
    readings: VecDeque<WeatherReading>,
    capacity: usize,
}

/// Average/min/max summary for one metric across the buffer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSummary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// Snapshot statistics over the buffered readings, consumed read-only by
/// the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct BufferStats {
    pub total_readings: usize,
    pub temperature: FieldSummary,
    pub humidity: FieldSummary,
    pub pressure: FieldSummary,
    pub wind_speed: FieldSummary,
    pub oldest: DateTime<Utc>,
    pub newest: DateTime<Utc>,
    pub most_common_condition: WeatherCondition,
}

fn summarize(readings: &VecDeque<WeatherReading>, metric: Metric) -> FieldSummary {
    let mut sum = 0.0;
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for r in readings {
        let v = metric.value(r);
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }
    FieldSummary {
        avg: sum / readings.len() as f64,
        min,
        max,
    }
}

impl ReadingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Appends a reading, evicting the oldest one once the buffer is full.
    pub fn push(&mut self, reading: WeatherReading) {
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    pub fn pop_oldest(&mut self) -> Option<WeatherReading> {
        self.readings.pop_front()
    }

    /// Clones out the buffered readings, oldest first.
    pub fn snapshot(&self) -> Vec<WeatherReading> {
        self.readings.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Per-metric summary of the buffered readings; `None` when empty.
    pub fn stats(&self) -> Option<BufferStats> {
        let oldest = self.readings.front()?;
        let newest = self.readings.back()?;

        let mut condition_counts: HashMap<WeatherCondition, usize> = HashMap::new();
        for r in &self.readings {
            *condition_counts.entry(r.condition).or_insert(0) += 1;
        }
        let most_common_condition = condition_counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(condition, _)| condition)?;

        Some(BufferStats {
            total_readings: self.readings.len(),
            temperature: summarize(&self.readings, Metric::Temperature),
            humidity: summarize(&self.readings, Metric::Humidity),
            pressure: summarize(&self.readings, Metric::Pressure),
            wind_speed: summarize(&self.readings, Metric::WindSpeed),
            oldest: oldest.timestamp,
            newest: newest.timestamp,
            most_common_condition,
        })
    }
}
