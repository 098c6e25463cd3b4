use crate::model::{WeatherCondition, WeatherReading};
use chrono::{Duration, Timelike, Utc};
use rand::Rng;
use std::f64::consts::PI;

/// Synthetic weather generator. Base levels drift slowly between readings
/// while a sinusoidal daily cycle and per-reading noise ride on top, so the
/// output carries the trends and seasonality the analyzer looks for.
pub struct MockGenerator {
    location: String,
    temp_base: f64,
    humidity_base: f64,
    pressure_base: f64,
}

impl MockGenerator {
    pub fn new(location: String) -> Self {
        let mut rng = rand::rng();
        Self {
            location,
            // jittered around typical mid-latitude conditions
            temp_base: 22.0 + rng.random_range(-10.0..15.0),
            humidity_base: 60.0 + rng.random_range(-20.0..20.0),
            pressure_base: 1013.25 + rng.random_range(-30.0..30.0),
        }
    }

    /// Generates `hours` hourly readings ending at the current hour, oldest
    /// first.
    pub fn generate_history(&mut self, hours: u32) -> Vec<WeatherReading> {
        let now = Utc::now();
        (0..hours)
            .map(|i| {
                let timestamp = now - Duration::hours((hours - i - 1) as i64);
                self.generate_at(timestamp)
            })
            .collect()
    }

    /// Generates the reading for the current hour.
    pub fn generate_next(&mut self) -> WeatherReading {
        self.generate_at(Utc::now())
    }

    fn generate_at(&mut self, timestamp: chrono::DateTime<Utc>) -> WeatherReading {
        let mut rng = rand::rng();
        let hour_of_day = timestamp.hour() as f64;

        // daily temperature cycle peaking mid-afternoon
        let temp_cycle = 8.0 * ((hour_of_day - 6.0) * PI / 12.0).sin();
        let temperature = self.temp_base + temp_cycle + rng.random_range(-3.0..3.0);

        // humidity runs inversely to temperature
        let humidity = (self.humidity_base - (temperature - self.temp_base) * 2.0
            + rng.random_range(-10.0..10.0))
            .clamp(20.0, 100.0);

        let pressure = self.pressure_base + rng.random_range(-5.0..5.0);
        let wind_speed = (5.0_f64 + rng.random_range(-3.0..15.0)).max(0.0);
        let wind_direction = rng.random_range(0.0..360.0);

        let condition = determine_condition(temperature, humidity, pressure);
        let precipitation = precipitation_for(condition, &mut rng);
        let uv_index = uv_index_for(timestamp.hour(), condition, &mut rng);
        let visibility = visibility_for(condition, precipitation, &mut rng);

        // bases drift a little every hour
        self.temp_base += rng.random_range(-0.5..0.5);
        self.humidity_base += rng.random_range(-1.0..1.0);
        self.pressure_base += rng.random_range(-0.5..0.5);

        WeatherReading {
            timestamp,
            temperature,
            humidity,
            pressure,
            wind_speed,
            wind_direction,
            precipitation,
            condition,
            uv_index,
            visibility,
            location: self.location.clone(),
        }
    }
}

fn determine_condition(temperature: f64, humidity: f64, pressure: f64) -> WeatherCondition {
    if pressure < 990.0 && humidity > 80.0 {
        WeatherCondition::Stormy
    } else if humidity > 75.0 && pressure < 1005.0 {
        WeatherCondition::Rainy
    } else if temperature < 0.0 && humidity > 70.0 {
        WeatherCondition::Snowy
    } else if humidity > 60.0 || pressure < 1010.0 {
        WeatherCondition::Cloudy
    } else {
        WeatherCondition::Sunny
    }
}

fn precipitation_for(condition: WeatherCondition, rng: &mut impl Rng) -> f64 {
    match condition {
        WeatherCondition::Stormy => rng.random_range(5.0..25.0),
        WeatherCondition::Rainy => rng.random_range(1.0..15.0),
        WeatherCondition::Snowy => rng.random_range(2.0..20.0),
        _ => 0.0,
    }
}

fn uv_index_for(hour: u32, condition: WeatherCondition, rng: &mut impl Rng) -> f64 {
    if !(6..=18).contains(&hour) {
        return 0.0;
    }
    let base_uv = 8.0 * ((hour as f64 - 6.0) * PI / 12.0).sin();
    match condition {
        WeatherCondition::Sunny => (base_uv + rng.random_range(-1.0..2.0)).max(0.0),
        WeatherCondition::Cloudy => (base_uv * 0.7 + rng.random_range(-1.0..1.0)).max(0.0),
        _ => (base_uv * 0.3 + rng.random_range(-0.5..0.5)).max(0.0),
    }
}

fn visibility_for(condition: WeatherCondition, precipitation: f64, rng: &mut impl Rng) -> f64 {
    match condition {
        WeatherCondition::Stormy => rng.random_range(1.0..5.0),
        WeatherCondition::Rainy => (10.0 - precipitation * 0.5).max(2.0),
        WeatherCondition::Snowy => rng.random_range(1.0..8.0),
        WeatherCondition::Cloudy => rng.random_range(8.0..15.0),
        WeatherCondition::Sunny => rng.random_range(15.0..50.0),
    }
}
