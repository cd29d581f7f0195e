//! Sensor inputs for spoilage scoring.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Temperature assumed when a history carries no temperature samples.
pub const DEFAULT_TEMPERATURE_C: f64 = 15.0;

/// Humidity assumed when a history carries no humidity samples.
pub const DEFAULT_HUMIDITY_PCT: f64 = 60.0;

/// A single snapshot of storage conditions for one produce batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    produce: String,
    temperature: f64,
    humidity: f64,
    storage_days: u32,
}

impl SensorReading {
    /// Creates a validated reading.
    ///
    /// Produce must be non-empty, temperature finite and humidity a
    /// relative-humidity percentage.
    pub fn new(
        produce: impl Into<String>,
        temperature: f64,
        humidity: f64,
        storage_days: u32,
    ) -> Result<Self, ValidationError> {
        let produce = produce.into().trim().to_string();
        if produce.is_empty() {
            return Err(ValidationError::empty_field("produce"));
        }
        if !temperature.is_finite() {
            return Err(ValidationError::not_finite("temperature"));
        }
        if !humidity.is_finite() {
            return Err(ValidationError::not_finite("humidity"));
        }
        if !(0.0..=100.0).contains(&humidity) {
            return Err(ValidationError::out_of_range("humidity", 0.0, 100.0, humidity));
        }

        Ok(Self {
            produce,
            temperature,
            humidity,
            storage_days,
        })
    }

    pub fn produce(&self) -> &str {
        &self.produce
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn storage_days(&self) -> u32 {
        self.storage_days
    }

    /// Returns true if the produce matches `name`, ignoring case.
    pub fn is_produce(&self, name: &str) -> bool {
        self.produce.eq_ignore_ascii_case(name)
    }
}

/// Time series of storage conditions collected for a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorHistory {
    #[serde(default)]
    pub temperature_history: Vec<f64>,
    #[serde(default)]
    pub humidity_history: Vec<f64>,
    #[serde(default)]
    pub produce_type: String,
    #[serde(default)]
    pub storage_duration_days: u32,
}

impl SensorHistory {
    /// Average temperature, or the default when no samples were taken.
    pub fn average_temperature(&self) -> f64 {
        mean(&self.temperature_history).unwrap_or(DEFAULT_TEMPERATURE_C)
    }

    /// Average humidity, or the default when no samples were taken.
    pub fn average_humidity(&self) -> f64 {
        mean(&self.humidity_history).unwrap_or(DEFAULT_HUMIDITY_PCT)
    }

    /// Collapses the history into a single reading of averaged conditions.
    pub fn to_reading(&self) -> Result<SensorReading, ValidationError> {
        SensorReading::new(
            self.produce_type.clone(),
            self.average_temperature(),
            self.average_humidity(),
            self.storage_duration_days,
        )
    }
}

fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}
