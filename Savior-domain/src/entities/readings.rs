use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Blood pressure sample, including the pulse measured by the same cuff
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BloodPressureReading {
    /// Systolic blood pressure in mmHg (the higher number)
    pub systolic: i32,

    /// Diastolic blood pressure in mmHg (the lower number)
    pub diastolic: i32,

    /// Pulse in beats per minute
    pub heart_rate: i32,

    /// When the reading was taken
    pub timestamp: DateTime<Utc>,
}

/// Stress estimate from the wearable's classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct StressReading {
    /// Raw label reported by the device ("stress", "baseline", "amusement"), if any
    pub level: Option<String>,

    /// Stress score on a 0-100 scale
    #[validate(range(min = 0.0, max = 100.0, message = "Stress value must be between 0 and 100"))]
    pub value: f64,

    /// Heart rate variability in milliseconds
    #[validate(range(min = 0.0, message = "HRV cannot be negative"))]
    pub hrv: f64,

    pub timestamp: DateTime<Utc>,
}

/// Body temperature sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f64,
    pub timestamp: DateTime<Utc>,
}

/// Standalone heart rate sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeartRateReading {
    pub bpm: i32,
    pub timestamp: DateTime<Utc>,
}

impl From<&BloodPressureReading> for HeartRateReading {
    fn from(reading: &BloodPressureReading) -> Self {
        Self {
            bpm: reading.heart_rate,
            timestamp: reading.timestamp,
        }
    }
}

/// Latest reading of every vital sign for one sampling cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct VitalsSnapshot {
    pub blood_pressure: BloodPressureReading,

    #[validate]
    pub stress: StressReading,

    #[serde(default)]
    pub temperature: Option<TemperatureReading>,

    #[serde(default)]
    pub heart_rate: Option<HeartRateReading>,
}

impl VitalsSnapshot {
    /// Heart rate to classify: the dedicated sample when present, otherwise the cuff pulse
    pub fn effective_heart_rate(&self) -> HeartRateReading {
        self.heart_rate
            .clone()
            .unwrap_or_else(|| HeartRateReading::from(&self.blood_pressure))
    }

    /// Names of float fields holding NaN or infinite values
    ///
    /// Range validation lets NaN through, so finiteness is checked separately.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if !self.stress.value.is_finite() {
            fields.push("stress.value");
        }
        if !self.stress.hrv.is_finite() {
            fields.push("stress.hrv");
        }
        if let Some(temperature) = &self.temperature {
            if !temperature.celsius.is_finite() {
                fields.push("temperature.celsius");
            }
        }
        fields
    }
}
