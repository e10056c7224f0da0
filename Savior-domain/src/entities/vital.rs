use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::VitalsServiceError;

/// Vital signs monitored by the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VitalSign {
    BloodPressure,
    Stress,
    HeartRate,
    Temperature,
}

impl VitalSign {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalSign::BloodPressure => "blood_pressure",
            VitalSign::Stress => "stress",
            VitalSign::HeartRate => "heart_rate",
            VitalSign::Temperature => "temperature",
        }
    }

    /// Unit suffix appended to displayed values
    pub fn unit(self) -> &'static str {
        match self {
            VitalSign::BloodPressure => " mmHg",
            VitalSign::Stress => "%",
            VitalSign::HeartRate => " bpm",
            VitalSign::Temperature => "°C",
        }
    }
}

impl fmt::Display for VitalSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalSign {
    type Err = VitalsServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blood_pressure" | "bp" => Ok(VitalSign::BloodPressure),
            "stress" => Ok(VitalSign::Stress),
            "heart_rate" | "heartrate" => Ok(VitalSign::HeartRate),
            "temperature" => Ok(VitalSign::Temperature),
            _ => Err(VitalsServiceError::UnknownVital(s.to_string())),
        }
    }
}

/// History window offered by the charts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl TimeRange {
    /// Number of hourly samples covering the window
    pub fn hours(self) -> u32 {
        match self {
            TimeRange::Day => 24,
            TimeRange::Week => 168,
            TimeRange::Month => 720,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
        }
    }
}

impl FromStr for TimeRange {
    type Err = VitalsServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimeRange::Day),
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            other => Err(VitalsServiceError::UnknownTimeRange(other.to_string())),
        }
    }
}
