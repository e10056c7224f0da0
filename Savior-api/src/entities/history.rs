use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use savior_domain::entities::{VitalSign, VitalsSnapshot};

/// Query parameters for simulated history
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct HistoryQuery {
    /// 24h, 7d or 30d (default: 24h)
    pub range: Option<String>,
    /// blood_pressure, stress, heart_rate or temperature (default: heart_rate)
    pub vital: Option<String>,
    /// Generator seed, for reproducible series (default: 0)
    pub seed: Option<u64>,
}

/// One chart point
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    /// Systolic for blood pressure, otherwise the vital's value
    pub value: f64,
    /// Diastolic for blood pressure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
}

impl HistoryPoint {
    pub fn from_snapshot(snapshot: &VitalsSnapshot, vital: VitalSign) -> Self {
        let bp = &snapshot.blood_pressure;
        match vital {
            VitalSign::BloodPressure => Self {
                timestamp: bp.timestamp,
                value: f64::from(bp.systolic),
                secondary: Some(f64::from(bp.diastolic)),
            },
            VitalSign::Stress => Self {
                timestamp: snapshot.stress.timestamp,
                value: snapshot.stress.value,
                secondary: None,
            },
            VitalSign::HeartRate => {
                let reading = snapshot.effective_heart_rate();
                Self {
                    timestamp: reading.timestamp,
                    value: f64::from(reading.bpm),
                    secondary: None,
                }
            }
            VitalSign::Temperature => match &snapshot.temperature {
                Some(t) => Self { timestamp: t.timestamp, value: t.celsius, secondary: None },
                None => Self { timestamp: bp.timestamp, value: f64::NAN, secondary: None },
            },
        }
    }
}

/// Simulated series for one vital sign
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub vital: String,
    /// Unit suffix for displayed values
    pub unit: String,
    pub range: String,
    /// Oldest first, one point per hour
    pub points: Vec<HistoryPoint>,
}
