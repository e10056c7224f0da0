use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use savior_domain::entities::{
    BloodPressureReading, Category, HeartRateReading, HeartRateZone, StressReading,
    TemperatureReading, VitalsAssessment, VitalsSnapshot, ZoneReading,
};

use crate::entities::alerts::AlertResponse;

/// Blood pressure measurement as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BloodPressureInput {
    /// Systolic pressure in mmHg
    pub systolic: i32,
    /// Diastolic pressure in mmHg
    pub diastolic: i32,
    /// Pulse taken by the cuff, in bpm
    pub heart_rate: i32,
    /// When the reading was taken. Defaults to the current time.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Stress estimate as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StressInput {
    /// Device label: "stress", "baseline" or "amusement"
    pub level: Option<String>,
    /// Stress score, 0-100
    #[serde(default)]
    pub value: f64,
    /// Heart-rate variability in ms
    #[serde(default)]
    pub hrv: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TemperatureInput {
    /// Body temperature in °C
    pub celsius: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeartRateInput {
    /// Pulse in bpm
    pub bpm: i32,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Request payload carrying one reading of every vital sign
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VitalsRequest {
    pub blood_pressure: BloodPressureInput,
    pub stress: StressInput,
    #[serde(default)]
    pub temperature: Option<TemperatureInput>,
    /// Standalone pulse reading; the cuff pulse is used when absent
    #[serde(default)]
    pub heart_rate: Option<HeartRateInput>,
    /// User age for heart-rate zones. Defaults to the configured age.
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,
}

impl VitalsRequest {
    /// Convert to a domain snapshot, stamping missing timestamps with `now`
    pub fn into_snapshot(self, now: DateTime<Utc>) -> VitalsSnapshot {
        VitalsSnapshot {
            blood_pressure: BloodPressureReading {
                systolic: self.blood_pressure.systolic,
                diastolic: self.blood_pressure.diastolic,
                heart_rate: self.blood_pressure.heart_rate,
                timestamp: self.blood_pressure.timestamp.unwrap_or(now),
            },
            stress: StressReading {
                level: self.stress.level,
                value: self.stress.value,
                hrv: self.stress.hrv,
                timestamp: self.stress.timestamp.unwrap_or(now),
            },
            temperature: self.temperature.map(|t| TemperatureReading {
                celsius: t.celsius,
                timestamp: t.timestamp.unwrap_or(now),
            }),
            heart_rate: self.heart_rate.map(|h| HeartRateReading {
                bpm: h.bpm,
                timestamp: h.timestamp.unwrap_or(now),
            }),
        }
    }
}

/// Public view of a classification category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    /// Stable identifier, e.g. "stage2"
    pub id: String,
    pub label: String,
    pub description: String,
    /// One of critical, high, elevated, normal, low, relaxed
    pub severity: String,
    /// Advice shown for abnormal categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub icon: String,
    pub style: String,
    /// Display range of the category
    #[schema(value_type = Object)]
    pub range: serde_json::Value,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            label: category.label.to_string(),
            description: category.description.to_string(),
            severity: category.severity.as_str().to_string(),
            recommendation: category.recommendation.map(str::to_string),
            icon: category.icon.to_string(),
            style: category.style.to_string(),
            range: serde_json::to_value(category.range).unwrap_or_default(),
        }
    }
}

/// Heart-rate training zone for a pulse and age
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ZoneResponse {
    /// Zone number, 1-4
    pub zone: u8,
    pub name: String,
    pub description: String,
    /// Nominal band of maximum heart rate, e.g. "60-70%"
    pub percentage_band: String,
    pub benefits: String,
    /// 220 minus age
    pub max_heart_rate: i32,
    /// Pulse as a share of maximum heart rate
    pub percentage: f64,
}

impl From<&ZoneReading> for ZoneResponse {
    fn from(reading: &ZoneReading) -> Self {
        let zone = match reading.zone {
            HeartRateZone::Zone1 => 1,
            HeartRateZone::Zone2 => 2,
            HeartRateZone::Zone3 => 3,
            HeartRateZone::Zone4 => 4,
        };

        Self {
            zone,
            name: reading.info.name.to_string(),
            description: reading.info.description.to_string(),
            percentage_band: reading.info.percentage.to_string(),
            benefits: reading.info.benefits.to_string(),
            max_heart_rate: reading.max_heart_rate,
            percentage: reading.percentage,
        }
    }
}

/// Every classification for a snapshot, plus its alerts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResponse {
    pub blood_pressure: CategoryResponse,
    pub heart_rate: CategoryResponse,
    /// Pulse the heart-rate category and zone were computed from
    pub heart_rate_bpm: i32,
    pub zone: ZoneResponse,
    pub stress: CategoryResponse,
    /// Stress score shown on the gauge
    pub stress_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<CategoryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_fahrenheit: Option<f64>,
    pub alerts: Vec<AlertResponse>,
    pub generated_at: DateTime<Utc>,
}

impl From<VitalsAssessment> for AssessmentResponse {
    fn from(assessment: VitalsAssessment) -> Self {
        Self {
            blood_pressure: assessment.blood_pressure.into(),
            heart_rate: assessment.heart_rate.into(),
            heart_rate_bpm: assessment.heart_rate_bpm,
            zone: (&assessment.zone).into(),
            stress: assessment.stress.into(),
            stress_percentage: assessment.stress_percentage,
            temperature: assessment.temperature.map(CategoryResponse::from),
            temperature_fahrenheit: assessment.temperature_fahrenheit,
            alerts: assessment.alerts.iter().map(AlertResponse::from).collect(),
            generated_at: assessment.generated_at,
        }
    }
}

/// Query parameters for blood pressure classification
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BloodPressureQuery {
    pub systolic: i32,
    pub diastolic: i32,
}

/// Query parameters for heart-rate classification
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct HeartRateQuery {
    pub bpm: i32,
}

/// Query parameters for stress classification; the label wins over the value
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct StressQuery {
    pub label: Option<String>,
    pub value: Option<f64>,
}

/// Query parameters for temperature classification
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TemperatureQuery {
    pub celsius: f64,
}

/// Query parameters for zone calculation
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct ZoneQuery {
    /// Defaults to the configured age
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,
    pub bpm: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use savior_domain::services::{classify_blood_pressure, heart_rate_zone};

    fn request() -> VitalsRequest {
        VitalsRequest {
            blood_pressure: BloodPressureInput { systolic: 120, diastolic: 80, heart_rate: 72, timestamp: None },
            stress: StressInput { level: None, value: 40.0, hrv: 50.0, timestamp: None },
            temperature: None,
            heart_rate: None,
            age: Some(30),
        }
    }

    #[test]
    fn test_missing_timestamps_use_now() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let snapshot = request().into_snapshot(now);
        assert_eq!(snapshot.blood_pressure.timestamp, now);
        assert_eq!(snapshot.stress.timestamp, now);
        assert!(snapshot.temperature.is_none());
    }

    #[test]
    fn test_age_out_of_range_fails_validation() {
        let mut req = request();
        req.age = Some(0);
        assert!(req.validate().is_err());
        req.age = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_category_response_carries_range() {
        let response = CategoryResponse::from(classify_blood_pressure(165, 70));
        assert_eq!(response.id, "stage2");
        assert_eq!(response.severity, "critical");
        assert_eq!(response.range["kind"], "blood_pressure");
        assert!(response.recommendation.is_some());
    }

    #[test]
    fn test_zone_response_numbers_zone() {
        let response = ZoneResponse::from(&heart_rate_zone(30, 114));
        assert_eq!(response.zone, 2);
        assert_eq!(response.max_heart_rate, 190);
        assert_eq!(response.percentage_band, "60-70%");
    }
}
