pub mod alerts;
pub mod blood_pressure;
pub mod heart_rate;
pub mod stress;
pub mod temperature;
pub mod thresholds;

// Domain services
// Pure classification and alerting rules, plus a service wrapper that
// validates readings and assembles a full assessment.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

use crate::entities::alert::Alert;
use crate::entities::assessment::VitalsAssessment;
use crate::entities::category::Category;
use crate::entities::readings::VitalsSnapshot;
use crate::entities::zone::ZoneReading;

pub use alerts::{generate_alerts, generate_alerts_at, Clock, SystemClock};
pub use blood_pressure::classify_blood_pressure;
pub use heart_rate::{classify_heart_rate, heart_rate_zone};
pub use stress::{classify_stress_by_label, classify_stress_by_value, StressLevel};
pub use temperature::{celsius_to_fahrenheit, classify_temperature};

/// Age used for zone calculation when the caller does not know the user's age
pub const DEFAULT_AGE: i32 = 30;

/// Vitals service errors
#[derive(Debug, Error, PartialEq)]
pub enum VitalsServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unrecognised history window label
    #[error("Unknown time range: {0}")]
    UnknownTimeRange(String),

    /// Unrecognised vital sign name
    #[error("Unknown vital sign: {0}")]
    UnknownVital(String),
}

/// Trait for vitals service operations
pub trait VitalsServiceTrait: Send + Sync {
    /// Reject readings that cannot be classified meaningfully
    fn validate_snapshot(&self, snapshot: &VitalsSnapshot) -> Result<(), VitalsServiceError>;

    fn classify_blood_pressure(&self, systolic: i32, diastolic: i32) -> &'static Category;

    fn classify_heart_rate(&self, bpm: i32) -> &'static Category;

    fn heart_rate_zone(&self, age: i32, bpm: i32) -> ZoneReading;

    fn classify_stress_by_label(&self, label: Option<&str>) -> &'static Category;

    fn classify_stress_by_value(&self, value: f64) -> &'static Category;

    fn classify_temperature(&self, celsius: f64) -> &'static Category;

    /// Validate the snapshot, then generate its alerts
    fn generate_alerts(&self, snapshot: &VitalsSnapshot) -> Result<Vec<Alert>, VitalsServiceError>;

    /// Classify every vital sign in the snapshot and generate its alerts
    fn assess(
        &self,
        snapshot: &VitalsSnapshot,
        age: Option<i32>,
    ) -> Result<VitalsAssessment, VitalsServiceError>;
}

/// Vitals service for domain logic
pub struct VitalsService {
    clock: Arc<dyn Clock>,
}

impl Default for VitalsService {
    fn default() -> Self {
        Self::new()
    }
}

impl VitalsService {
    /// Create a service stamping alerts with wall-clock time
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl VitalsServiceTrait for VitalsService {
    fn validate_snapshot(&self, snapshot: &VitalsSnapshot) -> Result<(), VitalsServiceError> {
        // Use the validator crate's validation
        if let Err(validation_errors) = snapshot.validate() {
            let error_message = validation_errors
                .errors()
                .iter()
                .map(|(field, kind)| format!("{}: {}", field, describe(kind)))
                .collect::<Vec<String>>()
                .join("; ");

            warn!("Rejected vitals snapshot: {}", error_message);
            return Err(VitalsServiceError::Validation(error_message));
        }

        let non_finite = snapshot.non_finite_fields();
        if !non_finite.is_empty() {
            warn!(fields = ?non_finite, "Rejected vitals snapshot with non-finite values");
            return Err(VitalsServiceError::Validation(format!(
                "Values must be finite numbers: {}",
                non_finite.join(", ")
            )));
        }

        Ok(())
    }

    fn classify_blood_pressure(&self, systolic: i32, diastolic: i32) -> &'static Category {
        blood_pressure::classify_blood_pressure(systolic, diastolic)
    }

    fn classify_heart_rate(&self, bpm: i32) -> &'static Category {
        heart_rate::classify_heart_rate(bpm)
    }

    fn heart_rate_zone(&self, age: i32, bpm: i32) -> ZoneReading {
        heart_rate::heart_rate_zone(age, bpm)
    }

    fn classify_stress_by_label(&self, label: Option<&str>) -> &'static Category {
        stress::classify_stress_by_label(label)
    }

    fn classify_stress_by_value(&self, value: f64) -> &'static Category {
        stress::classify_stress_by_value(value)
    }

    fn classify_temperature(&self, celsius: f64) -> &'static Category {
        temperature::classify_temperature(celsius)
    }

    fn generate_alerts(&self, snapshot: &VitalsSnapshot) -> Result<Vec<Alert>, VitalsServiceError> {
        self.validate_snapshot(snapshot)?;
        Ok(alerts::generate_alerts_with(snapshot, self.clock.as_ref()))
    }

    fn assess(
        &self,
        snapshot: &VitalsSnapshot,
        age: Option<i32>,
    ) -> Result<VitalsAssessment, VitalsServiceError> {
        self.validate_snapshot(snapshot)?;

        let now = self.clock.now();
        let bp = &snapshot.blood_pressure;
        let heart_rate = snapshot.effective_heart_rate();

        // A non-blank label wins; otherwise fall back to the score.
        let label = snapshot.stress.level.as_deref().filter(|l| !l.trim().is_empty());
        let stress_level = match label {
            Some(label) => StressLevel::from_label(Some(label)),
            None => stress::stress_level_for_value(snapshot.stress.value),
        };
        let stress_percentage = if snapshot.stress.value > 0.0 {
            snapshot.stress.value
        } else {
            stress_level.display_percentage()
        };

        let assessment = VitalsAssessment {
            blood_pressure: blood_pressure::classify_blood_pressure(bp.systolic, bp.diastolic),
            heart_rate: heart_rate::classify_heart_rate(heart_rate.bpm),
            heart_rate_bpm: heart_rate.bpm,
            zone: heart_rate::heart_rate_zone(age.unwrap_or(DEFAULT_AGE), heart_rate.bpm),
            stress: stress_level.category(),
            stress_percentage,
            temperature: snapshot
                .temperature
                .as_ref()
                .map(|t| temperature::classify_temperature(t.celsius)),
            temperature_fahrenheit: snapshot
                .temperature
                .as_ref()
                .map(|t| temperature::celsius_to_fahrenheit(t.celsius)),
            alerts: alerts::generate_alerts_at(snapshot, now),
            generated_at: now,
        };

        debug!(
            blood_pressure = assessment.blood_pressure.id,
            heart_rate = assessment.heart_rate.id,
            stress = assessment.stress.id,
            alerts = assessment.alerts.len(),
            "Assessed vitals snapshot"
        );

        Ok(assessment)
    }
}

/// Flatten nested validation errors into a readable message
fn describe(kind: &validator::ValidationErrorsKind) -> String {
    match kind {
        validator::ValidationErrorsKind::Field(errors) => errors
            .iter()
            .map(|err| match &err.message {
                Some(msg) => msg.to_string(),
                None => format!("invalid ({})", err.code),
            })
            .collect::<Vec<String>>()
            .join(", "),
        validator::ValidationErrorsKind::Struct(inner) => inner
            .errors()
            .iter()
            .map(|(field, kind)| format!("{}: {}", field, describe(kind)))
            .collect::<Vec<String>>()
            .join("; "),
        validator::ValidationErrorsKind::List(items) => items
            .values()
            .flat_map(|inner| inner.errors().values().map(describe))
            .collect::<Vec<String>>()
            .join("; "),
    }
}

/// Create a default vitals service
pub fn create_default_vitals_service() -> impl VitalsServiceTrait {
    VitalsService::new()
}

/// Create a mock vitals service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_vitals_service() -> impl VitalsServiceTrait {
    crate::testing::create_mock_vitals_service()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::readings::{
        BloodPressureReading, HeartRateReading, StressReading, TemperatureReading,
    };
    use crate::entities::zone::HeartRateZone;
    use chrono::{TimeZone, Utc};

    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now(&self) -> chrono::DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        }
    }

    fn service() -> VitalsService {
        VitalsService::with_clock(Arc::new(FrozenClock))
    }

    fn create_test_snapshot(systolic: i32, diastolic: i32, heart_rate: i32) -> VitalsSnapshot {
        let taken = Utc.with_ymd_and_hms(2024, 5, 1, 9, 55, 0).unwrap();
        VitalsSnapshot {
            blood_pressure: BloodPressureReading { systolic, diastolic, heart_rate, timestamp: taken },
            stress: StressReading { level: None, value: 40.0, hrv: 55.0, timestamp: taken },
            temperature: Some(TemperatureReading { celsius: 36.7, timestamp: taken }),
            heart_rate: None,
        }
    }

    #[test]
    fn test_validate_snapshot_valid() {
        assert!(service().validate_snapshot(&create_test_snapshot(120, 80, 72)).is_ok());
    }

    #[test]
    fn test_validate_snapshot_stress_out_of_range() {
        let mut snapshot = create_test_snapshot(120, 80, 72);
        snapshot.stress.value = 120.0;

        let result = service().validate_snapshot(&snapshot);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Stress value must be between 0 and 100"));
    }

    #[test]
    fn test_validate_snapshot_rejects_nan_temperature() {
        let mut snapshot = create_test_snapshot(120, 80, 72);
        snapshot.temperature = Some(TemperatureReading { celsius: f64::NAN, timestamp: Utc::now() });

        let err = service().validate_snapshot(&snapshot).unwrap_err();
        assert_eq!(
            err,
            VitalsServiceError::Validation("Values must be finite numbers: temperature.celsius".to_string())
        );
    }

    #[test]
    fn test_generate_alerts_rejects_invalid_snapshot() {
        let mut snapshot = create_test_snapshot(170, 80, 72);
        snapshot.stress.value = f64::NAN;
        assert!(service().generate_alerts(&snapshot).is_err());
    }

    #[test]
    fn test_assess_classifies_every_vital() {
        let assessment = service().assess(&create_test_snapshot(165, 70, 125), Some(30)).unwrap();

        assert_eq!(assessment.blood_pressure.id, "stage2");
        assert_eq!(assessment.heart_rate.id, "tachycardia");
        assert_eq!(assessment.heart_rate_bpm, 125);
        assert_eq!(assessment.zone.zone, HeartRateZone::Zone2);
        assert_eq!(assessment.stress.id, "baseline");
        assert_eq!(assessment.stress_percentage, 40.0);
        assert_eq!(assessment.temperature.map(|c| c.id), Some("normal"));
        assert_eq!(assessment.alerts.len(), 2);
        assert_eq!(assessment.generated_at, FrozenClock.now());
    }

    #[test]
    fn test_assess_prefers_standalone_heart_rate_and_label() {
        let mut snapshot = create_test_snapshot(118, 76, 70);
        snapshot.heart_rate = Some(HeartRateReading { bpm: 105, timestamp: Utc::now() });
        snapshot.stress.level = Some("amusement".to_string());
        snapshot.stress.value = 0.0;

        let assessment = service().assess(&snapshot, None).unwrap();
        assert_eq!(assessment.heart_rate.id, "elevated");
        assert_eq!(assessment.stress.id, "amusement");
        assert_eq!(assessment.stress_percentage, 20.0);
        // Alerts still read the cuff pulse
        assert!(assessment.alerts.is_empty());
    }

    #[test]
    fn test_assess_blank_stress_label_uses_score() {
        let mut snapshot = create_test_snapshot(118, 76, 70);
        snapshot.stress.value = 85.0;

        for blank in ["", "   "] {
            snapshot.stress.level = Some(blank.to_string());
            let assessment = service().assess(&snapshot, None).unwrap();
            assert_eq!(assessment.stress.id, "stress");
            assert_eq!(assessment.stress_percentage, 85.0);
            assert_eq!(assessment.alerts.len(), 1);
        }
    }

    #[test]
    fn test_default_service_classifies() {
        let service = create_default_vitals_service();
        assert_eq!(service.classify_blood_pressure(165, 70).id, "stage2");
        assert_eq!(service.classify_stress_by_label(Some("AMUSEMENT")).id, "amusement");
    }

    #[test]
    fn test_assess_without_temperature() {
        let mut snapshot = create_test_snapshot(118, 76, 70);
        snapshot.temperature = None;

        let assessment = service().assess(&snapshot, None).unwrap();
        assert!(assessment.temperature.is_none());
        assert!(assessment.temperature_fahrenheit.is_none());
    }
}
