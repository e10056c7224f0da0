use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::entities::alert::{Alert, AlertType};
use crate::entities::readings::{
    BloodPressureReading, StressReading, TemperatureReading, VitalsSnapshot,
};
use crate::entities::vital::VitalSign;
use crate::services::stress::StressLevel;
use crate::services::thresholds::{blood_pressure as bp, heart_rate as hr, stress, temperature as temp};

/// Source of the generation timestamp stamped on alerts
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Collects alerts for one pass, numbering them from 1
struct AlertBatch {
    now: DateTime<Utc>,
    alerts: Vec<Alert>,
}

impl AlertBatch {
    fn new(now: DateTime<Utc>) -> Self {
        Self { now, alerts: Vec::new() }
    }

    fn push(&mut self, vital: VitalSign, alert_type: AlertType, title: &str, message: String) {
        let id = self.alerts.len() as u32 + 1;
        if alert_type == AlertType::Critical {
            warn!(alert_id = id, vital = %vital, "Critical alert: {}", title);
        }
        self.alerts.push(Alert {
            id,
            alert_type,
            title: title.to_string(),
            message,
            timestamp: self.now,
            vital,
        });
    }
}

/// Generate alerts for the latest readings, stamped with the current time
pub fn generate_alerts(snapshot: &VitalsSnapshot) -> Vec<Alert> {
    generate_alerts_with(snapshot, &SystemClock)
}

pub fn generate_alerts_with(snapshot: &VitalsSnapshot, clock: &dyn Clock) -> Vec<Alert> {
    generate_alerts_at(snapshot, clock.now())
}

/// Generate alerts for the latest readings
///
/// Output order is blood pressure, stress, heart rate, temperature. Each
/// vital contributes at most one alert. Heart rate is read from the blood
/// pressure cuff; the snapshot's standalone heart rate sample is not used.
pub fn generate_alerts_at(snapshot: &VitalsSnapshot, now: DateTime<Utc>) -> Vec<Alert> {
    let mut batch = AlertBatch::new(now);

    check_blood_pressure(&mut batch, &snapshot.blood_pressure);
    check_stress(&mut batch, &snapshot.stress);
    check_heart_rate(&mut batch, snapshot.blood_pressure.heart_rate);
    if let Some(temperature) = &snapshot.temperature {
        check_temperature(&mut batch, temperature);
    }

    debug!(count = batch.alerts.len(), "Generated alerts");
    batch.alerts
}

fn check_blood_pressure(batch: &mut AlertBatch, reading: &BloodPressureReading) {
    let (systolic, diastolic) = (reading.systolic, reading.diastolic);

    if systolic >= bp::STAGE_2_SYSTOLIC || diastolic >= bp::STAGE_2_DIASTOLIC {
        batch.push(
            VitalSign::BloodPressure,
            AlertType::Critical,
            "Tekanan Darah Sangat Tinggi",
            "Tekanan darah Anda berada pada tingkat hipertensi stage 2. Segera konsultasikan dengan dokter.".to_string(),
        );
    } else if systolic >= bp::STAGE_1_SYSTOLIC || diastolic >= bp::STAGE_1_DIASTOLIC {
        batch.push(
            VitalSign::BloodPressure,
            AlertType::Warning,
            "Tekanan Darah Tinggi",
            "Tekanan darah Anda berada pada tingkat hipertensi stage 1. Monitor secara teratur.".to_string(),
        );
    } else if systolic < bp::HYPOTENSION_SYSTOLIC || diastolic < bp::HYPOTENSION_DIASTOLIC {
        batch.push(
            VitalSign::BloodPressure,
            AlertType::Warning,
            "Tekanan Darah Rendah",
            "Tekanan darah Anda rendah. Pastikan istirahat cukup dan konsumsi cairan yang memadai.".to_string(),
        );
    }
}

fn check_stress(batch: &mut AlertBatch, reading: &StressReading) {
    let labelled_stress = StressLevel::from_label(reading.level.as_deref()) == StressLevel::Stress;

    if labelled_stress || reading.value >= stress::STRESS_AT_OR_ABOVE {
        batch.push(
            VitalSign::Stress,
            AlertType::Warning,
            "Tingkat Stress Tinggi",
            "Anda mengalami stress tinggi. Disarankan untuk beristirahat dan melakukan relaksasi.".to_string(),
        );
    }
}

// Alerts use strict comparisons: 120 bpm is a tachycardia category but only
// an "elevated" alert, and 100 bpm raises no alert.
fn check_heart_rate(batch: &mut AlertBatch, bpm: i32) {
    if bpm > hr::TACHYCARDIA {
        batch.push(
            VitalSign::HeartRate,
            AlertType::Warning,
            "Takikardia Terdeteksi",
            format!("Detak jantung Anda {} bpm, sangat tinggi. Segera istirahat.", bpm),
        );
    } else if bpm > hr::ELEVATED {
        batch.push(
            VitalSign::HeartRate,
            AlertType::Info,
            "Detak Jantung Meningkat",
            format!("Detak jantung Anda {} bpm, sedikit meningkat.", bpm),
        );
    } else if bpm < hr::BRADYCARDIA_BELOW {
        batch.push(
            VitalSign::HeartRate,
            AlertType::Info,
            "Detak Jantung Rendah",
            format!("Detak jantung Anda {} bpm, lebih rendah dari normal.", bpm),
        );
    }
}

fn check_temperature(batch: &mut AlertBatch, reading: &TemperatureReading) {
    let celsius = reading.celsius;

    if celsius >= temp::HIGH_FEVER {
        batch.push(
            VitalSign::Temperature,
            AlertType::Warning,
            "Demam Tinggi",
            format!("Suhu tubuh Anda {:.1}°C. Minum banyak air dan istirahat.", celsius),
        );
    } else if celsius >= temp::FEVER {
        batch.push(
            VitalSign::Temperature,
            AlertType::Info,
            "Suhu Sedikit Meningkat",
            format!("Suhu tubuh Anda {:.1}°C, sedikit di atas normal.", celsius),
        );
    } else if celsius < temp::HYPOTHERMIA_BELOW {
        batch.push(
            VitalSign::Temperature,
            AlertType::Critical,
            "Hipotermia Terdeteksi",
            format!("Suhu tubuh Anda {:.1}°C, sangat rendah. Segera cari bantuan medis!", celsius),
        );
    } else if celsius < temp::NORMAL {
        batch.push(
            VitalSign::Temperature,
            AlertType::Info,
            "Suhu Tubuh Rendah",
            format!("Suhu tubuh Anda {:.1}°C, lebih rendah dari normal.", celsius),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::readings::HeartRateReading;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    fn snapshot(systolic: i32, diastolic: i32, heart_rate: i32) -> VitalsSnapshot {
        let taken = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        VitalsSnapshot {
            blood_pressure: BloodPressureReading { systolic, diastolic, heart_rate, timestamp: taken },
            stress: StressReading {
                level: Some("baseline".to_string()),
                value: 45.0,
                hrv: 50.0,
                timestamp: taken,
            },
            temperature: None,
            heart_rate: None,
        }
    }

    fn with_temperature(mut snapshot: VitalsSnapshot, celsius: f64) -> VitalsSnapshot {
        snapshot.temperature = Some(TemperatureReading { celsius, timestamp: snapshot.blood_pressure.timestamp });
        snapshot
    }

    fn titles(alerts: &[Alert]) -> Vec<&str> {
        alerts.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_normal_readings_produce_no_alerts() {
        let alerts = generate_alerts_at(&with_temperature(snapshot(115, 75, 72), 36.6), fixed_now());
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_full_scenario_produces_four_ordered_alerts() {
        let mut snapshot = with_temperature(snapshot(165, 105, 125), 38.5);
        snapshot.stress.level = Some("stress".to_string());
        snapshot.stress.value = 80.0;

        let alerts = generate_alerts_at(&snapshot, fixed_now());

        assert_eq!(
            titles(&alerts),
            vec!["Tekanan Darah Sangat Tinggi", "Tingkat Stress Tinggi", "Takikardia Terdeteksi", "Demam Tinggi"]
        );
        let types: Vec<AlertType> = alerts.iter().map(|a| a.alert_type).collect();
        assert_eq!(types, vec![AlertType::Critical, AlertType::Warning, AlertType::Warning, AlertType::Warning]);
        let ids: Vec<u32> = alerts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(alerts[2].message.contains("125 bpm"));
        assert!(alerts[3].message.contains("38.5°C"));
    }

    #[test]
    fn test_blood_pressure_chain_emits_single_alert() {
        let alerts = generate_alerts_at(&snapshot(150, 92, 72), fixed_now());
        assert_eq!(titles(&alerts), vec!["Tekanan Darah Tinggi"]);

        let alerts = generate_alerts_at(&snapshot(85, 55, 72), fixed_now());
        assert_eq!(titles(&alerts), vec!["Tekanan Darah Rendah"]);
        assert_eq!(alerts[0].alert_type, AlertType::Warning);

        // 90/60 is the lowest reading that is not hypotensive
        assert!(generate_alerts_at(&snapshot(90, 60, 72), fixed_now()).is_empty());
        assert_eq!(titles(&generate_alerts_at(&snapshot(89, 70, 72), fixed_now())), vec!["Tekanan Darah Rendah"]);
        assert_eq!(titles(&generate_alerts_at(&snapshot(110, 59, 72), fixed_now())), vec!["Tekanan Darah Rendah"]);
    }

    #[test]
    fn test_high_check_precedes_low_check() {
        // Classifier calls this hypotension; the alert chain checks high first.
        let alerts = generate_alerts_at(&snapshot(85, 105, 72), fixed_now());
        assert_eq!(titles(&alerts), vec!["Tekanan Darah Sangat Tinggi"]);
    }

    #[test]
    fn test_stress_value_alone_triggers_alert() {
        let mut snapshot = snapshot(115, 75, 72);
        snapshot.stress.value = 70.0;
        assert_eq!(titles(&generate_alerts_at(&snapshot, fixed_now())), vec!["Tingkat Stress Tinggi"]);

        snapshot.stress.value = 20.0;
        snapshot.stress.level = Some("stress".to_string());
        assert_eq!(generate_alerts_at(&snapshot, fixed_now()).len(), 1);
    }

    #[test]
    fn test_heart_rate_alerts_use_strict_thresholds() {
        assert!(generate_alerts_at(&snapshot(115, 75, 100), fixed_now()).is_empty());
        assert!(generate_alerts_at(&snapshot(115, 75, 60), fixed_now()).is_empty());

        let alerts = generate_alerts_at(&snapshot(115, 75, 120), fixed_now());
        assert_eq!(titles(&alerts), vec!["Detak Jantung Meningkat"]);
        assert_eq!(alerts[0].alert_type, AlertType::Info);

        let alerts = generate_alerts_at(&snapshot(115, 75, 121), fixed_now());
        assert_eq!(titles(&alerts), vec!["Takikardia Terdeteksi"]);

        let alerts = generate_alerts_at(&snapshot(115, 75, 52), fixed_now());
        assert_eq!(titles(&alerts), vec!["Detak Jantung Rendah"]);
    }

    #[test]
    fn test_standalone_heart_rate_sample_is_ignored() {
        let mut snapshot = snapshot(115, 75, 72);
        snapshot.heart_rate = Some(HeartRateReading { bpm: 150, timestamp: fixed_now() });
        assert!(generate_alerts_at(&snapshot, fixed_now()).is_empty());
    }

    #[test]
    fn test_temperature_chain() {
        let cases = [
            (37.5, "Suhu Sedikit Meningkat", AlertType::Info),
            (34.2, "Hipotermia Terdeteksi", AlertType::Critical),
            (35.8, "Suhu Tubuh Rendah", AlertType::Info),
            (38.0, "Demam Tinggi", AlertType::Warning),
            (37.2, "Suhu Sedikit Meningkat", AlertType::Info),
            (36.09, "Suhu Tubuh Rendah", AlertType::Info),
            (35.0, "Suhu Tubuh Rendah", AlertType::Info),
            (34.99, "Hipotermia Terdeteksi", AlertType::Critical),
        ];
        for (celsius, title, alert_type) in cases {
            let alerts = generate_alerts_at(&with_temperature(snapshot(115, 75, 72), celsius), fixed_now());
            assert_eq!(alerts.len(), 1, "temperature {}", celsius);
            assert_eq!(alerts[0].title, title);
            assert_eq!(alerts[0].alert_type, alert_type);
            assert_eq!(alerts[0].vital, VitalSign::Temperature);
        }

        for celsius in [36.1, 37.19] {
            let alerts = generate_alerts_at(&with_temperature(snapshot(115, 75, 72), celsius), fixed_now());
            assert!(alerts.is_empty(), "temperature {}", celsius);
        }
    }

    #[test]
    fn test_alerts_are_stamped_by_clock_not_reading() {
        let mut clock = MockClock::new();
        clock.expect_now().times(1).returning(fixed_now);

        let alerts = generate_alerts_with(&snapshot(170, 80, 72), &clock);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].timestamp, fixed_now());
    }

    #[test]
    fn test_repeated_generation_is_stable() {
        let snapshot = with_temperature(snapshot(145, 95, 110), 37.4);
        let first = generate_alerts_at(&snapshot, fixed_now());
        let second = generate_alerts_at(&snapshot, fixed_now());
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
