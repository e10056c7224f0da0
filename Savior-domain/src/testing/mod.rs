// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Arc;

use crate::entities::device::DeviceStatus;
use crate::entities::readings::{
    BloodPressureReading, HeartRateReading, StressReading, TemperatureReading, VitalsSnapshot,
};
use crate::entities::vital::TimeRange;
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::{Clock, VitalsService, VitalsServiceTrait};

/// Blood pressure centres, one per category from hypotension to stage 2
const BP_CENTRES: [(i32, i32); 5] = [(85, 58), (110, 70), (130, 85), (145, 92), (165, 105)];

const TEMPERATURE_CENTRES: [f64; 5] = [34.5, 35.5, 36.5, 37.5, 38.5];

const HEART_RATE_CENTRES: [i32; 4] = [55, 75, 110, 130];

const STRESS_LABELS: [&str; 3] = ["stress", "baseline", "amusement"];

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Seeded generator of plausible readings around each category's centre
pub struct MockVitalsGenerator {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl MockVitalsGenerator {
    /// Create a generator; the same seed and instant yield the same readings
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now,
        }
    }

    pub fn blood_pressure(&mut self) -> BloodPressureReading {
        self.blood_pressure_at(self.now)
    }

    fn blood_pressure_at(&mut self, timestamp: DateTime<Utc>) -> BloodPressureReading {
        let (systolic, diastolic) = BP_CENTRES[self.rng.gen_range(0..BP_CENTRES.len())];
        BloodPressureReading {
            systolic: systolic + self.rng.gen_range(-5..5),
            diastolic: diastolic + self.rng.gen_range(-5..5),
            heart_rate: self.rng.gen_range(60..100),
            timestamp,
        }
    }

    pub fn stress(&mut self) -> StressReading {
        self.stress_at(self.now)
    }

    fn stress_at(&mut self, timestamp: DateTime<Utc>) -> StressReading {
        let label = STRESS_LABELS[self.rng.gen_range(0..STRESS_LABELS.len())];
        let value = match label {
            "stress" => self.rng.gen_range(70..100),
            "amusement" => self.rng.gen_range(0..30),
            _ => self.rng.gen_range(30..70),
        };
        StressReading {
            level: Some(label.to_string()),
            value: f64::from(value),
            hrv: f64::from(self.rng.gen_range(30..70)),
            timestamp,
        }
    }

    pub fn temperature(&mut self) -> TemperatureReading {
        self.temperature_at(self.now)
    }

    fn temperature_at(&mut self, timestamp: DateTime<Utc>) -> TemperatureReading {
        let centre = TEMPERATURE_CENTRES[self.rng.gen_range(0..TEMPERATURE_CENTRES.len())];
        TemperatureReading {
            celsius: centre + self.rng.gen_range(-0.3..0.3),
            timestamp,
        }
    }

    pub fn heart_rate(&mut self) -> HeartRateReading {
        self.heart_rate_at(self.now)
    }

    fn heart_rate_at(&mut self, timestamp: DateTime<Utc>) -> HeartRateReading {
        let centre = HEART_RATE_CENTRES[self.rng.gen_range(0..HEART_RATE_CENTRES.len())];
        HeartRateReading {
            bpm: centre + self.rng.gen_range(-5..5),
            timestamp,
        }
    }

    /// One reading of every vital sign
    pub fn snapshot(&mut self) -> VitalsSnapshot {
        VitalsSnapshot {
            blood_pressure: self.blood_pressure(),
            stress: self.stress(),
            temperature: Some(self.temperature()),
            heart_rate: Some(self.heart_rate()),
        }
    }

    /// Hourly snapshots from `range.hours()` ago up to and including `now`
    pub fn history(&mut self, range: TimeRange) -> Vec<VitalsSnapshot> {
        (0..=range.hours())
            .rev()
            .map(|hours_ago| {
                let at = self.now - Duration::hours(i64::from(hours_ago));
                VitalsSnapshot {
                    blood_pressure: self.blood_pressure_at(at),
                    stress: self.stress_at(at),
                    temperature: Some(self.temperature_at(at)),
                    heart_rate: Some(self.heart_rate_at(at)),
                }
            })
            .collect()
    }

    /// Device status: mostly connected, synced within the last five minutes
    pub fn device_status(&mut self) -> DeviceStatus {
        DeviceStatus {
            is_connected: self.rng.gen_bool(0.9),
            battery_level: self.rng.gen_range(60..100),
            last_sync: self.now - Duration::milliseconds(self.rng.gen_range(0..300_000)),
            device_name: "SAVIOR Watch".to_string(),
        }
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Engine component status
    engine_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            engine_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with a failing engine
    pub fn with_unhealthy_engine(mut self) -> Self {
        self.engine_status = ComponentStatus::Unhealthy;
        self.system_status = SystemStatus::Unhealthy;
        self
    }

    /// Set the overall system status
    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.system_status = status;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components.insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "engine".to_string(),
            HealthComponent {
                status: self.engine_status.clone(),
                details: match self.engine_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => Some("Classification engine is slow".to_string()),
                    ComponentStatus::Unhealthy => Some("Classification engine failed its canaries".to_string()),
                },
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }

    async fn check_engine_status(&self) -> Result<bool, String> {
        match self.engine_status {
            ComponentStatus::Healthy | ComponentStatus::Degraded => Ok(true),
            ComponentStatus::Unhealthy => Err("Classification engine failed its canaries".to_string()),
        }
    }
}

/// Vitals service whose alerts are stamped with a fixed instant
pub fn create_mock_vitals_service() -> VitalsService {
    VitalsService::with_clock(Arc::new(FixedClock(mock_epoch())))
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> impl HealthServiceTrait {
    MockHealthService::new()
}

/// Instant used by the mock clock: 2024-05-01T08:00:00Z
pub fn mock_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_714_550_400, 0).unwrap_or_default()
}
