use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::alert::Alert;
use crate::entities::category::Category;
use crate::entities::zone::ZoneReading;

/// Everything the dashboard shows for one sampling cycle
#[derive(Debug, Clone, Serialize)]
pub struct VitalsAssessment {
    pub blood_pressure: &'static Category,

    pub heart_rate: &'static Category,

    /// Heart rate that was classified, after falling back to the cuff pulse
    pub heart_rate_bpm: i32,

    pub zone: ZoneReading,

    pub stress: &'static Category,

    /// Gauge value, using the label fallback when the score is zero
    pub stress_percentage: f64,

    pub temperature: Option<&'static Category>,

    pub temperature_fahrenheit: Option<f64>,

    pub alerts: Vec<Alert>,

    pub generated_at: DateTime<Utc>,
}
