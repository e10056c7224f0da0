use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::vital::VitalSign;

/// How urgently an alert should be surfaced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Critical,
    Warning,
    Info,
}

impl AlertType {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertType::Critical => "critical",
            AlertType::Warning => "warning",
            AlertType::Info => "info",
        }
    }
}

/// Generated notice about an abnormal reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Sequential id, starting at 1 within one generation pass
    pub id: u32,

    #[serde(rename = "type")]
    pub alert_type: AlertType,

    pub title: String,

    pub message: String,

    /// Generation time, not the time of the underlying reading
    pub timestamp: DateTime<Utc>,

    /// Vital sign the alert was raised for
    pub vital: VitalSign,
}

/// Default number of alerts shown at once
pub const DEFAULT_MAX_DISPLAY: usize = 5;

/// Alerts still visible after removing dismissed ids, in generation order
pub fn active_alerts<'a>(
    alerts: &'a [Alert],
    dismissed: &HashSet<u32>,
    max_display: usize,
) -> Vec<&'a Alert> {
    alerts
        .iter()
        .filter(|alert| !dismissed.contains(&alert.id))
        .take(max_display)
        .collect()
}
