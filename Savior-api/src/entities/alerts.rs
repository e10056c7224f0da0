use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use savior_domain::entities::Alert;

/// Public representation of an alert
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertResponse {
    /// Sequential id within the current alert set
    pub id: u32,
    /// critical, warning or info
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Vital sign the alert was raised for
    pub vital: String,
}

impl From<&Alert> for AlertResponse {
    fn from(alert: &Alert) -> Self {
        Self {
            id: alert.id,
            alert_type: alert.alert_type.as_str().to_string(),
            title: alert.title.clone(),
            message: alert.message.clone(),
            timestamp: alert.timestamp,
            vital: alert.vital.as_str().to_string(),
        }
    }
}

/// Alerts still on the board
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertListResponse {
    /// Active alerts in generation order, capped at the display limit
    pub alerts: Vec<AlertResponse>,
    /// Alerts in the current set, dismissed or not
    pub total: usize,
    /// Alerts dismissed since the set was published
    pub dismissed: usize,
}

/// Query parameters for listing active alerts
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct AlertsQuery {
    /// Maximum number of alerts (default: configured display limit)
    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    pub limit: Option<u32>,
}
