use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use savior_domain::entities::{BatteryBand, DeviceStatus};

/// Request payload reporting the wearable's status
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeviceStatusRequest {
    pub is_connected: bool,

    /// Battery charge, 0-100
    #[validate(range(max = 100, message = "Battery level must be between 0 and 100"))]
    pub battery_level: u8,

    /// Last successful sync
    pub last_sync: DateTime<Utc>,

    #[validate(length(min = 1, max = 100, message = "Device name must be 1-100 characters"))]
    pub device_name: String,
}

impl From<DeviceStatusRequest> for DeviceStatus {
    fn from(request: DeviceStatusRequest) -> Self {
        Self {
            is_connected: request.is_connected,
            battery_level: request.battery_level,
            last_sync: request.last_sync,
            device_name: request.device_name,
        }
    }
}

/// Device status decorated for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeviceStatusResponse {
    pub is_connected: bool,
    pub battery_level: u8,
    /// low, medium or full
    pub battery_band: String,
    pub last_sync: DateTime<Utc>,
    /// Relative sync time, e.g. "3 menit yang lalu"
    pub last_sync_label: String,
    pub device_name: String,
}

impl DeviceStatusResponse {
    pub fn from_status(status: &DeviceStatus, now: DateTime<Utc>) -> Self {
        let battery_band = match status.battery_band() {
            BatteryBand::Low => "low",
            BatteryBand::Medium => "medium",
            BatteryBand::Full => "full",
        };

        Self {
            is_connected: status.is_connected,
            battery_level: status.battery_level,
            battery_band: battery_band.to_string(),
            last_sync: status.last_sync,
            last_sync_label: status.last_sync_label(now),
            device_name: status.device_name.clone(),
        }
    }
}
