use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Connection and battery state of the paired wearable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct DeviceStatus {
    pub is_connected: bool,

    /// Remaining charge in percent
    #[validate(range(max = 100, message = "Battery level must be between 0 and 100"))]
    pub battery_level: u8,

    pub last_sync: DateTime<Utc>,

    #[validate(length(min = 1, max = 100, message = "Device name must be 1-100 characters"))]
    pub device_name: String,
}

/// Coarse battery indicator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BatteryBand {
    Low,
    Medium,
    Full,
}

impl DeviceStatus {
    pub fn battery_band(&self) -> BatteryBand {
        if self.battery_level < 20 {
            BatteryBand::Low
        } else if self.battery_level < 50 {
            BatteryBand::Medium
        } else {
            BatteryBand::Full
        }
    }

    /// Human-readable age of the last sync relative to `now`
    pub fn last_sync_label(&self, now: DateTime<Utc>) -> String {
        // A sync stamped in the future reads as "0 seconds ago".
        let elapsed = (now - self.last_sync).num_seconds().max(0);

        if elapsed < 60 {
            format!("{} detik yang lalu", elapsed)
        } else if elapsed < 3_600 {
            format!("{} menit yang lalu", elapsed / 60)
        } else if elapsed < 86_400 {
            format!("{} jam yang lalu", elapsed / 3_600)
        } else {
            self.last_sync.format("%d/%m/%Y %H:%M:%S").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn status(battery_level: u8, last_sync: DateTime<Utc>) -> DeviceStatus {
        DeviceStatus {
            is_connected: true,
            battery_level,
            last_sync,
            device_name: "SAVIOR Watch".to_string(),
        }
    }

    #[test]
    fn test_battery_band_boundaries() {
        let now = Utc::now();
        assert_eq!(status(19, now).battery_band(), BatteryBand::Low);
        assert_eq!(status(20, now).battery_band(), BatteryBand::Medium);
        assert_eq!(status(49, now).battery_band(), BatteryBand::Medium);
        assert_eq!(status(50, now).battery_band(), BatteryBand::Full);
    }

    #[test]
    fn test_last_sync_label() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        assert_eq!(status(80, now - Duration::seconds(42)).last_sync_label(now), "42 detik yang lalu");
        assert_eq!(status(80, now - Duration::seconds(150)).last_sync_label(now), "2 menit yang lalu");
        assert_eq!(status(80, now - Duration::hours(5)).last_sync_label(now), "5 jam yang lalu");
        assert_eq!(status(80, now - Duration::days(2)).last_sync_label(now), "29/04/2024 12:00:00");
    }

    #[test]
    fn test_battery_over_100_fails_validation() {
        assert!(status(101, Utc::now()).validate().is_err());
        assert!(status(100, Utc::now()).validate().is_ok());
    }
}
