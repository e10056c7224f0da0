// Domain entities and value objects
pub mod alert;
pub mod assessment;
pub mod category;
pub mod device;
pub mod readings;
pub mod vital;
pub mod zone;

// Re-export common types for easier imports
pub use alert::{active_alerts, Alert, AlertType, DEFAULT_MAX_DISPLAY};
pub use assessment::VitalsAssessment;
pub use category::{Band, Category, CategoryRange, Severity};
pub use device::{BatteryBand, DeviceStatus};
pub use readings::{
    BloodPressureReading, HeartRateReading, StressReading, TemperatureReading, VitalsSnapshot,
};
pub use vital::{TimeRange, VitalSign};
pub use zone::{HeartRateZone, ZoneInfo, ZoneReading};
