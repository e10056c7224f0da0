pub mod alerts;
pub mod device;
pub mod health;
pub mod vitals;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use alerts::{dismiss_alert, get_alerts, publish_alerts};
pub use device::device_status;
pub use health::health_check;
pub use vitals::{
    classify_blood_pressure, classify_heart_rate, classify_stress, classify_temperature,
    classify_vitals, heart_rate_zone, vitals_history,
};
