//! Band boundaries shared by the classifiers and the alert generator
//!
//! Lower bounds are inclusive unless a name says otherwise.

/// Blood pressure limits in mmHg
pub mod blood_pressure {
    /// Below either limit the reading is hypotensive
    pub const HYPOTENSION_SYSTOLIC: i32 = 90;
    pub const HYPOTENSION_DIASTOLIC: i32 = 60;

    pub const PREHYPERTENSION_SYSTOLIC: i32 = 120;
    pub const PREHYPERTENSION_DIASTOLIC: i32 = 80;

    pub const STAGE_1_SYSTOLIC: i32 = 140;
    pub const STAGE_1_DIASTOLIC: i32 = 90;

    pub const STAGE_2_SYSTOLIC: i32 = 160;
    pub const STAGE_2_DIASTOLIC: i32 = 100;
}

/// Heart rate limits in bpm
pub mod heart_rate {
    pub const BRADYCARDIA_BELOW: i32 = 60;
    pub const ELEVATED: i32 = 100;
    pub const TACHYCARDIA: i32 = 120;

    pub const MAX_HEART_RATE_BASE: i32 = 220;

    /// Zone upper bounds as a percentage of maximum heart rate (exclusive)
    pub const ZONE_1_BELOW_PCT: f64 = 60.0;
    pub const ZONE_2_BELOW_PCT: f64 = 70.0;
    pub const ZONE_3_BELOW_PCT: f64 = 80.0;
}

/// Stress score limits on the 0-100 scale
pub mod stress {
    pub const STRESS_AT_OR_ABOVE: f64 = 70.0;
    pub const AMUSEMENT_AT_OR_BELOW: f64 = 30.0;
}

/// Body temperature limits in degrees Celsius
pub mod temperature {
    pub const HYPOTHERMIA_BELOW: f64 = 35.0;
    pub const NORMAL: f64 = 36.1;
    pub const FEVER: f64 = 37.2;
    pub const HIGH_FEVER: f64 = 38.0;
}
