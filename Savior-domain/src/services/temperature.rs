use crate::entities::category::{Band, Category, CategoryRange, Severity};
use crate::services::thresholds::temperature::*;

pub static HYPOTHERMIA: Category = Category {
    id: "hypothermia",
    label: "Hipotermia",
    description: "Suhu Tubuh Sangat Rendah",
    severity: Severity::Critical,
    range: CategoryRange::Single(Band::new(0.0, HYPOTHERMIA_BELOW)),
    recommendation: Some("Suhu tubuh sangat rendah. Segera cari bantuan medis dan hangatkan tubuh."),
    icon: "Snowflake",
    style: "blue-500",
};

pub static LOW: Category = Category {
    id: "low",
    label: "Rendah",
    description: "Suhu Tubuh Rendah",
    severity: Severity::Low,
    range: CategoryRange::Single(Band::new(HYPOTHERMIA_BELOW, NORMAL)),
    recommendation: Some("Suhu tubuh rendah. Hangatkan tubuh dan monitor kondisi."),
    icon: "Wind",
    style: "cyan-500",
};

pub static NORMAL_TEMPERATURE: Category = Category {
    id: "normal",
    label: "Normal",
    description: "Suhu Tubuh Normal",
    severity: Severity::Normal,
    range: CategoryRange::Single(Band::new(NORMAL, FEVER)),
    recommendation: None,
    icon: "CheckCircle",
    style: "green-500",
};

pub static FEVER_TEMPERATURE: Category = Category {
    id: "fever",
    label: "Demam Ringan",
    description: "Suhu Sedikit Tinggi",
    severity: Severity::Elevated,
    range: CategoryRange::Single(Band::new(FEVER, HIGH_FEVER)),
    recommendation: Some("Suhu sedikit meningkat. Monitor kondisi dan istirahat yang cukup."),
    icon: "ThermometerSun",
    style: "amber-500",
};

pub static HIGH_FEVER_TEMPERATURE: Category = Category {
    id: "high_fever",
    label: "Demam Tinggi",
    description: "Suhu Tubuh Tinggi",
    severity: Severity::High,
    range: CategoryRange::Single(Band::at_least(HIGH_FEVER)),
    recommendation: Some("Demam tinggi terdeteksi. Minum banyak air, istirahat, dan konsultasi dokter."),
    icon: "Flame",
    style: "red-500",
};

pub static CATEGORIES: [&Category; 5] = [
    &HYPOTHERMIA,
    &LOW,
    &NORMAL_TEMPERATURE,
    &FEVER_TEMPERATURE,
    &HIGH_FEVER_TEMPERATURE,
];

/// Categorize a body temperature in degrees Celsius
///
/// NaN fails every comparison and lands in the low band; callers validate
/// readings before classification.
pub fn classify_temperature(celsius: f64) -> &'static Category {
    if celsius < HYPOTHERMIA_BELOW {
        &HYPOTHERMIA
    } else if celsius >= HIGH_FEVER {
        &HIGH_FEVER_TEMPERATURE
    } else if celsius >= FEVER {
        &FEVER_TEMPERATURE
    } else if celsius >= NORMAL {
        &NORMAL_TEMPERATURE
    } else {
        &LOW
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
