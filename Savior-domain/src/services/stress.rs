use serde::{Deserialize, Serialize};

use crate::entities::category::{Band, Category, CategoryRange, Severity};
use crate::services::thresholds::stress::*;

/// Stress state reported by the wearable's classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Stress,
    Baseline,
    Amusement,
}

impl StressLevel {
    /// Parse a device label; unknown or missing labels mean baseline
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::to_lowercase).as_deref() {
            Some("stress") => StressLevel::Stress,
            Some("amusement") => StressLevel::Amusement,
            _ => StressLevel::Baseline,
        }
    }

    pub fn category(self) -> &'static Category {
        match self {
            StressLevel::Stress => &STRESS,
            StressLevel::Baseline => &BASELINE,
            StressLevel::Amusement => &AMUSEMENT,
        }
    }

    /// Gauge value shown when the reading carries no numeric score
    pub fn display_percentage(self) -> f64 {
        match self {
            StressLevel::Stress => 85.0,
            StressLevel::Amusement => 20.0,
            StressLevel::Baseline => 50.0,
        }
    }
}

pub static STRESS: Category = Category {
    id: "stress",
    label: "Stress",
    description: "Tingkat Stress Tinggi",
    severity: Severity::High,
    range: CategoryRange::Single(Band::new(STRESS_AT_OR_ABOVE, 100.0)),
    recommendation: Some("Disarankan untuk beristirahat dan melakukan relaksasi"),
    icon: "Frown",
    style: "stress-stress",
};

pub static BASELINE: Category = Category {
    id: "baseline",
    label: "Baseline",
    description: "Kondisi Normal",
    severity: Severity::Normal,
    range: CategoryRange::Single(Band::new(AMUSEMENT_AT_OR_BELOW, STRESS_AT_OR_ABOVE)),
    recommendation: Some("Kondisi stress dalam batas normal"),
    icon: "Smile",
    style: "stress-baseline",
};

pub static AMUSEMENT: Category = Category {
    id: "amusement",
    label: "Amusement",
    description: "Kondisi Rileks",
    severity: Severity::Relaxed,
    range: CategoryRange::Single(Band::new(0.0, AMUSEMENT_AT_OR_BELOW)),
    recommendation: Some("Kondisi sangat baik, pertahankan!"),
    icon: "Laugh",
    style: "stress-amusement",
};

pub static CATEGORIES: [&Category; 3] = [&STRESS, &BASELINE, &AMUSEMENT];

/// Categorize stress from the classifier label, case-insensitively
pub fn classify_stress_by_label(label: Option<&str>) -> &'static Category {
    StressLevel::from_label(label).category()
}

/// Categorize stress from a 0-100 score
///
/// Both 70 and 30 belong to the extreme bands; baseline is the open
/// interval between them.
pub fn classify_stress_by_value(value: f64) -> &'static Category {
    stress_level_for_value(value).category()
}

pub fn stress_level_for_value(value: f64) -> StressLevel {
    if value >= STRESS_AT_OR_ABOVE {
        StressLevel::Stress
    } else if value <= AMUSEMENT_AT_OR_BELOW {
        StressLevel::Amusement
    } else {
        StressLevel::Baseline
    }
}
