use crate::entities::category::{Band, Category, CategoryRange, Severity};
use crate::services::thresholds::blood_pressure::*;

const SEEK_DOCTOR: &str =
    "Segera konsultasi dengan dokter. Hindari aktivitas berat dan kelola stress.";
const MONITOR_ROUTINELY: &str =
    "Monitor tekanan darah secara rutin. Kurangi konsumsi garam dan tingkatkan aktivitas fisik.";
const REST_AND_HYDRATE: &str = "Pastikan istirahat cukup dan konsumsi cairan yang memadai.";

// Display ranges of the lowest band start at zero.
const FLOOR: f64 = 0.0;

pub static HYPOTENSION: Category = Category {
    id: "hypotension",
    label: "Hipotensi",
    description: "Tekanan Darah Rendah",
    severity: Severity::Low,
    range: CategoryRange::BloodPressure {
        systolic: Band::new(FLOOR, HYPOTENSION_SYSTOLIC as f64),
        diastolic: Band::new(FLOOR, HYPOTENSION_DIASTOLIC as f64),
    },
    recommendation: Some(REST_AND_HYDRATE),
    icon: "TrendingDown",
    style: "bp-hypotension",
};

pub static NORMAL: Category = Category {
    id: "normal",
    label: "Normal",
    description: "Tekanan Darah Normal",
    severity: Severity::Normal,
    range: CategoryRange::BloodPressure {
        systolic: Band::new(HYPOTENSION_SYSTOLIC as f64, (PREHYPERTENSION_SYSTOLIC - 1) as f64),
        diastolic: Band::new(HYPOTENSION_DIASTOLIC as f64, (PREHYPERTENSION_DIASTOLIC - 1) as f64),
    },
    recommendation: None,
    icon: "CheckCircle",
    style: "bp-normal",
};

pub static PREHYPERTENSION: Category = Category {
    id: "prehypertension",
    label: "Pre-Hipertensi",
    description: "Pra-Hipertensi",
    severity: Severity::Elevated,
    range: CategoryRange::BloodPressure {
        systolic: Band::new(PREHYPERTENSION_SYSTOLIC as f64, (STAGE_1_SYSTOLIC - 1) as f64),
        diastolic: Band::new(PREHYPERTENSION_DIASTOLIC as f64, (STAGE_1_DIASTOLIC - 1) as f64),
    },
    recommendation: Some(MONITOR_ROUTINELY),
    icon: "AlertTriangle",
    style: "bp-prehypertension",
};

pub static STAGE_1: Category = Category {
    id: "stage1",
    label: "Hipertensi Stage 1",
    description: "Hipertensi Tingkat 1",
    severity: Severity::High,
    range: CategoryRange::BloodPressure {
        systolic: Band::new(STAGE_1_SYSTOLIC as f64, (STAGE_2_SYSTOLIC - 1) as f64),
        diastolic: Band::new(STAGE_1_DIASTOLIC as f64, (STAGE_2_DIASTOLIC - 1) as f64),
    },
    recommendation: Some(SEEK_DOCTOR),
    icon: "AlertCircle",
    style: "bp-stage1",
};

pub static STAGE_2: Category = Category {
    id: "stage2",
    label: "Hipertensi Stage 2",
    description: "Hipertensi Tingkat 2",
    severity: Severity::Critical,
    range: CategoryRange::BloodPressure {
        systolic: Band::at_least(STAGE_2_SYSTOLIC as f64),
        diastolic: Band::at_least(STAGE_2_DIASTOLIC as f64),
    },
    recommendation: Some(SEEK_DOCTOR),
    icon: "AlertOctagon",
    style: "bp-stage2",
};

/// All blood pressure bands, least to most severe hypertension
pub static CATEGORIES: [&Category; 5] = [&HYPOTENSION, &NORMAL, &PREHYPERTENSION, &STAGE_1, &STAGE_2];

/// Categorize blood pressure based on measurements
///
/// Either value alone can escalate the band, so the most severe bands are
/// checked first. Hypotension wins over everything: 85/105 is hypotensive.
pub fn classify_blood_pressure(systolic: i32, diastolic: i32) -> &'static Category {
    if systolic < HYPOTENSION_SYSTOLIC || diastolic < HYPOTENSION_DIASTOLIC {
        &HYPOTENSION
    } else if systolic >= STAGE_2_SYSTOLIC || diastolic >= STAGE_2_DIASTOLIC {
        &STAGE_2
    } else if systolic >= STAGE_1_SYSTOLIC || diastolic >= STAGE_1_DIASTOLIC {
        &STAGE_1
    } else if systolic >= PREHYPERTENSION_SYSTOLIC || diastolic >= PREHYPERTENSION_DIASTOLIC {
        &PREHYPERTENSION
    } else {
        &NORMAL
    }
}
