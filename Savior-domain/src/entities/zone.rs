use serde::Serialize;

/// Exercise-intensity band derived from the share of maximum heart rate
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateZone {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
}

/// Display metadata for a zone
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ZoneInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Nominal band of maximum heart rate, e.g. "60-70%"
    pub percentage: &'static str,
    pub benefits: &'static str,
}

impl HeartRateZone {
    pub const ALL: [HeartRateZone; 4] = [
        HeartRateZone::Zone1,
        HeartRateZone::Zone2,
        HeartRateZone::Zone3,
        HeartRateZone::Zone4,
    ];

    pub fn info(self) -> &'static ZoneInfo {
        match self {
            HeartRateZone::Zone1 => &ZONE_1,
            HeartRateZone::Zone2 => &ZONE_2,
            HeartRateZone::Zone3 => &ZONE_3,
            HeartRateZone::Zone4 => &ZONE_4,
        }
    }
}

static ZONE_1: ZoneInfo = ZoneInfo {
    name: "Recovery",
    description: "Pemulihan",
    percentage: "50-60%",
    benefits: "Pemulihan dan pemanasan",
};

static ZONE_2: ZoneInfo = ZoneInfo {
    name: "Fat Burn",
    description: "Pembakaran Lemak",
    percentage: "60-70%",
    benefits: "Pembakaran lemak optimal",
};

static ZONE_3: ZoneInfo = ZoneInfo {
    name: "Cardio",
    description: "Kardio",
    percentage: "70-80%",
    benefits: "Meningkatkan ketahanan",
};

static ZONE_4: ZoneInfo = ZoneInfo {
    name: "Peak",
    description: "Puncak",
    percentage: "80-90%",
    benefits: "Latihan intensitas tinggi",
};

/// Result of a zone calculation
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ZoneReading {
    pub zone: HeartRateZone,
    pub info: &'static ZoneInfo,
    /// 220 minus age
    pub max_heart_rate: i32,
    /// Heart rate as a percentage of `max_heart_rate`, unclamped
    pub percentage: f64,
}
