use crate::entities::category::{Band, Category, CategoryRange, Severity};
use crate::entities::zone::{HeartRateZone, ZoneReading};
use crate::services::thresholds::heart_rate::*;

pub static BRADYCARDIA: Category = Category {
    id: "bradycardia",
    label: "Bradikardia",
    description: "Detak Jantung Lambat",
    severity: Severity::Low,
    range: CategoryRange::Single(Band::new(0.0, BRADYCARDIA_BELOW as f64)),
    recommendation: Some("Detak jantung rendah. Konsultasi dokter jika disertai gejala lain."),
    icon: "TrendingDown",
    style: "blue-500",
};

pub static RESTING: Category = Category {
    id: "resting",
    label: "Normal",
    description: "Detak Jantung Normal",
    severity: Severity::Normal,
    range: CategoryRange::Single(Band::new(BRADYCARDIA_BELOW as f64, ELEVATED as f64)),
    recommendation: None,
    icon: "Heart",
    style: "green-500",
};

pub static ELEVATED_RATE: Category = Category {
    id: "elevated",
    label: "Meningkat",
    description: "Detak Jantung Meningkat",
    severity: Severity::Elevated,
    range: CategoryRange::Single(Band::new(ELEVATED as f64, TACHYCARDIA as f64)),
    recommendation: Some("Detak jantung sedikit meningkat. Relaksasi dan hindari aktivitas berat."),
    icon: "AlertCircle",
    style: "amber-500",
};

pub static TACHYCARDIA_RATE: Category = Category {
    id: "tachycardia",
    label: "Takikardia",
    description: "Detak Jantung Tinggi",
    severity: Severity::High,
    range: CategoryRange::Single(Band::at_least(TACHYCARDIA as f64)),
    recommendation: Some("Detak jantung tinggi. Istirahat dan konsultasi dokter jika berlanjut."),
    icon: "HeartCrack",
    style: "red-500",
};

pub static CATEGORIES: [&Category; 4] = [&BRADYCARDIA, &RESTING, &ELEVATED_RATE, &TACHYCARDIA_RATE];

/// Categorize a heart rate in beats per minute
pub fn classify_heart_rate(bpm: i32) -> &'static Category {
    if bpm < BRADYCARDIA_BELOW {
        &BRADYCARDIA
    } else if bpm >= TACHYCARDIA {
        &TACHYCARDIA_RATE
    } else if bpm >= ELEVATED {
        &ELEVATED_RATE
    } else {
        &RESTING
    }
}

/// Training zone for `bpm` given the user's age
///
/// Maximum heart rate is estimated as 220 minus age. The percentage is not
/// clamped, so rates above the estimated maximum land in zone 4. Any age is
/// accepted; the maximum saturates instead of overflowing.
pub fn heart_rate_zone(age: i32, bpm: i32) -> ZoneReading {
    let max_heart_rate = MAX_HEART_RATE_BASE.saturating_sub(age);
    // Multiply first so exact percentages such as 114/190 stay exact.
    let percentage = f64::from(bpm) * 100.0 / f64::from(max_heart_rate);

    let zone = if percentage < ZONE_1_BELOW_PCT {
        HeartRateZone::Zone1
    } else if percentage < ZONE_2_BELOW_PCT {
        HeartRateZone::Zone2
    } else if percentage < ZONE_3_BELOW_PCT {
        HeartRateZone::Zone3
    } else {
        HeartRateZone::Zone4
    };

    ZoneReading {
        zone,
        info: zone.info(),
        max_heart_rate,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_rate_boundaries() {
        assert_eq!(classify_heart_rate(59).id, "bradycardia");
        assert_eq!(classify_heart_rate(60).id, "resting");
        assert_eq!(classify_heart_rate(99).id, "resting");
        assert_eq!(classify_heart_rate(100).id, "elevated");
        assert_eq!(classify_heart_rate(119).id, "elevated");
        assert_eq!(classify_heart_rate(120).id, "tachycardia");
    }

    #[test]
    fn test_heart_rate_severity() {
        assert_eq!(classify_heart_rate(45).severity, Severity::Low);
        assert_eq!(classify_heart_rate(72).severity, Severity::Normal);
        assert_eq!(classify_heart_rate(180).severity, Severity::High);
    }

    #[test]
    fn test_zone_at_max_heart_rate_is_peak() {
        let reading = heart_rate_zone(30, 190);
        assert_eq!(reading.max_heart_rate, 190);
        assert_eq!(reading.percentage, 100.0);
        assert_eq!(reading.zone, HeartRateZone::Zone4);
        assert_eq!(reading.info.name, "Peak");
    }

    #[test]
    fn test_zone_boundary_sixty_percent_is_fat_burn() {
        let reading = heart_rate_zone(30, 114);
        assert_eq!(reading.percentage, 60.0);
        assert_eq!(reading.zone, HeartRateZone::Zone2);

        assert_eq!(heart_rate_zone(30, 113).zone, HeartRateZone::Zone1);
    }

    #[test]
    fn test_zone_bands() {
        // max 190: 70% = 133, 80% = 152
        assert_eq!(heart_rate_zone(30, 132).zone, HeartRateZone::Zone2);
        assert_eq!(heart_rate_zone(30, 133).zone, HeartRateZone::Zone3);
        assert_eq!(heart_rate_zone(30, 151).zone, HeartRateZone::Zone3);
        assert_eq!(heart_rate_zone(30, 152).zone, HeartRateZone::Zone4);
    }

    #[test]
    fn test_zone_above_max_is_not_clamped() {
        let reading = heart_rate_zone(60, 200);
        assert!(reading.percentage > 100.0);
        assert_eq!(reading.zone, HeartRateZone::Zone4);
    }

    #[test]
    fn test_zone_extreme_ages_do_not_overflow() {
        let reading = heart_rate_zone(i32::MIN, 100);
        assert_eq!(reading.max_heart_rate, i32::MAX);
        assert_eq!(reading.zone, HeartRateZone::Zone1);

        let reading = heart_rate_zone(i32::MAX, 100);
        assert_eq!(reading.max_heart_rate, MAX_HEART_RATE_BASE - i32::MAX);
        assert!(reading.percentage < 0.0);
        assert_eq!(reading.zone, HeartRateZone::Zone1);
    }
}
