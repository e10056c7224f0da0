use serde::Serialize;
use std::fmt;

/// Severity tag attached to every category band
///
/// Drives the alert type and the tone of the recommendation text.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Elevated,
    Normal,
    Low,
    Relaxed,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Elevated => "elevated",
            Severity::Normal => "normal",
            Severity::Low => "low",
            Severity::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric band with an inclusive lower bound
///
/// `max` is `None` for the open-ended top band of a vital sign.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: Option<f64>,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max: Some(max) }
    }

    pub const fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }
}

/// Numeric range covered by a category
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryRange {
    /// Single measured value (heart rate, temperature, stress value)
    Single(Band),

    /// Two independent bands evaluated disjunctively
    BloodPressure { systolic: Band, diastolic: Band },
}

/// Static descriptor of one severity band for one vital sign
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Category {
    /// Stable identifier, unique within a vital sign
    pub id: &'static str,

    /// Short display label
    pub label: &'static str,

    /// Longer display text
    pub description: &'static str,

    pub severity: Severity,

    pub range: CategoryRange,

    /// Advice shown to the user; `None` for bands needing no action
    pub recommendation: Option<&'static str>,

    /// Opaque icon identifier resolved by the rendering layer
    pub icon: &'static str,

    /// Opaque style key resolved by the rendering layer
    pub style: &'static str,
}

impl Category {
    /// Whether the category is anything other than the resting state
    pub fn is_abnormal(&self) -> bool {
        !matches!(self.severity, Severity::Normal | Severity::Relaxed)
    }
}
