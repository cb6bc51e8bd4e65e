use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Ordinal risk classification of a drug-drug interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AgeGroup
// ---------------------------------------------------------------------------

/// Bucket driving which dosing table row applies.
///
/// `Unknown` is only produced for drugs missing from the dosing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Pediatric,
    Adult,
    Elderly,
    Unknown,
}

impl AgeGroup {
    /// Bucket a patient age. Boundary ages 18 and 65 land in `Adult`.
    pub fn for_age(age: u32) -> Self {
        if age < 18 {
            Self::Pediatric
        } else if age > 65 {
            Self::Elderly
        } else {
            Self::Adult
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pediatric => "pediatric",
            Self::Adult => "adult",
            Self::Elderly => "elderly",
            Self::Unknown => "unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// RenalFunction
// ---------------------------------------------------------------------------

/// Kidney function category supplied by the caller.
///
/// Parsing is lenient: unrecognized values fall back to `Normal`, so a typo
/// in a request degrades to the unadjusted recommendation instead of an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RenalFunction {
    #[default]
    Normal,
    Mild,
    Moderate,
    Severe,
    Dialysis,
}

impl RenalFunction {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "mild" => Self::Mild,
            "moderate" => Self::Moderate,
            "severe" => Self::Severe,
            "dialysis" => Self::Dialysis,
            _ => Self::Normal,
        }
    }

    /// Advisory dose-adjustment multiplier. Attached to recommendations as
    /// metadata; never applied arithmetically to the dosage text.
    pub fn adjustment_factor(&self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Mild => 0.75,
            Self::Moderate => 0.5,
            Self::Severe => 0.25,
            Self::Dialysis => 0.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Dialysis => "dialysis",
        }
    }
}

impl From<String> for RenalFunction {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}
