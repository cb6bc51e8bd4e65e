use serde::{Deserialize, Serialize};

use super::enums::AgeGroup;

/// Dosage guidance for one drug and one patient.
///
/// For drugs missing from the dosing table every textual field carries the
/// `"Consult healthcare provider"` placeholder, `age_group` is `unknown`,
/// and `renal_adjustment` is omitted. A lookup miss is never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageRecommendation {
    pub drug: String,
    pub recommended_dosage: String,
    pub age_group: AgeGroup,
    pub patient_age: u32,
    /// Advisory multiplier for impaired renal clearance. Metadata only —
    /// the dosage strings above stay as the table states them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renal_adjustment: Option<f64>,
    pub contraindications: Vec<String>,
    pub max_daily: String,
    pub special_considerations: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}
