use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// A resolved drug-drug interaction.
///
/// `drug_a`/`drug_b` follow the caller's drug order, not the orientation the
/// pair happens to have in the reference table — lookup is symmetric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub drug_a: String,
    pub drug_b: String,
    pub description: String,
    pub severity: Severity,
}

/// An interaction plus its attached natural-language explanation(s).
///
/// `patient_explanation` is only populated by the comprehensive workflow,
/// where the detailed explainer produces both a clinical analysis and a
/// plain-language summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedInteraction {
    #[serde(flatten)]
    pub interaction: InteractionRecord,
    pub ai_analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_explanation: Option<String>,
}
