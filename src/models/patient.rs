use serde::{Deserialize, Serialize};

use super::enums::RenalFunction;

/// Patient attributes supplied alongside an analysis request.
///
/// Everything is optional on the wire; the detailed explainer includes
/// whatever is present in its prompt context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renal_function: Option<RenalFunction>,
    #[serde(default)]
    pub pregnant: bool,
    #[serde(default)]
    pub kidney_disease: bool,
    #[serde(default)]
    pub liver_disease: bool,
    #[serde(default)]
    pub heart_disease: bool,
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,
}
