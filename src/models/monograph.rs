use serde::{Deserialize, Serialize};

/// Reference monograph for a single drug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugMonograph {
    pub generic_name: String,
    pub drug_class: String,
    pub mechanism: String,
    pub indications: Vec<String>,
    pub side_effects: Vec<String>,
    pub pregnancy_category: String,
    pub half_life: String,
    pub metabolism: String,
    pub excretion: String,
}
