use serde::{Deserialize, Serialize};

/// A candidate substitute medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub brand: String,
    #[serde(rename = "class")]
    pub drug_class: String,
    pub indication: String,
}
