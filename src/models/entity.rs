use serde::{Deserialize, Serialize};

/// A drug mention recognized in prescription text.
///
/// `drug_name` is always the canonical lowercase lexicon key, never the
/// synonym or brand name that actually appeared in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub drug_name: String,
    /// Free-form dose as written, e.g. `"500mg"`. `"Standard dosage"` when
    /// no dose pattern matched.
    pub dosage: String,
    /// Normalized frequency, e.g. `"twice daily"` or `"every 6 hours"`.
    /// `"as needed"` when no frequency pattern matched.
    pub frequency: String,
    pub confidence: f64,
}
