use crate::models::{InteractionRecord, Severity};

/// Known pairwise interactions. Stored in one orientation per row; lookup
/// checks both orientations, so `(a, b)` and `(b, a)` resolve identically.
const INTERACTIONS: &[(&str, &str, &str, Severity)] = &[
    (
        "aspirin",
        "ibuprofen",
        "May increase risk of gastrointestinal bleeding",
        Severity::High,
    ),
    ("aspirin", "warfarin", "Increased risk of bleeding", Severity::High),
    ("ibuprofen", "warfarin", "Increased risk of bleeding", Severity::High),
    ("acetaminophen", "alcohol", "May cause liver damage", Severity::Medium),
    (
        "amoxicillin",
        "allopurinol",
        "May increase risk of skin rash",
        Severity::Low,
    ),
    (
        "metformin",
        "insulin",
        "May increase risk of hypoglycemia",
        Severity::Medium,
    ),
    (
        "lisinopril",
        "ibuprofen",
        "May reduce blood pressure lowering effect",
        Severity::Medium,
    ),
    (
        "simvastatin",
        "grapefruit",
        "May increase simvastatin levels",
        Severity::High,
    ),
    (
        "omeprazole",
        "clopidogrel",
        "May reduce clopidogrel effectiveness",
        Severity::Medium,
    ),
    (
        "prednisone",
        "ibuprofen",
        "May increase risk of stomach ulcers",
        Severity::Medium,
    ),
    (
        "albuterol",
        "propranolol",
        "May reduce albuterol effectiveness",
        Severity::Medium,
    ),
    ("warfarin", "aspirin", "Increased risk of bleeding", Severity::High),
    ("clopidogrel", "aspirin", "Increased risk of bleeding", Severity::High),
    (
        "insulin",
        "metformin",
        "May increase risk of hypoglycemia",
        Severity::Medium,
    ),
    (
        "allopurinol",
        "amoxicillin",
        "May increase risk of skin rash",
        Severity::Low,
    ),
    (
        "probenecid",
        "amoxicillin",
        "May increase amoxicillin levels",
        Severity::Low,
    ),
    (
        "amiodarone",
        "simvastatin",
        "May increase risk of muscle damage",
        Severity::High,
    ),
    (
        "propranolol",
        "albuterol",
        "May reduce albuterol effectiveness",
        Severity::Medium,
    ),
    ("iron", "omeprazole", "May reduce iron absorption", Severity::Low),
    (
        "grapefruit",
        "simvastatin",
        "May increase simvastatin levels",
        Severity::High,
    ),
    ("alcohol", "acetaminophen", "May cause liver damage", Severity::Medium),
];

/// Symmetric lookup over the bundled interaction rows.
pub struct InteractionTable;

impl InteractionTable {
    /// Interaction between two canonical drugs, if any.
    ///
    /// The returned record reports the drugs in the caller's order
    /// regardless of how the table row is oriented. First matching row
    /// wins.
    pub fn between(&self, drug_a: &str, drug_b: &str) -> Option<InteractionRecord> {
        let a = drug_a.to_lowercase();
        let b = drug_b.to_lowercase();

        let row = INTERACTIONS
            .iter()
            .find(|(x, y, _, _)| (*x == a && *y == b) || (*x == b && *y == a))?;

        Some(InteractionRecord {
            drug_a: a,
            drug_b: b,
            description: row.2.to_string(),
            severity: row.3,
        })
    }

    /// Sorted, distinct drugs appearing anywhere in the table.
    pub fn known_drugs(&self) -> Vec<String> {
        let mut drugs: Vec<String> = INTERACTIONS
            .iter()
            .flat_map(|(a, b, _, _)| [a.to_string(), b.to_string()])
            .collect();
        drugs.sort();
        drugs.dedup();
        drugs
    }

    pub fn len(&self) -> usize {
        INTERACTIONS.len()
    }

    pub fn is_empty(&self) -> bool {
        INTERACTIONS.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn rows() -> impl Iterator<Item = (&'static str, &'static str)> {
        INTERACTIONS.iter().map(|(a, b, _, _)| (*a, *b))
    }
}
