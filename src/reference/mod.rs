//! Immutable reference data built once at startup: the drug lexicon, the
//! interaction table, the dosing table, substitute medications, and drug
//! monographs. Nothing here mutates after construction, so a single
//! instance is shared across requests without coordination.

pub mod alternatives;
pub mod dosing;
pub mod interactions;
pub mod lexicon;
pub mod monographs;

pub use alternatives::AlternativesCatalog;
pub use dosing::{DosageProfile, DosingTable};
pub use interactions::InteractionTable;
pub use lexicon::DrugLexicon;
pub use monographs::MonographLibrary;

/// All reference tables bundled behind one handle.
pub struct ReferenceData {
    pub lexicon: DrugLexicon,
    pub interactions: InteractionTable,
    pub dosing: DosingTable,
    pub alternatives: AlternativesCatalog,
    pub monographs: MonographLibrary,
}

impl ReferenceData {
    /// Build the bundled data set (compiles the lexicon patterns).
    pub fn standard() -> Self {
        Self {
            lexicon: DrugLexicon::standard(),
            interactions: InteractionTable,
            dosing: DosingTable,
            alternatives: AlternativesCatalog,
            monographs: MonographLibrary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_and_interaction_table_agree_on_vocabulary() {
        let reference = ReferenceData::standard();
        for drug in reference.interactions.known_drugs() {
            assert!(
                reference.lexicon.contains(&drug),
                "interaction table drug {drug} missing from lexicon",
            );
        }
    }

    #[test]
    fn dosing_table_covers_lexicon_subset() {
        let reference = ReferenceData::standard();
        assert!(reference.dosing.covers("aspirin"));
        assert!(reference.lexicon.contains("aspirin"));
        // Most lexicon drugs have interactions but no dosing rows.
        assert!(!reference.dosing.covers("grapefruit"));
    }
}
