use crate::models::DrugMonograph;

struct MonographRow {
    drug: &'static str,
    generic_name: &'static str,
    drug_class: &'static str,
    mechanism: &'static str,
    indications: &'static [&'static str],
    side_effects: &'static [&'static str],
    pregnancy_category: &'static str,
    half_life: &'static str,
    metabolism: &'static str,
    excretion: &'static str,
}

const MONOGRAPHS: &[MonographRow] = &[
    MonographRow {
        drug: "aspirin",
        generic_name: "Acetylsalicylic Acid",
        drug_class: "Nonsteroidal Anti-inflammatory Drug (NSAID)",
        mechanism: "Inhibits cyclooxygenase enzymes, reducing prostaglandin synthesis",
        indications: &["Pain relief", "Fever reduction", "Cardiovascular protection"],
        side_effects: &["GI irritation", "Bleeding risk", "Reye syndrome in children"],
        pregnancy_category: "C",
        half_life: "2-3 hours",
        metabolism: "Hepatic",
        excretion: "Renal",
    },
    MonographRow {
        drug: "ibuprofen",
        generic_name: "Ibuprofen",
        drug_class: "Nonsteroidal Anti-inflammatory Drug (NSAID)",
        mechanism: "Inhibits cyclooxygenase-1 and cyclooxygenase-2",
        indications: &["Pain relief", "Inflammation reduction", "Fever"],
        side_effects: &["GI irritation", "Renal impairment", "Cardiovascular risk"],
        pregnancy_category: "C",
        half_life: "2-4 hours",
        metabolism: "Hepatic",
        excretion: "Renal",
    },
];

/// Reference monograph lookup. Covers only the drugs the bundled data set
/// documents in depth.
pub struct MonographLibrary;

impl MonographLibrary {
    pub fn monograph(&self, drug: &str) -> Option<DrugMonograph> {
        let drug = drug.to_lowercase();
        MONOGRAPHS.iter().find(|m| m.drug == drug).map(|m| DrugMonograph {
            generic_name: m.generic_name.to_string(),
            drug_class: m.drug_class.to_string(),
            mechanism: m.mechanism.to_string(),
            indications: m.indications.iter().map(|s| s.to_string()).collect(),
            side_effects: m.side_effects.iter().map(|s| s.to_string()).collect(),
            pregnancy_category: m.pregnancy_category.to_string(),
            half_life: m.half_life.to_string(),
            metabolism: m.metabolism.to_string(),
            excretion: m.excretion.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspirin_monograph() {
        let m = MonographLibrary.monograph("aspirin").unwrap();
        assert_eq!(m.generic_name, "Acetylsalicylic Acid");
        assert_eq!(m.indications.len(), 3);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(MonographLibrary.monograph("Ibuprofen").is_some());
    }

    #[test]
    fn uncovered_drug_has_no_monograph() {
        assert!(MonographLibrary.monograph("metformin").is_none());
    }
}
