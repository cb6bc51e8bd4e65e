use crate::models::Alternative;

const ALTERNATIVES: &[(&str, &[(&str, &str, &str, &str)])] = &[
    (
        "aspirin",
        &[
            ("Clopidogrel", "Plavix", "Antiplatelet", "Cardiovascular protection"),
            (
                "Acetaminophen",
                "Tylenol",
                "Analgesic/Antipyretic",
                "Pain and fever",
            ),
        ],
    ),
    (
        "ibuprofen",
        &[
            (
                "Acetaminophen",
                "Tylenol",
                "Analgesic/Antipyretic",
                "Pain and fever",
            ),
            ("Naproxen", "Aleve", "NSAID", "Pain and inflammation"),
        ],
    ),
    (
        "acetaminophen",
        &[
            ("Ibuprofen", "Advil", "NSAID", "Pain and inflammation"),
            (
                "Aspirin",
                "Bayer",
                "NSAID/Antiplatelet",
                "Pain and cardiovascular protection",
            ),
        ],
    ),
    (
        "amoxicillin",
        &[
            ("Azithromycin", "Zithromax", "Macrolide", "Bacterial infections"),
            ("Doxycycline", "Vibramycin", "Tetracycline", "Bacterial infections"),
        ],
    ),
];

/// Static substitute-medication lookup. Unknown drugs simply have no
/// alternatives — there is no error path.
pub struct AlternativesCatalog;

impl AlternativesCatalog {
    pub fn for_drug(&self, drug: &str) -> Vec<Alternative> {
        let drug = drug.to_lowercase();
        ALTERNATIVES
            .iter()
            .find(|(d, _)| *d == drug)
            .map(|(_, rows)| {
                rows.iter()
                    .map(|(name, brand, class, indication)| Alternative {
                        name: name.to_string(),
                        brand: brand.to_string(),
                        drug_class: class.to_string(),
                        indication: indication.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Just the substitute names, for the dosage workflow's compact listing.
    pub fn names_for(&self, drug: &str) -> Vec<String> {
        self.for_drug(drug).into_iter().map(|a| a.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternatives_for_aspirin() {
        let alts = AlternativesCatalog.for_drug("aspirin");
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[0].name, "Clopidogrel");
        assert_eq!(alts[0].brand, "Plavix");
    }

    #[test]
    fn names_only_listing() {
        assert_eq!(
            AlternativesCatalog.names_for("ibuprofen"),
            vec!["Acetaminophen".to_string(), "Naproxen".to_string()],
        );
    }

    #[test]
    fn unknown_drug_has_no_alternatives() {
        assert!(AlternativesCatalog.for_drug("zzzdrug").is_empty());
        assert!(AlternativesCatalog.for_drug("metformin").is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(!AlternativesCatalog.for_drug("Amoxicillin").is_empty());
    }
}
