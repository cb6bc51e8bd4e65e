use regex::Regex;

/// Recognition patterns per canonical drug: lowercase alternations of the
/// generic name, common brands, and abbreviations.
///
/// Declaration order is load-bearing — extraction reports drugs in this
/// order, so callers see a deterministic `drugs_found` sequence.
const DRUG_PATTERNS: &[(&str, &str)] = &[
    ("aspirin", "aspirin|acetylsalicylic acid|asa"),
    ("ibuprofen", "ibuprofen|advil|motrin|brufen"),
    ("acetaminophen", "acetaminophen|paracetamol|tylenol|panadol"),
    ("amoxicillin", "amoxicillin|amoxil|trimox"),
    ("metformin", "metformin|glucophage"),
    ("lisinopril", "lisinopril|zestril|prinivil"),
    ("simvastatin", "simvastatin|zocor"),
    ("omeprazole", "omeprazole|prilosec|losec"),
    ("prednisone", "prednisone|deltasone"),
    ("albuterol", "albuterol|proventil|ventolin"),
    ("warfarin", "warfarin|coumadin"),
    ("clopidogrel", "clopidogrel|plavix"),
    ("insulin", "insulin|humulin|novolin"),
    ("allopurinol", "allopurinol|zyloprim"),
    ("probenecid", "probenecid|benemid"),
    ("amiodarone", "amiodarone|cordarone"),
    ("propranolol", "propranolol|inderal"),
    ("iron", "iron|ferrous|ferric"),
    ("grapefruit", "grapefruit|citrus"),
    ("alcohol", "alcohol|ethanol|drinking"),
];

struct LexiconEntry {
    canonical: &'static str,
    pattern: Regex,
}

/// Closed-vocabulary drug recognizer.
///
/// Drugs outside this lexicon are never extracted, even if a real drug name
/// appears in the input.
pub struct DrugLexicon {
    entries: Vec<LexiconEntry>,
}

impl DrugLexicon {
    /// Build the lexicon from the bundled pattern set.
    pub fn standard() -> Self {
        let entries = DRUG_PATTERNS
            .iter()
            .map(|(canonical, pattern)| LexiconEntry {
                canonical,
                pattern: Regex::new(pattern).expect("bundled drug pattern must compile"),
            })
            .collect();
        Self { entries }
    }

    /// Canonical names whose pattern matches somewhere in `text`.
    ///
    /// Matching is case-insensitive (the text is lowercased first) and
    /// yields each canonical name at most once, in lexicon order.
    pub fn scan(&self, text: &str) -> Vec<&'static str> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.pattern.is_match(&lowered))
            .map(|e| e.canonical)
            .collect()
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.entries.iter().any(|e| e.canonical == canonical)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_canonical_name() {
        let lexicon = DrugLexicon::standard();
        assert_eq!(lexicon.scan("take aspirin daily"), vec!["aspirin"]);
    }

    #[test]
    fn recognizes_brand_synonym_as_canonical() {
        let lexicon = DrugLexicon::standard();
        assert_eq!(lexicon.scan("Tylenol 500mg"), vec!["acetaminophen"]);
        assert_eq!(lexicon.scan("COUMADIN 5mg"), vec!["warfarin"]);
    }

    #[test]
    fn multiple_synonyms_of_one_drug_yield_one_name() {
        let lexicon = DrugLexicon::standard();
        let found = lexicon.scan("aspirin, also sold as ASA");
        assert_eq!(found, vec!["aspirin"]);
    }

    #[test]
    fn scan_order_follows_lexicon_order() {
        let lexicon = DrugLexicon::standard();
        // Warfarin appears before aspirin in the text but after it in the
        // lexicon; output order is lexicon order.
        let found = lexicon.scan("warfarin with aspirin");
        assert_eq!(found, vec!["aspirin", "warfarin"]);
    }

    #[test]
    fn unknown_drug_is_not_recognized() {
        let lexicon = DrugLexicon::standard();
        assert!(lexicon.scan("take zzzdrug twice daily").is_empty());
    }

    #[test]
    fn lexicon_covers_bundled_set() {
        let lexicon = DrugLexicon::standard();
        assert_eq!(lexicon.len(), 20);
        assert!(lexicon.contains("metformin"));
        assert!(!lexicon.contains("naproxen"));
    }
}
