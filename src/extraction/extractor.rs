use std::sync::Arc;

use crate::enrich::{EntityRecognizer, Translator};
use crate::models::ExtractedEntity;
use crate::reference::ReferenceData;

use super::patterns::{DosePatterns, FrequencyPatterns};

/// Confidence assigned to lexicon matches.
const LEXICON_CONFIDENCE: f64 = 0.95;

/// Turns free-form prescription text into canonical drug entities.
///
/// Translation and remote NER are best-effort collaborators: a failure in
/// either leaves a deterministic path that always produces the same
/// entities for the same input.
pub struct EntityExtractor {
    reference: Arc<ReferenceData>,
    translator: Arc<dyn Translator>,
    recognizer: Arc<dyn EntityRecognizer>,
    doses: DosePatterns,
    frequencies: FrequencyPatterns,
}

impl EntityExtractor {
    pub fn new(
        reference: Arc<ReferenceData>,
        translator: Arc<dyn Translator>,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> Self {
        Self {
            reference,
            translator,
            recognizer,
            doses: DosePatterns::standard(),
            frequencies: FrequencyPatterns::standard(),
        }
    }

    /// Extract drug entities from `text`.
    ///
    /// Non-English input is translated first; if translation fails the
    /// original text is used as-is. The remote recognizer's output is a
    /// hint only — the lexicon scan decides which entities exist, so the
    /// result is identical whether or not the remote call succeeds.
    pub fn extract(&self, text: &str, language: &str) -> Vec<ExtractedEntity> {
        let text = self.translated(text, language);

        match self.recognizer.recognize(&text) {
            Ok(hints) => {
                tracing::debug!(hints = hints.len(), "remote NER returned entity hints");
            }
            Err(e) => {
                tracing::debug!(error = %e, "remote NER unavailable, using lexicon scan");
            }
        }

        self.lexicon_scan(&text)
    }

    fn translated(&self, text: &str, language: &str) -> String {
        let language = language.trim();
        if language.is_empty() || language.eq_ignore_ascii_case("english") {
            return text.to_string();
        }

        match self.translator.translate(text, language) {
            Ok(translated) => {
                tracing::debug!(language, "prescription text translated");
                translated
            }
            Err(e) => {
                tracing::warn!(error = %e, language, "translation unavailable, analyzing original text");
                text.to_string()
            }
        }
    }

    /// Deterministic extraction: one entity per lexicon drug whose pattern
    /// matches, with the first dose and frequency found in the text.
    fn lexicon_scan(&self, text: &str) -> Vec<ExtractedEntity> {
        let dosage = self
            .doses
            .first_match(text)
            .unwrap_or_else(|| "Standard dosage".to_string());
        let frequency = self
            .frequencies
            .first_match(text)
            .unwrap_or_else(|| "as needed".to_string());

        self.reference
            .lexicon
            .scan(text)
            .into_iter()
            .map(|canonical| ExtractedEntity {
                drug_name: canonical.to_string(),
                dosage: dosage.clone(),
                frequency: frequency.clone(),
                confidence: LEXICON_CONFIDENCE,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::remote::{FailingRecognizer, FailingTranslator, MockRecognizer, MockTranslator};
    use crate::enrich::{PassthroughTranslator, RawEntity};

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(
            Arc::new(ReferenceData::standard()),
            Arc::new(PassthroughTranslator),
            Arc::new(FailingRecognizer),
        )
    }

    #[test]
    fn extracts_drugs_with_dose_and_frequency() {
        let entities = extractor().extract(
            "Take aspirin 500mg twice daily and ibuprofen 400mg for pain relief",
            "english",
        );

        let names: Vec<&str> = entities.iter().map(|e| e.drug_name.as_str()).collect();
        assert_eq!(names, vec!["aspirin", "ibuprofen"]);
        assert_eq!(entities[0].dosage, "500mg");
        assert_eq!(entities[0].frequency, "twice daily");
        assert_eq!(entities[0].confidence, 0.95);
    }

    #[test]
    fn defaults_apply_when_no_dose_or_frequency() {
        let entities = extractor().extract("some metformin with breakfast", "english");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].dosage, "Standard dosage");
        assert_eq!(entities[0].frequency, "as needed");
    }

    #[test]
    fn synonyms_collapse_to_one_entity() {
        let entities = extractor().extract("aspirin, sometimes labeled ASA", "english");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].drug_name, "aspirin");
    }

    #[test]
    fn extraction_is_idempotent() {
        let ex = extractor();
        let text = "warfarin 5mg once daily with aspirin 81mg";
        assert_eq!(ex.extract(text, "english"), ex.extract(text, "english"));
    }

    #[test]
    fn unknown_drugs_are_never_emitted() {
        assert!(extractor().extract("take zzzdrug 10mg daily", "english").is_empty());
    }

    #[test]
    fn translation_failure_falls_back_to_original_text() {
        let ex = EntityExtractor::new(
            Arc::new(ReferenceData::standard()),
            Arc::new(FailingTranslator),
            Arc::new(FailingRecognizer),
        );
        // The untranslated text still contains a recognizable name.
        let entities = ex.extract("tomar aspirina 100mg", "spanish");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].drug_name, "aspirin");
    }

    #[test]
    fn translated_text_is_scanned() {
        let ex = EntityExtractor::new(
            Arc::new(ReferenceData::standard()),
            Arc::new(MockTranslator::new("take ibuprofen 200mg twice daily")),
            Arc::new(FailingRecognizer),
        );
        let entities = ex.extract("texto original", "spanish");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].drug_name, "ibuprofen");
        assert_eq!(entities[0].frequency, "twice daily");
    }

    #[test]
    fn english_input_skips_translation() {
        let ex = EntityExtractor::new(
            Arc::new(ReferenceData::standard()),
            // Would rewrite the text if it were consulted.
            Arc::new(MockTranslator::new("nothing here")),
            Arc::new(FailingRecognizer),
        );
        let entities = ex.extract("aspirin 100mg", "english");
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn recognizer_hints_do_not_change_the_result() {
        let hints = vec![RawEntity {
            entity_group: "DRUG".into(),
            word: "naproxen".into(),
            score: 0.99,
            start: None,
            end: None,
        }];
        let with_hints = EntityExtractor::new(
            Arc::new(ReferenceData::standard()),
            Arc::new(PassthroughTranslator),
            Arc::new(MockRecognizer::new(hints)),
        );

        let text = "aspirin 500mg twice daily";
        assert_eq!(
            with_hints.extract(text, "english"),
            extractor().extract(text, "english"),
        );
    }
}
