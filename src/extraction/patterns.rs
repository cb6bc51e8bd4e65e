use regex::{Regex, RegexBuilder};

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("bundled extraction pattern must compile")
}

// ---------------------------------------------------------------------------
// Dose patterns
// ---------------------------------------------------------------------------

/// Ordered dose patterns. The first pattern with a match wins; the rendered
/// dose is `"{number}{unit}"` from its first two captures.
pub struct DosePatterns {
    patterns: Vec<Regex>,
}

impl DosePatterns {
    pub fn standard() -> Self {
        let patterns = vec![
            case_insensitive(r"(\d+(?:\.\d+)?)\s*(mg|g|mcg|ml|units)"),
            case_insensitive(r"(\d+(?:\.\d+)?)\s*(milligram|gram|microgram|milliliter)"),
            case_insensitive(r"(\d+(?:\.\d+)?)\s*(mg|g|mcg|ml|units)\s*(tablet|capsule|pill|dose)"),
        ];
        Self { patterns }
    }

    /// First dose mentioned anywhere in `text`, if any.
    pub fn first_match(&self, text: &str) -> Option<String> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(text) {
                let amount = caps.get(1)?.as_str();
                let unit = caps.get(2)?.as_str();
                return Some(format!("{amount}{unit}"));
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Frequency patterns
// ---------------------------------------------------------------------------

/// Ordered frequency patterns mapping free-form schedules (including the
/// bid/tid/qid/qd abbreviations) to a normalized phrase. `{}` in a template
/// is replaced with the pattern's first capture.
pub struct FrequencyPatterns {
    patterns: Vec<(Regex, &'static str)>,
}

impl FrequencyPatterns {
    pub fn standard() -> Self {
        let patterns = vec![
            (case_insensitive(r"twice\s*daily|bid|b\.i\.d"), "twice daily"),
            (
                case_insensitive(r"three\s*times\s*daily|tid|t\.i\.d"),
                "three times daily",
            ),
            (
                case_insensitive(r"four\s*times\s*daily|qid|q\.i\.d"),
                "four times daily",
            ),
            (case_insensitive(r"once\s*daily|qd|q\.d"), "once daily"),
            (case_insensitive(r"every\s*(\d+)\s*hours?"), "every {} hours"),
            (case_insensitive(r"every\s*(\d+)\s*days?"), "every {} days"),
        ];
        Self { patterns }
    }

    /// First frequency mentioned anywhere in `text`, normalized.
    pub fn first_match(&self, text: &str) -> Option<String> {
        for (pattern, template) in &self.patterns {
            if let Some(caps) = pattern.captures(text) {
                let rendered = match caps.get(1) {
                    Some(n) => template.replacen("{}", n.as_str(), 1),
                    None => (*template).to_string(),
                };
                return Some(rendered);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dose_simple_unit() {
        let doses = DosePatterns::standard();
        assert_eq!(doses.first_match("take 500mg now"), Some("500mg".into()));
        assert_eq!(doses.first_match("take 2.5 ml"), Some("2.5ml".into()));
    }

    #[test]
    fn dose_word_unit() {
        let doses = DosePatterns::standard();
        assert_eq!(
            doses.first_match("take 500 milligram doses"),
            Some("500milligram".into()),
        );
    }

    #[test]
    fn dose_first_mention_wins() {
        let doses = DosePatterns::standard();
        assert_eq!(
            doses.first_match("aspirin 500mg and ibuprofen 400mg"),
            Some("500mg".into()),
        );
    }

    #[test]
    fn dose_absent() {
        assert_eq!(DosePatterns::standard().first_match("take as directed"), None);
    }

    #[test]
    fn frequency_fixed_phrases() {
        let freq = FrequencyPatterns::standard();
        assert_eq!(freq.first_match("twice daily with food"), Some("twice daily".into()));
        assert_eq!(freq.first_match("500mg TID"), Some("three times daily".into()));
        assert_eq!(freq.first_match("one tablet q.d"), Some("once daily".into()));
    }

    #[test]
    fn frequency_interval_substitution() {
        let freq = FrequencyPatterns::standard();
        assert_eq!(freq.first_match("every 6 hours"), Some("every 6 hours".into()));
        assert_eq!(freq.first_match("Every 3 days"), Some("every 3 days".into()));
    }

    #[test]
    fn frequency_order_prefers_earlier_pattern() {
        let freq = FrequencyPatterns::standard();
        // "twice daily" appears later in the text but earlier in the
        // pattern list than the every-N form.
        assert_eq!(
            freq.first_match("every 8 hours or twice daily"),
            Some("twice daily".into()),
        );
    }

    #[test]
    fn frequency_absent() {
        assert_eq!(FrequencyPatterns::standard().first_match("with breakfast"), None);
    }
}
