use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::models::{InteractionRecord, PatientContext};

use super::fallback::ExplanationTemplates;
use super::{DetailedExplanation, EnrichError, EntityRecognizer, Explainer, RawEntity, Translator};

/// Token-classification model used for medical NER.
const MEDICAL_NER_MODEL: &str = "samant/medical-ner";

/// Instruction model used for interaction explanations.
const EXPLANATION_MODEL: &str = "ibm-granite/granite-3.0-8b-instruct";

/// Source language → translation model. Targets are all English.
const TRANSLATION_MODELS: &[(&str, &str)] = &[
    ("spanish", "Helsinki-NLP/opus-mt-es-en"),
    ("french", "Helsinki-NLP/opus-mt-fr-en"),
    ("german", "Helsinki-NLP/opus-mt-de-en"),
    ("italian", "Helsinki-NLP/opus-mt-it-en"),
    ("portuguese", "Helsinki-NLP/opus-mt-pt-en"),
    ("hindi", "Helsinki-NLP/opus-mt-hi-en"),
    ("chinese", "Helsinki-NLP/opus-mt-zh-en"),
    ("japanese", "Helsinki-NLP/opus-mt-ja-en"),
];

// Per-call budgets. No retries — a miss falls straight back to the
// deterministic path.
const NER_TIMEOUT_SECS: u64 = 30;
const TRANSLATION_TIMEOUT_SECS: u64 = 30;
const EXPLANATION_TIMEOUT_SECS: u64 = 60;
const DETAILED_TIMEOUT_SECS: u64 = 90;

/// Source languages the translation table covers, in table order.
pub fn supported_source_languages() -> Vec<&'static str> {
    TRANSLATION_MODELS.iter().map(|(lang, _)| *lang).collect()
}

// ═══════════════════════════════════════════════════════════
// InferenceApiClient
// ═══════════════════════════════════════════════════════════

/// Blocking HTTP client for the hosted inference API.
///
/// One instance is shared by all remote collaborators; each call sets its
/// own timeout. Calls run on blocking worker threads, never on the async
/// executor.
pub struct InferenceApiClient {
    base_url: String,
    hf_token: Option<String>,
    granite_token: Option<String>,
    client: reqwest::blocking::Client,
}

impl InferenceApiClient {
    pub fn new(base_url: &str, hf_token: Option<String>, granite_token: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            hf_token,
            granite_token,
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.inference_base_url,
            config.hf_api_token.clone(),
            config.granite_api_token.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_hf_token(&self) -> bool {
        self.hf_token.is_some()
    }

    pub fn has_granite_token(&self) -> bool {
        self.granite_token.is_some()
    }

    fn hf_token(&self) -> Result<&str, EnrichError> {
        self.hf_token
            .as_deref()
            .ok_or(EnrichError::Unconfigured("hosted inference"))
    }

    fn granite_token(&self) -> Result<&str, EnrichError> {
        self.granite_token
            .as_deref()
            .ok_or(EnrichError::Unconfigured("explanation model"))
    }

    /// POST a JSON payload to a hosted model and decode the response.
    fn post_model<T: DeserializeOwned>(
        &self,
        model: &str,
        token: &str,
        body: &serde_json::Value,
        timeout_secs: u64,
    ) -> Result<T, EnrichError> {
        let url = format!("{}/models/{}", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    EnrichError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    EnrichError::Timeout(timeout_secs)
                } else {
                    EnrichError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EnrichError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| EnrichError::ResponseParsing(e.to_string()))
    }
}

#[derive(Deserialize)]
struct TranslationChunk {
    translation_text: String,
}

#[derive(Deserialize)]
struct GeneratedChunk {
    generated_text: String,
}

// ═══════════════════════════════════════════════════════════
// Remote collaborators
// ═══════════════════════════════════════════════════════════

/// Helsinki-NLP translation via the hosted inference API.
pub struct RemoteTranslator {
    client: Arc<InferenceApiClient>,
}

impl RemoteTranslator {
    pub fn new(client: Arc<InferenceApiClient>) -> Self {
        Self { client }
    }
}

impl Translator for RemoteTranslator {
    fn translate(&self, text: &str, source_lang: &str) -> Result<String, EnrichError> {
        let lang = source_lang.trim().to_lowercase();
        let model = TRANSLATION_MODELS
            .iter()
            .find(|(l, _)| *l == lang)
            .map(|(_, m)| *m)
            .ok_or(EnrichError::UnsupportedLanguage(lang))?;

        let token = self.client.hf_token()?;
        let chunks: Vec<TranslationChunk> = self.client.post_model(
            model,
            token,
            &json!({ "inputs": text }),
            TRANSLATION_TIMEOUT_SECS,
        )?;

        chunks
            .into_iter()
            .next()
            .map(|c| c.translation_text)
            .ok_or_else(|| EnrichError::ResponseParsing("empty translation response".into()))
    }
}

/// Medical NER via the hosted inference API.
pub struct RemoteRecognizer {
    client: Arc<InferenceApiClient>,
}

impl RemoteRecognizer {
    pub fn new(client: Arc<InferenceApiClient>) -> Self {
        Self { client }
    }
}

impl EntityRecognizer for RemoteRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<RawEntity>, EnrichError> {
        let token = self.client.hf_token()?;
        self.client.post_model(
            MEDICAL_NER_MODEL,
            token,
            &json!({ "inputs": text }),
            NER_TIMEOUT_SECS,
        )
    }
}

/// Explanation generation via the hosted instruction model.
///
/// On success the plain-language sentence still comes from the
/// deterministic template — the generated text fills the clinical-analysis
/// slot, and recommendations are pulled out of it line by line.
pub struct RemoteExplainer {
    client: Arc<InferenceApiClient>,
}

impl RemoteExplainer {
    pub fn new(client: Arc<InferenceApiClient>) -> Self {
        Self { client }
    }

    fn generate(
        &self,
        prompt: &str,
        max_new_tokens: u32,
        timeout_secs: u64,
    ) -> Result<String, EnrichError> {
        let token = self.client.granite_token()?;
        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": max_new_tokens,
                "temperature": 0.3,
                "top_p": 0.9,
                "do_sample": true,
            },
        });

        let chunks: Vec<GeneratedChunk> =
            self.client
                .post_model(EXPLANATION_MODEL, token, &body, timeout_secs)?;

        let text = chunks
            .into_iter()
            .next()
            .map(|c| c.generated_text.trim().to_string())
            .ok_or_else(|| EnrichError::ResponseParsing("empty generation response".into()))?;

        if text.is_empty() {
            return Err(EnrichError::ResponseParsing("blank generation response".into()));
        }
        Ok(text)
    }
}

impl Explainer for RemoteExplainer {
    fn patient_explanation(&self, interaction: &InteractionRecord) -> Result<String, EnrichError> {
        let prompt = format!(
            "Explain this drug interaction like I'm a patient: '{}'. \
             Keep it to one simple sentence and mention the main risk. \
             Make it easy to understand without medical jargon.",
            interaction.description,
        );
        self.generate(&prompt, 150, EXPLANATION_TIMEOUT_SECS)
    }

    fn detailed_explanation(
        &self,
        interaction: &InteractionRecord,
        patient: Option<&PatientContext>,
    ) -> Result<DetailedExplanation, EnrichError> {
        let prompt = detailed_prompt(interaction, patient);
        let analysis = self.generate(&prompt, 500, DETAILED_TIMEOUT_SECS)?;
        let recommendations = extract_recommendations(&analysis);

        Ok(DetailedExplanation {
            patient_explanation: ExplanationTemplates::patient(interaction),
            detailed_analysis: analysis,
            recommendations,
        })
    }
}

fn detailed_prompt(interaction: &InteractionRecord, patient: Option<&PatientContext>) -> String {
    let mut context = String::new();
    if let Some(p) = patient {
        let age = p
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let allergies = if p.allergies.is_empty() {
            "none reported".to_string()
        } else {
            p.allergies.join(", ")
        };
        context = format!(
            "\nPatient context:\n\
             - Age: {age}\n\
             - Pregnant: {}\n\
             - Kidney disease: {}\n\
             - Liver disease: {}\n\
             - Known allergies: {allergies}\n",
            p.pregnant, p.kidney_disease, p.liver_disease,
        );
    }

    format!(
        "As a medical AI assistant, provide a comprehensive analysis of this \
         drug interaction:\n\
         \n\
         Drug 1: {}\n\
         Drug 2: {}\n\
         Interaction: {}\n\
         Severity: {}\n\
         {context}\n\
         Provide:\n\
         1. Severity assessment with detailed explanation\n\
         2. Patient-friendly explanation\n\
         3. Clinical implications and risks\n\
         4. Specific recommendations for healthcare providers\n\
         5. Alternative medication suggestions\n\
         6. Monitoring requirements\n\
         \n\
         Format your response with clear sections and bullet points.",
        interaction.drug_a, interaction.drug_b, interaction.description, interaction.severity,
    )
}

/// Pull recommendation-looking lines out of generated analysis text.
/// Capped at five; defaults to the fixed triple when nothing matches.
fn extract_recommendations(analysis: &str) -> Vec<String> {
    let recommendations: Vec<String> = analysis
        .lines()
        .map(str::trim)
        .filter(|line| {
            let lower = line.to_lowercase();
            !line.is_empty()
                && (lower.contains("recommend") || lower.contains("should") || lower.contains("consult"))
        })
        .take(5)
        .map(str::to_string)
        .collect();

    if recommendations.is_empty() {
        ExplanationTemplates::default_recommendations()
    } else {
        recommendations
    }
}

// ═══════════════════════════════════════════════════════════
// Mock collaborators for testing
// ═══════════════════════════════════════════════════════════

/// Translator returning a fixed result.
pub struct MockTranslator {
    result: String,
}

impl MockTranslator {
    pub fn new(result: &str) -> Self {
        Self {
            result: result.to_string(),
        }
    }
}

impl Translator for MockTranslator {
    fn translate(&self, _text: &str, _source_lang: &str) -> Result<String, EnrichError> {
        Ok(self.result.clone())
    }
}

/// Translator that always fails, for exercising the fallback path.
pub struct FailingTranslator;

impl Translator for FailingTranslator {
    fn translate(&self, _text: &str, _source_lang: &str) -> Result<String, EnrichError> {
        Err(EnrichError::Connection("mock translator".into()))
    }
}

/// Recognizer returning fixed entities.
pub struct MockRecognizer {
    entities: Vec<RawEntity>,
}

impl MockRecognizer {
    pub fn new(entities: Vec<RawEntity>) -> Self {
        Self { entities }
    }
}

impl EntityRecognizer for MockRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<RawEntity>, EnrichError> {
        Ok(self.entities.clone())
    }
}

/// Recognizer that always fails, for exercising the lexicon fallback.
pub struct FailingRecognizer;

impl EntityRecognizer for FailingRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<RawEntity>, EnrichError> {
        Err(EnrichError::RemoteStatus {
            status: 503,
            body: "mock recognizer".into(),
        })
    }
}

/// Explainer returning fixed text.
pub struct MockExplainer {
    text: String,
}

impl MockExplainer {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Explainer for MockExplainer {
    fn patient_explanation(&self, _interaction: &InteractionRecord) -> Result<String, EnrichError> {
        Ok(self.text.clone())
    }

    fn detailed_explanation(
        &self,
        _interaction: &InteractionRecord,
        _patient: Option<&PatientContext>,
    ) -> Result<DetailedExplanation, EnrichError> {
        Ok(DetailedExplanation {
            detailed_analysis: self.text.clone(),
            patient_explanation: self.text.clone(),
            recommendations: vec![self.text.clone()],
        })
    }
}

/// Explainer that always times out, for exercising the template fallback.
pub struct FailingExplainer;

impl Explainer for FailingExplainer {
    fn patient_explanation(&self, _interaction: &InteractionRecord) -> Result<String, EnrichError> {
        Err(EnrichError::Timeout(EXPLANATION_TIMEOUT_SECS))
    }

    fn detailed_explanation(
        &self,
        _interaction: &InteractionRecord,
        _patient: Option<&PatientContext>,
    ) -> Result<DetailedExplanation, EnrichError> {
        Err(EnrichError::Timeout(DETAILED_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn interaction() -> InteractionRecord {
        InteractionRecord {
            drug_a: "aspirin".into(),
            drug_b: "warfarin".into(),
            description: "Increased risk of bleeding".into(),
            severity: Severity::High,
        }
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = InferenceApiClient::new("https://example.test/", None, None);
        assert_eq!(client.base_url(), "https://example.test");
    }

    #[test]
    fn client_without_tokens_reports_unconfigured() {
        let client = Arc::new(InferenceApiClient::new("https://example.test", None, None));
        assert!(!client.has_hf_token());
        assert!(!client.has_granite_token());

        let result = RemoteRecognizer::new(client.clone()).recognize("aspirin");
        assert!(matches!(result, Err(EnrichError::Unconfigured(_))));

        let result = RemoteExplainer::new(client).patient_explanation(&interaction());
        assert!(matches!(result, Err(EnrichError::Unconfigured(_))));
    }

    #[test]
    fn translator_rejects_unknown_source_language() {
        let client = Arc::new(InferenceApiClient::new(
            "https://example.test",
            Some("token".into()),
            None,
        ));
        let result = RemoteTranslator::new(client).translate("text", "klingon");
        assert!(matches!(result, Err(EnrichError::UnsupportedLanguage(_))));
    }

    #[test]
    fn supported_languages_cover_translation_table() {
        let languages = supported_source_languages();
        assert_eq!(languages.len(), 8);
        assert!(languages.contains(&"spanish"));
        assert!(languages.contains(&"japanese"));
        assert!(!languages.contains(&"english"));
    }

    #[test]
    fn detailed_prompt_includes_patient_context() {
        let patient = PatientContext {
            age: Some(72),
            pregnant: false,
            kidney_disease: true,
            allergies: vec!["penicillin".into()],
            ..Default::default()
        };
        let prompt = detailed_prompt(&interaction(), Some(&patient));
        assert!(prompt.contains("Age: 72"));
        assert!(prompt.contains("Kidney disease: true"));
        assert!(prompt.contains("penicillin"));
    }

    #[test]
    fn detailed_prompt_without_patient_has_no_context_block() {
        let prompt = detailed_prompt(&interaction(), None);
        assert!(!prompt.contains("Patient context"));
        assert!(prompt.contains("Drug 1: aspirin"));
    }

    #[test]
    fn recommendations_extracted_by_keyword() {
        let analysis = "Overview line.\n\
                        You should monitor INR closely.\n\
                        Consult a pharmacist before combining.\n\
                        Unrelated detail.";
        let recs = extract_recommendations(analysis);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("monitor INR"));
    }

    #[test]
    fn recommendations_default_when_nothing_matches() {
        let recs = extract_recommendations("no guidance here");
        assert_eq!(recs, ExplanationTemplates::default_recommendations());
    }

    #[test]
    fn recommendations_capped_at_five() {
        let analysis = (0..10)
            .map(|i| format!("You should do thing {i}."))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_recommendations(&analysis).len(), 5);
    }

    #[test]
    fn mock_collaborators_behave() {
        assert_eq!(
            MockTranslator::new("translated").translate("x", "spanish").unwrap(),
            "translated",
        );
        assert!(FailingTranslator.translate("x", "spanish").is_err());
        assert!(MockRecognizer::new(vec![]).recognize("x").unwrap().is_empty());
        assert!(FailingRecognizer.recognize("x").is_err());
        assert!(FailingExplainer.patient_explanation(&interaction()).is_err());
    }
}
