use crate::models::{InteractionRecord, PatientContext, Severity};

use super::{DetailedExplanation, EnrichError, EntityRecognizer, Explainer, RawEntity, Translator};

/// Deterministic explanation text builder, used whenever the remote
/// explainer is unconfigured or failing.
pub struct ExplanationTemplates;

impl ExplanationTemplates {
    /// One-sentence, severity-framed explanation of an interaction.
    pub fn patient(interaction: &InteractionRecord) -> String {
        let description = interaction.description.to_lowercase();
        match interaction.severity {
            Severity::High => format!(
                "HIGH RISK: Taking {} and {} together can cause {}. \
                 This is dangerous and you should talk to your doctor immediately.",
                interaction.drug_a, interaction.drug_b, description,
            ),
            Severity::Medium => format!(
                "MEDIUM RISK: Taking {} and {} together may cause {}. \
                 You should check with your doctor before taking them together.",
                interaction.drug_a, interaction.drug_b, description,
            ),
            Severity::Low => format!(
                "LOW RISK: Taking {} and {} together might cause {}. \
                 This is usually safe but watch for any unusual symptoms.",
                interaction.drug_a, interaction.drug_b, description,
            ),
        }
    }

    /// Full three-part fallback for the comprehensive workflow.
    pub fn detailed(interaction: &InteractionRecord) -> DetailedExplanation {
        let severity = interaction.severity.as_str().to_uppercase();
        let analysis = format!(
            "Severity assessment: {severity} RISK\n\
             \n\
             Taking {} and {} together may cause {}. This interaction is \
             classified as {} risk.\n\
             \n\
             Clinical implications:\n\
             - Increased risk of adverse effects\n\
             - Potential for reduced therapeutic efficacy\n\
             - Possible need for dosage adjustments\n\
             - Enhanced monitoring requirements\n\
             \n\
             Recommendations:\n\
             - Consult healthcare provider before combining these medications\n\
             - Monitor for any unusual symptoms\n\
             - Consider alternative medications if possible\n\
             - Regular follow-up with healthcare provider",
            interaction.drug_a,
            interaction.drug_b,
            interaction.description.to_lowercase(),
            interaction.severity,
        );

        DetailedExplanation {
            detailed_analysis: analysis,
            patient_explanation: Self::patient(interaction),
            recommendations: Self::default_recommendations(),
        }
    }

    pub fn default_recommendations() -> Vec<String> {
        vec![
            "Consult healthcare provider".to_string(),
            "Monitor symptoms".to_string(),
            "Consider alternatives".to_string(),
        ]
    }
}

/// `Explainer` backed purely by [`ExplanationTemplates`]. Never fails.
pub struct TemplateExplainer;

impl Explainer for TemplateExplainer {
    fn patient_explanation(&self, interaction: &InteractionRecord) -> Result<String, EnrichError> {
        Ok(ExplanationTemplates::patient(interaction))
    }

    fn detailed_explanation(
        &self,
        interaction: &InteractionRecord,
        _patient: Option<&PatientContext>,
    ) -> Result<DetailedExplanation, EnrichError> {
        Ok(ExplanationTemplates::detailed(interaction))
    }
}

/// `Translator` used when no translation backend is configured — hands the
/// text back untouched so extraction proceeds on the original input.
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str, _source_lang: &str) -> Result<String, EnrichError> {
        Ok(text.to_string())
    }
}

/// `EntityRecognizer` used when no NER backend is configured. Always
/// reports itself unavailable, which routes extraction to the lexicon scan.
pub struct OfflineRecognizer;

impl EntityRecognizer for OfflineRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<RawEntity>, EnrichError> {
        Err(EnrichError::Unconfigured("medical NER"))
    }
}
