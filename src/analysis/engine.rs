use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::document;
use crate::enrich::{
    DetailedExplanation, EntityRecognizer, ExplanationTemplates, Explainer, InferenceApiClient,
    OfflineRecognizer, PassthroughTranslator, RemoteExplainer, RemoteRecognizer, RemoteTranslator,
    TemplateExplainer, Translator,
};
use crate::extraction::EntityExtractor;
use crate::models::{
    AnalysisReport, AnalysisSummary, AnnotatedInteraction, DocumentAnalysis, DosageAnalysis,
    InteractionAnalysis, InteractionRecord, PatientContext, RenalFunction,
};
use crate::reference::ReferenceData;

use super::{dosage, interactions, AnalysisError};

/// Orchestrates extraction, interaction resolution, dosage guidance, and
/// explanation enrichment into the boundary workflows.
///
/// All state is read-only after construction, so one engine serves
/// concurrent requests without coordination.
pub struct AnalysisEngine {
    reference: Arc<ReferenceData>,
    extractor: EntityExtractor,
    explainer: Arc<dyn Explainer>,
}

impl AnalysisEngine {
    pub fn new(
        reference: Arc<ReferenceData>,
        translator: Arc<dyn Translator>,
        recognizer: Arc<dyn EntityRecognizer>,
        explainer: Arc<dyn Explainer>,
    ) -> Self {
        let extractor = EntityExtractor::new(reference.clone(), translator, recognizer);
        Self {
            reference,
            extractor,
            explainer,
        }
    }

    /// Wire up collaborators from configuration: remote implementations
    /// where tokens are present, deterministic fallbacks otherwise.
    pub fn from_config(config: &Config) -> Self {
        let client = Arc::new(InferenceApiClient::from_config(config));
        let remote_ner = client.has_hf_token();
        let remote_explanations = client.has_granite_token();

        let translator: Arc<dyn Translator> = if remote_ner {
            Arc::new(RemoteTranslator::new(client.clone()))
        } else {
            Arc::new(PassthroughTranslator)
        };
        let recognizer: Arc<dyn EntityRecognizer> = if remote_ner {
            Arc::new(RemoteRecognizer::new(client.clone()))
        } else {
            Arc::new(OfflineRecognizer)
        };
        let explainer: Arc<dyn Explainer> = if remote_explanations {
            Arc::new(RemoteExplainer::new(client))
        } else {
            Arc::new(TemplateExplainer)
        };

        tracing::info!(remote_ner, remote_explanations, "analysis engine initialized");
        Self::new(
            Arc::new(ReferenceData::standard()),
            translator,
            recognizer,
            explainer,
        )
    }

    /// Engine with no remote collaborators at all — deterministic paths
    /// only.
    pub fn offline() -> Self {
        Self::new(
            Arc::new(ReferenceData::standard()),
            Arc::new(PassthroughTranslator),
            Arc::new(OfflineRecognizer),
            Arc::new(TemplateExplainer),
        )
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    // ── Workflows ───────────────────────────────────────────

    /// Extract drugs and resolve their pairwise interactions, each with a
    /// plain-language explanation.
    pub fn check_interactions(
        &self,
        text: &str,
        language: &str,
    ) -> Result<InteractionAnalysis, AnalysisError> {
        let drugs = self.extract_drugs(text, language)?;
        let records = interactions::resolve(&self.reference.interactions, &drugs);

        let mut annotated = Vec::with_capacity(records.len());
        let mut patient_explanations = Vec::with_capacity(records.len());
        for record in records {
            let explanation = self.explain(&record);
            patient_explanations.push(explanation.clone());
            annotated.push(AnnotatedInteraction {
                interaction: record,
                ai_analysis: explanation,
                patient_explanation: None,
            });
        }

        tracing::info!(
            drugs = drugs.len(),
            interactions = annotated.len(),
            "interaction check complete"
        );

        Ok(InteractionAnalysis {
            drugs_found: drugs,
            interactions: annotated,
            patient_explanations,
        })
    }

    /// Extract drugs and produce one dosage recommendation (plus substitute
    /// names) per drug.
    pub fn check_dosage(
        &self,
        text: &str,
        language: &str,
        age: u32,
        weight: Option<f64>,
        renal_function: RenalFunction,
    ) -> Result<DosageAnalysis, AnalysisError> {
        let drugs = self.extract_drugs(text, language)?;
        let results = drugs
            .iter()
            .map(|drug| self.recommendation_for(drug, age, weight, renal_function))
            .collect();

        tracing::info!(drugs = drugs.len(), "dosage check complete");
        Ok(DosageAnalysis { results })
    }

    /// Interactions and dosage guidance in one pass, with detailed
    /// explanations and a severity-count summary.
    pub fn comprehensive(
        &self,
        text: &str,
        language: &str,
        age: u32,
        weight: Option<f64>,
        renal_function: RenalFunction,
        patient: Option<&PatientContext>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let drugs = self.extract_drugs(text, language)?;
        let records = interactions::resolve(&self.reference.interactions, &drugs);

        let mut annotated = Vec::with_capacity(records.len());
        let mut patient_explanations = Vec::with_capacity(records.len());
        for record in records {
            let detail = self.explain_detailed(&record, patient);
            patient_explanations.push(detail.patient_explanation.clone());
            annotated.push(AnnotatedInteraction {
                interaction: record,
                ai_analysis: detail.detailed_analysis,
                patient_explanation: Some(detail.patient_explanation),
            });
        }

        let dosage_results = drugs
            .iter()
            .map(|drug| self.recommendation_for(drug, age, weight, renal_function))
            .collect();

        let summary =
            AnalysisSummary::tally(&drugs, &annotated, age, Utc::now().to_rfc3339());

        tracing::info!(
            drugs = summary.total_drugs,
            interactions = summary.total_interactions,
            high_risk = summary.high_risk_interactions,
            "comprehensive analysis complete"
        );

        Ok(AnalysisReport {
            report_id: Uuid::new_v4(),
            drugs_found: drugs,
            interactions: annotated,
            dosage_results,
            patient_explanations,
            summary,
        })
    }

    /// Validate an upload, extract its text, and run the comprehensive
    /// pipeline over it. Extraction failure is fatal to this call — there
    /// is nothing to analyze.
    #[allow(clippy::too_many_arguments)]
    pub fn analyze_document(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
        filename: &str,
        age: u32,
        weight: Option<f64>,
        renal_function: RenalFunction,
        language: &str,
    ) -> Result<DocumentAnalysis, AnalysisError> {
        let (kind, file_info) = document::validate(bytes, content_type, filename)?;
        let text = document::extract_text(kind, bytes)?;

        tracing::info!(
            file = %file_info.name,
            kind = ?kind,
            chars = text.len(),
            "document text extracted"
        );

        let report = self.comprehensive(&text, language, age, weight, renal_function, None)?;

        Ok(DocumentAnalysis {
            original_text: text,
            file_info,
            report,
        })
    }

    // ── Internal ────────────────────────────────────────────

    fn extract_drugs(&self, text: &str, language: &str) -> Result<Vec<String>, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(self
            .extractor
            .extract(text, language)
            .into_iter()
            .map(|e| e.drug_name)
            .collect())
    }

    fn recommendation_for(
        &self,
        drug: &str,
        age: u32,
        weight: Option<f64>,
        renal_function: RenalFunction,
    ) -> crate::models::DosageRecommendation {
        let mut recommendation =
            dosage::recommend(&self.reference.dosing, drug, age, weight, renal_function);
        recommendation.alternatives = self.reference.alternatives.names_for(drug);
        recommendation
    }

    fn explain(&self, record: &InteractionRecord) -> String {
        match self.explainer.patient_explanation(record) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "explanation generation failed, using template");
                ExplanationTemplates::patient(record)
            }
        }
    }

    fn explain_detailed(
        &self,
        record: &InteractionRecord,
        patient: Option<&PatientContext>,
    ) -> DetailedExplanation {
        match self.explainer.detailed_explanation(record, patient) {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(error = %e, "detailed explanation failed, using template");
                ExplanationTemplates::detailed(record)
            }
        }
    }
}
