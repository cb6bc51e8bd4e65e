use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dosage::DosageRecommendation;
use super::enums::Severity;
use super::interaction::AnnotatedInteraction;

/// Severity-count rollup over a comprehensive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_drugs: usize,
    pub total_interactions: usize,
    pub high_risk_interactions: usize,
    pub medium_risk_interactions: usize,
    pub low_risk_interactions: usize,
    pub patient_age: u32,
    /// RFC 3339, UTC.
    pub analysis_timestamp: String,
}

impl AnalysisSummary {
    /// Build a summary from the resolved interactions.
    pub fn tally(
        drugs_found: &[String],
        interactions: &[AnnotatedInteraction],
        patient_age: u32,
        timestamp: String,
    ) -> Self {
        let count = |severity: Severity| {
            interactions
                .iter()
                .filter(|i| i.interaction.severity == severity)
                .count()
        };

        Self {
            total_drugs: drugs_found.len(),
            total_interactions: interactions.len(),
            high_risk_interactions: count(Severity::High),
            medium_risk_interactions: count(Severity::Medium),
            low_risk_interactions: count(Severity::Low),
            patient_age,
            analysis_timestamp: timestamp,
        }
    }
}

/// Result of the interaction-only workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionAnalysis {
    pub drugs_found: Vec<String>,
    pub interactions: Vec<AnnotatedInteraction>,
    pub patient_explanations: Vec<String>,
}

/// Result of the dosage-only workflow: one entry per extracted drug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageAnalysis {
    pub results: Vec<DosageRecommendation>,
}

/// Result of the comprehensive workflow. Also the input to the PDF report
/// renderer, so it round-trips through serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub report_id: Uuid,
    /// Canonical names in first-match order.
    pub drugs_found: Vec<String>,
    pub interactions: Vec<AnnotatedInteraction>,
    pub dosage_results: Vec<DosageRecommendation>,
    pub patient_explanations: Vec<String>,
    pub summary: AnalysisSummary,
}

/// Metadata for an analyzed upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Result of the document workflow: the comprehensive report plus the text
/// the document collaborator extracted and the upload's metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub original_text: String,
    pub file_info: FileInfo,
    #[serde(flatten)]
    pub report: AnalysisReport,
}
