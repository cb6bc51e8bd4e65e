//! Best-effort enrichment collaborators: translation, remote medical NER,
//! and natural-language explanation generation.
//!
//! Every collaborator sits behind a trait with two implementations — a
//! remote hosted-inference client and a deterministic local fallback —
//! selected by configuration at startup. Callers treat any error as a
//! signal to fall back; enrichment failures never abort a workflow.

pub mod fallback;
pub mod remote;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{InteractionRecord, PatientContext};

pub use fallback::{ExplanationTemplates, OfflineRecognizer, PassthroughTranslator, TemplateExplainer};
pub use remote::{InferenceApiClient, RemoteExplainer, RemoteRecognizer, RemoteTranslator};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from enrichment collaborators. All of them are recoverable: the
/// caller logs and falls back to the deterministic path.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("No API token configured for {0}")]
    Unconfigured(&'static str),

    #[error("No translation model for source language: {0}")]
    UnsupportedLanguage(String),

    #[error("Connection to {0} failed")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Remote service returned HTTP {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Failed to parse remote response: {0}")]
    ResponseParsing(String),
}

// ---------------------------------------------------------------------------
// Collaborator payloads
// ---------------------------------------------------------------------------

/// One span from the remote token-classification model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntity {
    pub entity_group: String,
    pub word: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

/// Three-part explanation produced for the comprehensive workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedExplanation {
    pub detailed_analysis: String,
    pub patient_explanation: String,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Translates prescription text into English before extraction.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, source_lang: &str) -> Result<String, EnrichError>;
}

/// Remote medical NER. Its output is an enrichment hint; the lexicon scan
/// stays authoritative whether or not this succeeds.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<RawEntity>, EnrichError>;
}

/// Produces natural-language explanations for resolved interactions.
pub trait Explainer: Send + Sync {
    /// One plain-language sentence for the interaction-check workflow.
    fn patient_explanation(&self, interaction: &InteractionRecord) -> Result<String, EnrichError>;

    /// Clinical analysis + plain-language summary + recommendations for the
    /// comprehensive workflow.
    fn detailed_explanation(
        &self,
        interaction: &InteractionRecord,
        patient: Option<&PatientContext>,
    ) -> Result<DetailedExplanation, EnrichError>;
}
