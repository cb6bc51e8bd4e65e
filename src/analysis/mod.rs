//! The analysis core: interaction resolution, dosage guidance, and the
//! engine that composes them with extraction and enrichment.

pub mod dosage;
pub mod engine;
pub mod interactions;

use thiserror::Error;

use crate::document::DocumentError;

pub use engine::AnalysisEngine;

/// Failures a workflow can reject a request with. Enrichment problems are
/// not represented here — they degrade to deterministic fallbacks inside
/// the engine and never surface to the caller.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No prescription text provided")]
    EmptyInput,

    #[error(transparent)]
    Document(#[from] DocumentError),
}
