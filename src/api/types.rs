//! Shared state for the API layer.

use std::sync::Arc;

use crate::analysis::AnalysisEngine;

/// Shared context for all API routes. The engine is fully read-only, so
/// cloning the context per request is just an `Arc` bump.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<AnalysisEngine>,
}

impl ApiContext {
    pub fn new(engine: Arc<AnalysisEngine>) -> Self {
        Self { engine }
    }
}
