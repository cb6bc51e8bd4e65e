use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

const FEATURES: &[&str] = &[
    "Drug interaction detection",
    "Age-specific dosage recommendations",
    "Alternative medication suggestions",
    "Prescription text extraction",
    "Multi-language input",
    "Document upload analysis",
    "Explainable interaction analysis",
    "PDF report generation",
];

/// `GET /api/health` — service liveness and capability listing.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: config::APP_NAME,
        version: config::APP_VERSION,
        features: FEATURES,
    })
}
