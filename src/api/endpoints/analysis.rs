use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{AnalysisReport, PatientContext, RenalFunction};

use super::{default_language, run_blocking};

#[derive(Deserialize)]
pub struct ComprehensiveRequest {
    pub text: String,
    pub age: u32,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub renal_function: RenalFunction,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub patient_context: Option<PatientContext>,
}

#[derive(Serialize)]
pub struct ComprehensiveResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// `POST /api/analysis/comprehensive` — interactions, dosage guidance,
/// detailed explanations, and a severity summary in one call.
pub async fn comprehensive(
    State(ctx): State<ApiContext>,
    Json(payload): Json<ComprehensiveRequest>,
) -> Result<Json<ComprehensiveResponse>, ApiError> {
    let engine = ctx.engine.clone();
    let report = run_blocking(move || {
        engine.comprehensive(
            &payload.text,
            &payload.language,
            payload.age,
            payload.weight,
            payload.renal_function,
            payload.patient_context.as_ref(),
        )
    })
    .await?;

    Ok(Json(ComprehensiveResponse {
        success: true,
        report,
    }))
}
