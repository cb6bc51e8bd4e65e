use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{AnnotatedInteraction, PatientContext};

use super::{default_language, run_blocking};

#[derive(Deserialize)]
pub struct InteractionCheckRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Accepted but unused here — the interaction-check workflow takes the
    /// simple explanation path, which needs no patient data.
    #[serde(default)]
    pub patient_context: Option<PatientContext>,
}

#[derive(Serialize)]
pub struct InteractionCheckResponse {
    pub success: bool,
    pub drugs_found: Vec<String>,
    pub interactions: Vec<AnnotatedInteraction>,
    pub patient_explanations: Vec<String>,
}

/// `POST /api/interactions/check` — extract drugs from prescription text
/// and report every known pairwise interaction, with an explanation each.
pub async fn check(
    State(ctx): State<ApiContext>,
    Json(payload): Json<InteractionCheckRequest>,
) -> Result<Json<InteractionCheckResponse>, ApiError> {
    let engine = ctx.engine.clone();
    let result =
        run_blocking(move || engine.check_interactions(&payload.text, &payload.language)).await?;

    Ok(Json(InteractionCheckResponse {
        success: true,
        drugs_found: result.drugs_found,
        interactions: result.interactions,
        patient_explanations: result.patient_explanations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_english() {
        let request: InteractionCheckRequest =
            serde_json::from_str(r#"{"text": "aspirin"}"#).unwrap();
        assert_eq!(request.language, "english");
        assert!(request.patient_context.is_none());
    }

    #[test]
    fn patient_context_is_accepted() {
        let request: InteractionCheckRequest = serde_json::from_str(
            r#"{"text": "aspirin", "patient_context": {"age": 50, "diabetes": true}}"#,
        )
        .unwrap();
        assert_eq!(request.patient_context.unwrap().age, Some(50));
    }
}
