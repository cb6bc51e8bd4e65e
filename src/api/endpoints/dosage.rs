use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{DosageRecommendation, RenalFunction};

use super::{default_language, run_blocking};

#[derive(Deserialize)]
pub struct DosageCheckRequest {
    pub text: String,
    pub age: u32,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub renal_function: RenalFunction,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Serialize)]
pub struct DosageCheckResponse {
    pub success: bool,
    pub results: Vec<DosageRecommendation>,
}

/// `POST /api/dosage/check` — extract drugs and produce age/renal-aware
/// dosage guidance per drug.
pub async fn check(
    State(ctx): State<ApiContext>,
    Json(payload): Json<DosageCheckRequest>,
) -> Result<Json<DosageCheckResponse>, ApiError> {
    let engine = ctx.engine.clone();
    let result = run_blocking(move || {
        engine.check_dosage(
            &payload.text,
            &payload.language,
            payload.age,
            payload.weight,
            payload.renal_function,
        )
    })
    .await?;

    Ok(Json(DosageCheckResponse {
        success: true,
        results: result.results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renal_function_defaults_to_normal() {
        let request: DosageCheckRequest =
            serde_json::from_str(r#"{"text": "aspirin", "age": 30}"#).unwrap();
        assert_eq!(request.renal_function, RenalFunction::Normal);
        assert_eq!(request.weight, None);
    }

    #[test]
    fn unrecognized_renal_value_degrades_to_normal() {
        let request: DosageCheckRequest = serde_json::from_str(
            r#"{"text": "aspirin", "age": 30, "renal_function": "banana"}"#,
        )
        .unwrap();
        assert_eq!(request.renal_function, RenalFunction::Normal);
    }
}
