use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::enrich::remote::supported_source_languages;
use crate::models::DrugMonograph;

#[derive(Serialize)]
pub struct DrugListResponse {
    pub success: bool,
    pub drugs: Vec<String>,
    pub count: usize,
}

/// `GET /api/drugs` — sorted distinct drugs the interaction table knows.
pub async fn list(State(ctx): State<ApiContext>) -> Json<DrugListResponse> {
    let drugs = ctx.engine.reference().interactions.known_drugs();
    let count = drugs.len();
    Json(DrugListResponse {
        success: true,
        drugs,
        count,
    })
}

#[derive(Serialize)]
pub struct MonographResponse {
    pub success: bool,
    pub drug_name: String,
    pub information: DrugMonograph,
}

/// `GET /api/drugs/:name` — reference monograph; 404 for uncovered drugs.
pub async fn monograph(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Json<MonographResponse>, ApiError> {
    let information = ctx
        .engine
        .reference()
        .monographs
        .monograph(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Drug not found: {name}")))?;

    Ok(Json(MonographResponse {
        success: true,
        drug_name: name.to_lowercase(),
        information,
    }))
}

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: Vec<String>,
    pub count: usize,
}

/// `GET /api/languages` — English plus every translatable source language.
pub async fn languages() -> Json<LanguagesResponse> {
    let mut languages = vec!["english".to_string()];
    languages.extend(supported_source_languages().iter().map(|l| l.to_string()));
    let count = languages.len();
    Json(LanguagesResponse {
        success: true,
        languages,
        count,
    })
}
