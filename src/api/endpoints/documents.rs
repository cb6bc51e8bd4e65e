//! Document upload endpoint — multipart upload → text extraction →
//! comprehensive analysis.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{DocumentAnalysis, RenalFunction};

use super::{default_language, run_blocking};

#[derive(Serialize)]
pub struct DocumentAnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub analysis: DocumentAnalysis,
}

struct UploadedFile {
    bytes: Vec<u8>,
    content_type: Option<String>,
    filename: String,
}

/// `POST /api/documents/analyze` — multipart form with a `file` part plus
/// `age` (required), `weight`, `renal_function`, and `language` fields.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<DocumentAnalyzeResponse>, ApiError> {
    let mut file: Option<UploadedFile> = None;
    let mut age: Option<u32> = None;
    let mut weight: Option<f64> = None;
    let mut renal_function = RenalFunction::Normal;
    let mut language = default_language();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?
                    .to_vec();
                file = Some(UploadedFile {
                    bytes,
                    content_type,
                    filename,
                });
            }
            "age" => {
                let value = text_field(field).await?;
                age = Some(
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ApiError::BadRequest(format!("Invalid age: {value}")))?,
                );
            }
            "weight" => {
                let value = text_field(field).await?;
                weight = Some(
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ApiError::BadRequest(format!("Invalid weight: {value}")))?,
                );
            }
            "renal_function" => {
                renal_function = RenalFunction::parse(&text_field(field).await?);
            }
            "language" => {
                language = text_field(field).await?;
            }
            other => {
                tracing::debug!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("Missing file field".into()))?;
    let age = age.ok_or_else(|| ApiError::BadRequest("Missing age field".into()))?;

    let engine = ctx.engine.clone();
    let analysis = run_blocking(move || {
        engine.analyze_document(
            &file.bytes,
            file.content_type.as_deref(),
            &file.filename,
            age,
            weight,
            renal_function,
            &language,
        )
    })
    .await?;

    Ok(Json(DocumentAnalyzeResponse {
        success: true,
        analysis,
    }))
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid form field: {e}")))
}
