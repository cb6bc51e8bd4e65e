use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::error::ApiError;
use crate::models::AnalysisReport;
use crate::report::render_report;

/// `POST /api/reports/pdf` — render a previously returned analysis report
/// to a downloadable PDF.
pub async fn pdf(Json(report): Json<AnalysisReport>) -> Result<Response, ApiError> {
    let bytes = tokio::task::spawn_blocking(move || render_report(&report))
        .await
        .map_err(|e| ApiError::Internal(format!("worker task failed: {e}")))??;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"medcheck_analysis_report.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response())
}
