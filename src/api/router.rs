//! API router. Returns a composable `Router` with every analysis endpoint
//! nested under `/api/`, CORS open, and a body limit sized for document
//! uploads.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::analysis::AnalysisEngine;
use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::document::MAX_DOCUMENT_BYTES;

/// Multipart framing overhead allowed on top of the document size cap.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

/// Build the API router around a shared engine.
pub fn api_router(engine: Arc<AnalysisEngine>) -> Router {
    let ctx = ApiContext::new(engine);

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/interactions/check", post(endpoints::interactions::check))
        .route("/dosage/check", post(endpoints::dosage::check))
        .route(
            "/analysis/comprehensive",
            post(endpoints::analysis::comprehensive),
        )
        .route("/documents/analyze", post(endpoints::documents::analyze))
        .route("/reports/pdf", post(endpoints::reports::pdf))
        .route("/drugs", get(endpoints::drugs::list))
        .route("/drugs/:name", get(endpoints::drugs::monograph))
        .route("/languages", get(endpoints::drugs::languages))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES + BODY_LIMIT_SLACK))
        .layer(CorsLayer::permissive())
}
