pub mod analysis;
pub mod documents;
pub mod dosage;
pub mod drugs;
pub mod health;
pub mod interactions;
pub mod reports;

use crate::analysis::AnalysisError;
use crate::api::error::ApiError;

pub(crate) fn default_language() -> String {
    "english".to_string()
}

/// Run a synchronous workflow on a blocking worker thread.
///
/// The engine's collaborator calls use a blocking HTTP client, so they must
/// not run on the async executor.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AnalysisError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::Internal(format!("worker task failed: {e}")))?
        .map_err(ApiError::from)
}
