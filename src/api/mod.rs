//! HTTP surface: a composable axum `Router` over the analysis engine,
//! mirroring the boundary workflows one-to-one.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use types::ApiContext;
