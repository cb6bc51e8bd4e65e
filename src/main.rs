use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medcheck::analysis::AnalysisEngine;
use medcheck::api::api_router;
use medcheck::config::{self, Config};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        version = config::APP_VERSION,
        addr = %config.bind_addr,
        "medcheck starting"
    );

    // The engine's HTTP collaborators use a blocking client, so it is built
    // before the async runtime starts.
    let engine = Arc::new(AnalysisEngine::from_config(&config));

    let runtime = tokio::runtime::Runtime::new().expect("Failed to start async runtime");
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(config.bind_addr)
            .await
            .expect("Failed to bind API address");
        tracing::info!(addr = %config.bind_addr, "API listening");

        axum::serve(listener, api_router(engine))
            .await
            .expect("API server failed");
    });
}
