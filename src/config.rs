use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "medcheck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", APP_NAME)
}

/// Runtime configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP API binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the hosted inference API (NER, translation, generation).
    pub inference_base_url: String,
    /// Bearer token for NER/translation models. Absent → local fallback only.
    pub hf_api_token: Option<String>,
    /// Bearer token for the explanation model. Absent → template fallback only.
    pub granite_api_token: Option<String>,
}

impl Config {
    /// Resolve configuration from environment variables.
    ///
    /// `MEDCHECK_ADDR` overrides the bind address; `HF_API_KEY` and
    /// `IBM_API_KEY` enable the remote enrichment paths.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("MEDCHECK_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_bind_addr);

        let inference_base_url = std::env::var("MEDCHECK_INFERENCE_URL")
            .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string());

        Self {
            bind_addr,
            inference_base_url,
            hf_api_token: non_empty_env("HF_API_KEY"),
            granite_api_token: non_empty_env("IBM_API_KEY"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            inference_base_url: DEFAULT_INFERENCE_URL.to_string(),
            hf_api_token: None,
            granite_api_token: None,
        }
    }
}

const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
