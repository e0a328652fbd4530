//! Shared application state for the web server.

use std::sync::Arc;

use papersum_llm::{GatewayBackend, LlmBackend, Summarizer};
use secrecy::{ExposeSecret, SecretString};

use crate::config::Config;

/// Shared state injected into every Axum handler.
///
/// `summarizer` is `None` when no gateway API key is configured; the
/// handler then answers with a configuration error on first use.
pub struct AppState {
    pub summarizer: Option<Summarizer>,
}

impl AppState {
    pub fn new(summarizer: Option<Summarizer>) -> Self {
        Self { summarizer }
    }

    pub fn with_backend(backend: Arc<dyn LlmBackend>) -> Self {
        Self::new(Some(Summarizer::new(backend)))
    }

    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let gateway = &config.gateway;
        let Some(key) = gateway.api_key() else {
            tracing::warn!(
                "No AI gateway API key configured (set PAPERSUM_GATEWAY_API_KEY or gateway.api_key). \
                 Summarization requests will fail until one is provided."
            );
            return Ok(Self::unconfigured());
        };

        let mut backend = GatewayBackend::new(
            &gateway.base_url,
            &gateway.model,
            SecretString::from(key.expose_secret().to_string()),
        )
        .with_temperature(gateway.temperature);
        if let Some(timeout) = gateway.request_timeout() {
            backend = backend.with_timeout(timeout)?;
        }

        tracing::info!(
            gateway = %gateway.base_url,
            model = %gateway.model,
            "AI gateway backend ready"
        );
        Ok(Self::with_backend(Arc::new(backend)))
    }

    pub fn model_id(&self) -> Option<&str> {
        self.summarizer.as_ref().map(Summarizer::model_id)
    }
}

pub type SharedState = Arc<AppState>;
