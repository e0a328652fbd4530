//! Configuration loading for the summarization server.
//! Reads papersum.toml from the current directory or the path in the
//! PAPERSUM_CONFIG env var, then applies environment overrides.

use std::path::Path;
use std::time::Duration;

use papersum_llm::backend::{DEFAULT_GATEWAY_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

pub const ENV_CONFIG_PATH: &str = "PAPERSUM_CONFIG";
pub const ENV_API_KEY: &str     = "PAPERSUM_GATEWAY_API_KEY";
pub const ENV_GATEWAY_URL: &str = "PAPERSUM_GATEWAY_URL";
pub const ENV_MODEL: &str       = "PAPERSUM_MODEL";
pub const ENV_BIND: &str        = "PAPERSUM_BIND";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "127.0.0.1:3001".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Usually left out of the file and supplied via PAPERSUM_GATEWAY_API_KEY.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Upper bound on one upstream call. 0 disables the bound.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url()    -> String      { DEFAULT_GATEWAY_URL.to_string() }
fn default_model()       -> String      { DEFAULT_MODEL.to_string() }
fn default_temperature() -> f32         { DEFAULT_TEMPERATURE }
fn default_timeout()     -> Option<u64> { Some(120) }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            api_key: None,
            request_timeout_secs: default_timeout(),
        }
    }
}

impl GatewayConfig {
    /// The API key, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|k| !k.expose_secret().is_empty())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration.
    /// Checks PAPERSUM_CONFIG first, then papersum.toml in the current
    /// directory. A missing file is not an error: defaults are used.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| "papersum.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!(path = %path, "Config file not found, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply PAPERSUM_* overrides from `lookup`. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.gateway.api_key = Some(SecretString::from(key));
        }
        if let Some(url) = get(ENV_GATEWAY_URL) {
            self.gateway.base_url = url;
        }
        if let Some(model) = get(ENV_MODEL) {
            self.gateway.model = model;
        }
        if let Some(bind) = get(ENV_BIND) {
            self.server.bind = bind;
        }
    }
}
