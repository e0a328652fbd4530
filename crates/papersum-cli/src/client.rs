//! HTTP client for the summarization handler.

use papersum_common::{ErrorBody, PaperSummary, SummarizeRequest};
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:3001";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("Payment required: {0}")]
    PaymentRequired(String),
    #[error("Handler returned {status}: {message}")]
    Handler { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status reported by the handler, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RateLimited(_)          => Some(429),
            ClientError::PaymentRequired(_)      => Some(402),
            ClientError::Handler { status, .. }  => Some(*status),
            ClientError::Http(e)                 => e.status().map(|s| s.as_u16()),
        }
    }
}

pub struct HandlerClient {
    base_url: String,
    client: reqwest::Client,
}

impl HandlerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), client: reqwest::Client::new() }
    }

    fn endpoint(&self) -> String {
        format!("{}/summarize-paper", self.base_url.trim_end_matches('/'))
    }

    pub async fn summarize(&self, req: &SummarizeRequest) -> Result<PaperSummary, ClientError> {
        let resp = self.client.post(self.endpoint()).json(req).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or(text);
        tracing::debug!(status = status.as_u16(), message = %message, "Handler returned an error");

        Err(match status.as_u16() {
            429 => ClientError::RateLimited(message),
            402 => ClientError::PaymentRequired(message),
            code => ClientError::Handler { status: code, message },
        })
    }
}
