//! Summarization pipeline: prompt → upstream call → extract/validate.

use std::sync::Arc;
use std::time::Instant;

use papersum_common::{CitationFormat, PaperSummary, PapersumError, SummaryStyle};

use crate::audit::LlmAuditEntry;
use crate::backend::{LlmBackend, LlmError, LlmRequest};
use crate::extract::extract_summary;
use crate::prompt::build_messages;

impl From<LlmError> for PapersumError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::RateLimitExceeded        => PapersumError::RateLimited,
            LlmError::PaymentRequired          => PapersumError::PaymentRequired,
            LlmError::ApiError { status, .. }  => PapersumError::Upstream { status },
            LlmError::NotConfigured(msg)       => PapersumError::Config(msg),
            LlmError::Http(e) if e.is_timeout() => {
                PapersumError::Transport("AI gateway request timed out".to_string())
            }
            LlmError::Http(e)                  => PapersumError::Transport(e.to_string()),
            LlmError::Serde(e)                 => PapersumError::Other(e.into()),
            LlmError::MalformedResponse(msg)   => {
                PapersumError::Other(anyhow::anyhow!("Malformed AI response: {msg}"))
            }
        }
    }
}

pub struct Summarizer {
    backend: Arc<dyn LlmBackend>,
}

impl Summarizer {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    pub async fn summarize(
        &self,
        content: &str,
        style: SummaryStyle,
        format: &CitationFormat,
    ) -> Result<PaperSummary, PapersumError> {
        if content.is_empty() {
            return Err(PapersumError::NoContent);
        }

        let req = LlmRequest::new(build_messages(content, style, format));

        tracing::info!(
            model = self.backend.model_id(),
            summary_style = %style,
            citation_format = %format,
            content_chars = content.chars().count(),
            "Calling AI gateway for summarization"
        );
        let started = Instant::now();
        let resp = self.backend.complete(req).await?;
        let latency_ms = started.elapsed().as_millis() as u64;

        LlmAuditEntry::new(&resp, style.as_str(), format.as_str(), latency_ms).log();

        Ok(extract_summary(&resp.content)?)
    }
}
