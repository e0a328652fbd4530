//! In-memory `LlmBackend` for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{status_error, LlmBackend, LlmError, LlmRequest, LlmResponse};

/// Replays queued replies in order and records what it was asked.
pub struct MockBackend {
    model: String,
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<LlmRequest>>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            model: "mock-model".to_string(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a successful reply with the given content.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        self.push(Ok(content.into()));
        self
    }

    /// Queue the error the gateway backend would produce for `status`.
    pub fn with_status(self, status: u16) -> Self {
        self.push(Err(status_error(status, "")));
        self
    }

    pub fn with_error(self, err: LlmError) -> Self {
        self.push(Err(err));
        self
    }

    fn push(&self, reply: Result<String, LlmError>) {
        if let Ok(mut q) = self.replies.lock() {
            q.push_back(reply);
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<LlmRequest> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmBackend for MockBackend {
    async fn complete(&self, req: LlmRequest) -> Result<LlmResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut r) = self.requests.lock() {
            r.push(req);
        }

        let next = self.replies.lock().ok().and_then(|mut q| q.pop_front());
        let content = next.unwrap_or_else(|| {
            Err(LlmError::MalformedResponse("no queued mock reply".to_string()))
        })?;

        Ok(LlmResponse {
            completion_tokens: content.split_whitespace().count() as u32,
            content,
            model: self.model.clone(),
            prompt_tokens: 0,
        })
    }

    fn model_id(&self) -> &str { &self.model }
}
