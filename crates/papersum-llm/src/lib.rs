//! papersum-llm — upstream AI gateway access and the summarization pipeline.
//!
//! prompt → backend call → reply extraction/validation, plus an audit
//! record for every upstream call.

pub mod backend;
pub mod prompt;
pub mod extract;
pub mod summarize;
pub mod audit;
pub mod mock;

pub use backend::{GatewayBackend, LlmBackend, LlmError, LlmRequest, LlmResponse, Message};
pub use extract::{extract_summary, ExtractError};
pub use summarize::Summarizer;
