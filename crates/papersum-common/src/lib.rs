//! papersum-common — Shared types, errors, and option enums used across all papersum crates.

pub mod error;
pub mod options;
pub mod paper;

// Re-export commonly used types
pub use error::{ErrorBody, PapersumError, Result};
pub use options::{CitationFormat, SummaryStyle};
pub use paper::{PaperSummary, SummarizeRequest};
