//! Extraction of the result envelope from a free-text model reply.
//!
//! The model is asked for bare JSON but often wraps it in prose or a
//! code fence. The first `{` through the last `}` is tried first; if the
//! reply has no brace span at all the whole reply is parsed. Validation is
//! presence-only: `summary`, `keywords` and `citation` must each be truthy.

use std::sync::OnceLock;

use papersum_common::{PaperSummary, PapersumError};
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Failed to parse AI response as JSON")]
    Unparsable,
    #[error("Invalid response structure from AI")]
    InvalidStructure { field: &'static str },
}

impl From<ExtractError> for PapersumError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::Unparsable              => PapersumError::UnparsableResponse,
            ExtractError::InvalidStructure { .. } => PapersumError::InvalidStructure,
        }
    }
}

pub const REQUIRED_FIELDS: [&str; 3] = ["summary", "keywords", "citation"];

fn object_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static regex"))
}

/// Parse the JSON payload out of a model reply.
pub fn parse_reply(text: &str) -> Result<Value, ExtractError> {
    let candidate = object_span()
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(text);

    serde_json::from_str(candidate).map_err(|e| {
        tracing::error!(error = %e, raw = %text, "Failed to parse AI response");
        ExtractError::Unparsable
    })
}

/// JavaScript-style truthiness: null, false, 0 and "" are falsy.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null      => false,
        Value::Bool(b)   => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_keywords(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items.iter().map(as_text).collect(),
        other => vec![as_text(other)],
    }
}

/// Check the three required fields and coerce them into a `PaperSummary`.
pub fn validate(value: &Value) -> Result<PaperSummary, ExtractError> {
    for field in REQUIRED_FIELDS {
        if !value.get(field).is_some_and(is_truthy) {
            tracing::error!(field, "AI response is missing a required field");
            return Err(ExtractError::InvalidStructure { field });
        }
    }

    Ok(PaperSummary {
        summary:  as_text(&value["summary"]),
        keywords: as_keywords(&value["keywords"]),
        citation: as_text(&value["citation"]),
    })
}

/// Text → validated result. Pure apart from error logging.
pub fn extract_summary(text: &str) -> Result<PaperSummary, ExtractError> {
    let value = parse_reply(text)?;
    validate(&value)
}
