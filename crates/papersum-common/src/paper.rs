//! Wire types for the summarization endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::{CitationFormat, SummaryStyle};

/// Body of `POST /summarize-paper`.
///
/// Every field is optional on the wire so that missing content can be
/// answered with a 400 rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    pub content: Option<String>,
    /// Any JSON value; only a known label string selects a non-default style.
    #[serde(default)]
    pub summary_style: Option<Value>,
    #[serde(default)]
    pub citation_format: Option<String>,
}

impl SummarizeRequest {
    pub fn new(content: impl Into<String>, style: SummaryStyle, format: &CitationFormat) -> Self {
        Self {
            content: Some(content.into()),
            summary_style: Some(Value::from(style.as_str())),
            citation_format: Some(format.as_str().to_string()),
        }
    }

    /// Content, if present and non-empty.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    pub fn style(&self) -> SummaryStyle {
        self.summary_style
            .as_ref()
            .and_then(Value::as_str)
            .map(SummaryStyle::from_label)
            .unwrap_or_default()
    }

    pub fn citation_format(&self) -> CitationFormat {
        self.citation_format
            .as_deref()
            .map(CitationFormat::from_label)
            .unwrap_or_default()
    }
}

/// The result envelope returned on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
    pub summary: String,
    pub keywords: Vec<String>,
    pub citation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_uses_camel_case() {
        let req = SummarizeRequest::new("text", SummaryStyle::Short, &CitationFormat::Mla);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({
            "content": "text",
            "summaryStyle": "short",
            "citationFormat": "mla",
        }));
    }

    #[test]
    fn test_missing_fields_decode_to_defaults() {
        let req: SummarizeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.content(), None);
        assert_eq!(req.style(), SummaryStyle::Detailed);
        assert_eq!(req.citation_format(), CitationFormat::Apa);
    }

    #[test]
    fn test_non_string_style_falls_back_to_detailed() {
        let bodies = [
            r#"{"summaryStyle": 5}"#,
            r#"{"summaryStyle": null}"#,
            r#"{"summaryStyle": ["short"]}"#,
        ];
        for raw in bodies {
            let req: SummarizeRequest = serde_json::from_str(raw).unwrap();
            assert_eq!(req.style(), SummaryStyle::Detailed, "{raw}");
        }
    }

    #[test]
    fn test_empty_content_counts_as_missing() {
        let req: SummarizeRequest = serde_json::from_str(r#"{"content": ""}"#).unwrap();
        assert_eq!(req.content(), None);
    }

    #[test]
    fn test_whitespace_content_is_kept() {
        let req: SummarizeRequest = serde_json::from_str(r#"{"content": "  "}"#).unwrap();
        assert_eq!(req.content(), Some("  "));
    }
}
