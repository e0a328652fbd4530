//! Prompt construction for paper summarization.

use papersum_common::{CitationFormat, SummaryStyle};

use crate::backend::Message;

/// Upper bound on the paper text embedded in a prompt, in characters.
pub const MAX_CONTENT_CHARS: usize = 8000;

pub const SYSTEM_PROMPT: &str =
    "You are an expert academic research assistant. Always respond with valid JSON only, no additional text.";

/// First `MAX_CONTENT_CHARS` characters of `content`.
pub fn truncate_content(content: &str) -> &str {
    match content.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

pub fn build_prompt(content: &str, style: SummaryStyle, format: &CitationFormat) -> String {
    format!(
        r#"Analyze this research paper and provide {length}.

Paper content:
{content}

Provide:
1. A clear summary following the requested style
2. 5-7 key keywords or concepts
3. A properly formatted academic citation in {format} format (extract title, authors, year from the content if available, or generate a generic citation)

Format your response as JSON:
{{
  "summary": "your summary here",
  "keywords": ["keyword1", "keyword2", ...],
  "citation": "formatted citation here"
}}"#,
        length = style.length_description(),
        content = truncate_content(content),
        format = format.prompt_label(),
    )
}

/// The `[system, user]` pair sent upstream.
pub fn build_messages(content: &str, style: SummaryStyle, format: &CitationFormat) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(build_prompt(content, style, format)),
    ]
}
