//! Summarization endpoint: paper text in, summary/keywords/citation out.

use axum::{body::Bytes, extract::State, Json};
use papersum_common::{PaperSummary, PapersumError, SummarizeRequest};

use crate::state::SharedState;

/// `POST /summarize-paper`
///
/// The body is decoded regardless of Content-Type. Empty content is
/// rejected before the API key is even looked at, so a missing key never
/// masks a 400.
pub async fn summarize_paper(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<PaperSummary>, PapersumError> {
    let req: SummarizeRequest = serde_json::from_slice(&body)
        .map_err(|e| PapersumError::BadRequest(e.to_string()))?;

    let content = req.content().ok_or(PapersumError::NoContent)?;

    let summarizer = state.summarizer.as_ref().ok_or_else(|| {
        PapersumError::Config("AI gateway API key is not configured".to_string())
    })?;

    let summary = summarizer
        .summarize(content, req.style(), &req.citation_format())
        .await?;

    tracing::info!(keywords = summary.keywords.len(), "Paper summarized");
    Ok(Json(summary))
}
