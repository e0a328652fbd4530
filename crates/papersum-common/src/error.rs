use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PapersumError {
    #[error("No content provided")]
    NoContent,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add credits to your workspace.")]
    PaymentRequired,

    #[error("AI API error: {status}")]
    Upstream { status: u16 },

    #[error("Failed to parse AI response as JSON")]
    UnparsableResponse,

    #[error("Invalid response structure from AI")]
    InvalidStructure,

    #[error("HTTP request error: {0}")]
    Transport(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PapersumError {
    /// HTTP status the handler answers with for this error.
    ///
    /// Only the input check and the two pass-through upstream statuses get
    /// their own code; everything else collapses to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PapersumError::NoContent       => StatusCode::BAD_REQUEST,
            PapersumError::RateLimited     => StatusCode::TOO_MANY_REQUESTS,
            PapersumError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            _                              => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error envelope: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

impl IntoResponse for PapersumError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PapersumError>;
