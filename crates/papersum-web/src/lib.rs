//! papersum-web — the paper summarization HTTP handler.
//! Provides:
//!   - POST /summarize-paper (alias /api/summarize)
//!   - GET  /health
//!   - permissive CORS, including OPTIONS preflight

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
