//! Terminal rendering of results and toasts.

use std::time::{Duration, Instant};

use console::style;
use papersum_common::PaperSummary;

use crate::client::ClientError;
use crate::input::InputError;

/// How long the "Copied" acknowledgement stays up.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    NoInput,
    RateLimited,
    CreditsRequired,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub destructive: bool,
}

impl ToastKind {
    pub fn toast(self) -> Toast {
        let (title, description, destructive) = match self {
            ToastKind::Success => (
                "Success!",
                "Your paper has been processed successfully.",
                false,
            ),
            ToastKind::NoInput => (
                "No input provided",
                "Please upload a PDF or paste text to continue.",
                true,
            ),
            ToastKind::RateLimited => (
                "Rate limit exceeded",
                "Please try again in a moment.",
                true,
            ),
            ToastKind::CreditsRequired => (
                "Credits required",
                "Please add credits to continue using AI features.",
                true,
            ),
            ToastKind::Failure => (
                "Error",
                "Failed to process the paper. Please try again.",
                true,
            ),
        };
        Toast { title, description, destructive }
    }
}

/// Map a failed call to the toast shown for it. Raw messages never reach
/// the toast.
pub fn classify(err: &ClientError) -> ToastKind {
    match err.status() {
        Some(429) => ToastKind::RateLimited,
        Some(402) => ToastKind::CreditsRequired,
        _         => ToastKind::Failure,
    }
}

/// Toast for a failure while reading the paper. An unreadable or non-PDF
/// file is a processing failure; nothing to send is a usage error.
pub fn input_toast(err: &InputError) -> ToastKind {
    match err {
        InputError::NoInput => ToastKind::NoInput,
        InputError::NotPdf(_) | InputError::Read { .. } => ToastKind::Failure,
    }
}

/// Transient "copied" acknowledgement for the citation copy action.
#[derive(Debug, Default)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
}

impl CopyIndicator {
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_ACK_DURATION)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_active(now) { "Copied" } else { "Copy" }
    }
}

pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

pub fn render_toast(toast: &Toast) -> String {
    let title = if toast.destructive {
        style(toast.title).red().bold()
    } else {
        style(toast.title).green().bold()
    };
    format!("{title}\n{}", style(toast.description).dim())
}

pub fn render_summary(result: &PaperSummary, copy_label: Option<&str>) -> String {
    let badges = result
        .keywords
        .iter()
        .map(|k| format!("[{}]", style(k).cyan()))
        .collect::<Vec<_>>()
        .join(" ");

    let citation_header = match copy_label {
        Some(label) => format!("{}  ({label})", style("Citation").bold()),
        None => style("Citation").bold().to_string(),
    };

    format!(
        "{}\n{}\n\n{}\n{}\n\n{}\n{}\n",
        style("Summary").bold(),
        result.summary,
        style("Keywords").bold(),
        badges,
        citation_header,
        result.citation,
    )
}
