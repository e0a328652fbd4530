//! Input collection: a PDF-typed file or pasted text.
//!
//! File bytes are decoded as text as-is; there is no PDF parsing. When both
//! channels are filled the file wins.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No input provided")]
    NoInput,
    #[error("{} is not a PDF file", .0.display())]
    NotPdf(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaperSource {
    File(PathBuf),
    Text,
}

#[derive(Debug, Clone)]
pub struct CollectedInput {
    pub content: String,
    pub source: PaperSource,
}

/// A file counts as PDF-typed by extension or by its leading magic bytes.
pub fn is_pdf(path: &Path, head: &[u8]) -> bool {
    let by_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    by_extension || head.starts_with(PDF_MAGIC)
}

#[derive(Debug, Default)]
pub struct InputCollector {
    file: Option<PathBuf>,
    text: String,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Whether submission should be enabled at all.
    pub fn has_input(&self) -> bool {
        self.file.is_some() || !self.text.trim().is_empty()
    }

    pub fn collect(&self) -> Result<CollectedInput, InputError> {
        if let Some(path) = &self.file {
            let bytes = std::fs::read(path).map_err(|source| InputError::Read {
                path: path.clone(),
                source,
            })?;
            if !is_pdf(path, &bytes) {
                return Err(InputError::NotPdf(path.clone()));
            }
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read paper file");
            return Ok(CollectedInput {
                content: String::from_utf8_lossy(&bytes).into_owned(),
                source: PaperSource::File(path.clone()),
            });
        }

        if self.text.trim().is_empty() {
            return Err(InputError::NoInput);
        }
        Ok(CollectedInput { content: self.text.clone(), source: PaperSource::Text })
    }
}
