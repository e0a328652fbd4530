//! Summary-style and citation-format options.
//!
//! Both are closed enums with an explicit default. Parsing from the wire is
//! lenient: an unknown summary style falls back to `Detailed`, and an unknown
//! citation format is kept verbatim as `Other` so it still reaches the prompt.

use std::fmt;

/// Requested summary length/detail preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryStyle {
    Short,
    #[default]
    Detailed,
    Comprehensive,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [
        SummaryStyle::Short,
        SummaryStyle::Detailed,
        SummaryStyle::Comprehensive,
    ];

    /// Map a wire label to a style. Matching is exact (the labels are
    /// lowercase keys); anything else is `Detailed`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "short"         => SummaryStyle::Short,
            "detailed"      => SummaryStyle::Detailed,
            "comprehensive" => SummaryStyle::Comprehensive,
            _               => SummaryStyle::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Short         => "short",
            SummaryStyle::Detailed      => "detailed",
            SummaryStyle::Comprehensive => "comprehensive",
        }
    }

    /// Length description inserted into the prompt.
    pub fn length_description(&self) -> &'static str {
        match self {
            SummaryStyle::Short         => "a brief 2-3 sentence summary",
            SummaryStyle::Detailed      => "a detailed 1-paragraph summary",
            SummaryStyle::Comprehensive => "a comprehensive 2-3 paragraph summary",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic citation style requested for the generated citation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CitationFormat {
    #[default]
    Apa,
    Ieee,
    Mla,
    /// Any other label, passed through to the prompt as-is.
    Other(String),
}

impl CitationFormat {
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "apa"  => CitationFormat::Apa,
            "ieee" => CitationFormat::Ieee,
            "mla"  => CitationFormat::Mla,
            _      => CitationFormat::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CitationFormat::Apa      => "apa",
            CitationFormat::Ieee     => "ieee",
            CitationFormat::Mla      => "mla",
            CitationFormat::Other(s) => s,
        }
    }

    /// Upper-cased label as it appears in the prompt ("APA", "IEEE", ...).
    pub fn prompt_label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for CitationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_styles_round_trip() {
        for style in SummaryStyle::ALL {
            assert_eq!(SummaryStyle::from_label(style.as_str()), style);
        }
    }

    #[test]
    fn test_unknown_style_falls_back_to_detailed() {
        for label in ["", "SHORT", "verbose", "brief", " short"] {
            assert_eq!(SummaryStyle::from_label(label), SummaryStyle::Detailed, "label {label:?}");
        }
    }

    #[test]
    fn test_citation_labels() {
        assert_eq!(CitationFormat::from_label("APA"), CitationFormat::Apa);
        assert_eq!(CitationFormat::from_label("ieee"), CitationFormat::Ieee);
        assert_eq!(CitationFormat::from_label("mla").prompt_label(), "MLA");
    }

    #[test]
    fn test_unknown_citation_format_is_kept_verbatim() {
        let fmt = CitationFormat::from_label("Chicago-author-date");
        assert_eq!(fmt, CitationFormat::Other("Chicago-author-date".to_string()));
        assert_eq!(fmt.prompt_label(), "CHICAGO-AUTHOR-DATE");
    }
}
