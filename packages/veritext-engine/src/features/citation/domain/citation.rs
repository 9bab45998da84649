//! Citation Record
//!
//! Represents one citation construct found in a text, with its span in the
//! ORIGINAL (case-preserved) text and whatever source details the parsers
//! could extract.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::models::Span;

/// Kind of citation construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    /// Text inside quotation marks
    Quote,
    /// Entry under a references-style heading
    Reference,
    /// Entry under a bibliography heading
    Bibliography,
    /// Inline citation such as `(Smith, 2020)` or `[12]`
    Parenthetical,
}

impl CitationKind {
    /// Serialized tag (same string the wire format uses)
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationKind::Quote => "quote",
            CitationKind::Reference => "reference",
            CitationKind::Bibliography => "bibliography",
            CitationKind::Parenthetical => "parenthetical",
        }
    }
}

impl fmt::Display for CitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source details parsed out of a citation; every field is best-effort
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SourceInfo {
    /// True when no field was extracted
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.title.is_none()
            && self.year.is_none()
            && self.publication.is_none()
            && self.doi.is_none()
            && self.url.is_none()
    }
}

/// One citation found in a text
///
/// `text` is the cited content; for quotes that is the inner capture while
/// the span still covers the quote marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub id: String,

    pub text: String,

    pub kind: CitationKind,

    /// Span in the original text (half-open with `end_position`)
    pub start_position: usize,
    pub end_position: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_info: Option<SourceInfo>,
}

impl Citation {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        kind: CitationKind,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            start_position: start,
            end_position: end,
            source_info: None,
        }
    }

    /// Attach parsed source details
    pub fn with_source_info(mut self, source_info: SourceInfo) -> Self {
        self.source_info = Some(source_info);
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.start_position, self.end_position)
    }

    /// Length of the cited span
    pub fn len(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict overlap (touching spans do not overlap)
    pub fn overlaps(&self, other: &Citation) -> bool {
        self.start_position < other.end_position && self.end_position > other.start_position
    }

    /// True iff this citation fully contains `[start, end)`
    pub fn contains(&self, start: usize, end: usize) -> bool {
        self.start_position <= start && self.end_position >= end
    }
}
