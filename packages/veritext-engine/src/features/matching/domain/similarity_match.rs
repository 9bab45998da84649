//! Matched Region Representation
//!
//! Represents one region of the suspect text matched against a source,
//! with per-match similarity, positions on both sides, and provenance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::match_algorithm::{MatchAlgorithm, SourceType};
use crate::shared::models::Span;

/// One matched region between the suspect text and a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityMatch {
    /// Per-match similarity [0.0, 1.0]
    pub similarity: f64,

    /// Matched region in the suspect text
    pub matched_text: String,

    /// Matched region in the source text
    pub source_text: String,

    /// Offset into the suspect text (half-open with `end_position`)
    pub start_position: usize,
    pub end_position: usize,

    /// Offset into the source text (half-open with `source_end_pos`)
    pub source_start_pos: usize,
    pub source_end_pos: usize,

    /// Matcher that produced this match
    pub algorithm: MatchAlgorithm,

    /// Origin of the source side
    pub source_type: SourceType,

    /// URL for web sources
    pub source_url: Option<String>,

    /// Display name of the source
    pub source_title: Option<String>,

    /// Id of the matched stored document, when the source is one
    pub source_id: Option<String>,

    /// Matcher confidence [0.0, 1.0]
    pub confidence: f64,

    /// Set by citation marking; `None` until marked
    pub is_cited: Option<bool>,
}

impl SimilarityMatch {
    /// Create a new match with zeroed positions
    ///
    /// Confidence defaults to the similarity; source type to `document`.
    pub fn new(
        similarity: f64,
        matched_text: impl Into<String>,
        source_text: impl Into<String>,
        algorithm: MatchAlgorithm,
    ) -> Self {
        Self {
            similarity,
            matched_text: matched_text.into(),
            source_text: source_text.into(),
            start_position: 0,
            end_position: 0,
            source_start_pos: 0,
            source_end_pos: 0,
            algorithm,
            source_type: SourceType::Document,
            source_url: None,
            source_title: None,
            source_id: None,
            confidence: similarity,
            is_cited: None,
        }
    }

    /// Set positions on both sides
    pub fn with_positions(
        mut self,
        start: usize,
        end: usize,
        source_start: usize,
        source_end: usize,
    ) -> Self {
        self.start_position = start;
        self.end_position = end;
        self.source_start_pos = source_start;
        self.source_end_pos = source_end;
        self
    }

    /// Set matcher confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Set source provenance to a web page
    pub fn with_web_source(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.source_type = SourceType::Web;
        self.source_url = Some(url.into());
        self.source_title = Some(title.into());
        self
    }

    /// Set source provenance to a stored document
    pub fn with_document_source(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.source_type = SourceType::Document;
        self.source_id = Some(id.into());
        self.source_title = Some(name.into());
        self
    }

    /// Span of the matched region in the suspect text
    pub fn span(&self) -> Span {
        Span::new(self.start_position, self.end_position)
    }

    /// Span of the matched region in the source text
    pub fn source_span(&self) -> Span {
        Span::new(self.source_start_pos, self.source_end_pos)
    }

    /// Length of the suspect-side region
    pub fn len(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict overlap on the suspect side (touching spans do not overlap)
    pub fn overlaps(&self, other: &SimilarityMatch) -> bool {
        self.start_position < other.end_position && self.end_position > other.start_position
    }
}

impl fmt::Display for SimilarityMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Match({}, {:.1}%, [{}..{}) ↔ [{}..{}))",
            self.algorithm,
            self.similarity * 100.0,
            self.start_position,
            self.end_position,
            self.source_start_pos,
            self.source_end_pos
        )
    }
}
