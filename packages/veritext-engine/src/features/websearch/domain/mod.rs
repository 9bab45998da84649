//! Web Search Domain
//!
//! The web match record and the provider port. Everything that talks to an
//! actual source corpus or search backend lives in `infrastructure`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::features::matching::domain::{MatchAlgorithm, SimilarityMatch};
use crate::shared::models::Result;

/// One phrase of the suspect text shared with a web source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebMatch {
    pub url: String,

    pub title: String,

    /// Shared phrase as found in the suspect text (preprocessed form)
    pub matched_text: String,

    /// Shared phrase on the source side
    pub source_text: String,

    /// Phrase-length-scaled similarity in [0.0, 1.0]
    pub similarity: f64,

    /// Span in the preprocessed suspect text (half-open)
    pub start_position: usize,
    pub end_position: usize,
}

impl WebMatch {
    /// Length of the suspect-side span
    pub fn len(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict overlap on the suspect side
    pub fn overlaps(&self, other: &WebMatch) -> bool {
        self.start_position < other.end_position && self.end_position > other.start_position
    }

    /// Convert into the pipeline's match record.
    ///
    /// The source span starts at 0 because providers report only the shared
    /// phrase, not its offset within the page.
    pub fn into_similarity_match(self) -> SimilarityMatch {
        let source_end = self.source_text.len();
        SimilarityMatch::new(
            self.similarity,
            self.matched_text,
            self.source_text,
            MatchAlgorithm::WebSearch,
        )
        .with_positions(self.start_position, self.end_position, 0, source_end)
        .with_web_source(self.url, self.title)
    }
}

/// Provider of web-sourced matches for a suspect text
///
/// Callers treat provider failure as an empty result and bound the call
/// with their own timeout; implementations must not sleep or retry on the
/// engine's behalf.
#[async_trait]
pub trait WebMatchProvider: Send + Sync {
    /// Find phrases of `text` shared with up to `max_sources` sources
    async fn find_matches(&self, text: &str, max_sources: usize) -> Result<Vec<WebMatch>>;
}
