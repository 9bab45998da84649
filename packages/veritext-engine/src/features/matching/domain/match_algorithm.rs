//! Match Algorithm Classification
//!
//! Tags every [`super::SimilarityMatch`] with the matcher that produced it.
//! The serialized tags are a wire contract shared with stored match rows and
//! must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detection algorithm that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchAlgorithm {
    /// Greedy longest-common-substring scan over preprocessed text
    #[serde(rename = "exact-match")]
    ExactMatch,

    /// Three-word window occurring verbatim in the other text
    #[serde(rename = "3-gram")]
    Ngram3,

    /// Four-word window occurring verbatim in the other text
    #[serde(rename = "4-gram")]
    Ngram4,

    /// Five-word window occurring verbatim in the other text
    #[serde(rename = "5-gram")]
    Ngram5,

    /// Sentence pair with high combined semantic/lexical overlap
    #[serde(rename = "semantic-paraphrase")]
    SemanticParaphrase,

    /// Phrase shared with a web source
    #[serde(rename = "web-search")]
    WebSearch,
}

impl MatchAlgorithm {
    /// All algorithms in pipeline order
    pub fn all() -> [MatchAlgorithm; 6] {
        [
            MatchAlgorithm::ExactMatch,
            MatchAlgorithm::Ngram3,
            MatchAlgorithm::Ngram4,
            MatchAlgorithm::Ngram5,
            MatchAlgorithm::SemanticParaphrase,
            MatchAlgorithm::WebSearch,
        ]
    }

    /// The n-gram algorithm for a window size, if one exists
    pub fn ngram(n: usize) -> Option<MatchAlgorithm> {
        match n {
            3 => Some(MatchAlgorithm::Ngram3),
            4 => Some(MatchAlgorithm::Ngram4),
            5 => Some(MatchAlgorithm::Ngram5),
            _ => None,
        }
    }

    /// Window size for n-gram algorithms
    pub fn window_size(&self) -> Option<usize> {
        match self {
            MatchAlgorithm::Ngram3 => Some(3),
            MatchAlgorithm::Ngram4 => Some(4),
            MatchAlgorithm::Ngram5 => Some(5),
            _ => None,
        }
    }

    /// Serialized tag (same string the wire format uses)
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchAlgorithm::ExactMatch => "exact-match",
            MatchAlgorithm::Ngram3 => "3-gram",
            MatchAlgorithm::Ngram4 => "4-gram",
            MatchAlgorithm::Ngram5 => "5-gram",
            MatchAlgorithm::SemanticParaphrase => "semantic-paraphrase",
            MatchAlgorithm::WebSearch => "web-search",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            MatchAlgorithm::ExactMatch => "Verbatim substring (length-grown, greedy)",
            MatchAlgorithm::Ngram3 => "3-word window shared verbatim",
            MatchAlgorithm::Ngram4 => "4-word window shared verbatim",
            MatchAlgorithm::Ngram5 => "5-word window shared verbatim",
            MatchAlgorithm::SemanticParaphrase => "Sentence-level paraphrase",
            MatchAlgorithm::WebSearch => "Phrase shared with a web source",
        }
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Origin of the source side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Another stored document
    Document,
    /// A web page
    Web,
    /// An academic source
    Academic,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Document => "document",
            SourceType::Web => "web",
            SourceType::Academic => "academic",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
