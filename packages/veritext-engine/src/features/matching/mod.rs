//! Textual Similarity Matching
//!
//! Finds matched regions between a suspect text and a source text at three
//! levels of strictness:
//! - Exact: verbatim substrings, grown to maximal length
//! - N-gram: word windows of 3, 4, and 5 words shared verbatim
//! - Paraphrase: sentence pairs that agree in meaning but not wording
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (score combiner / analysis usecases)
//!           ↓
//! infrastructure/ (matcher implementations + suite)
//!           ↓
//! domain/ (match records, metrics, overlap resolution)
//! ```
//!
//! Every matcher self-resolves its candidates; pipelines pool matcher
//! outputs and resolve once more, so downstream consumers always see
//! pairwise-disjoint suspect-side spans.

pub mod domain;
pub mod infrastructure;

// Re-export domain types
pub use domain::{
    cosine_similarity, jaccard_similarity, MatchAlgorithm, MatcherConfig, OverlapResolver,
    SemanticScorer, SimilarityMatch, SourceType, TokenOverlapScorer,
};

// Re-export infrastructure (the score combiner is the usual entry point)
pub use infrastructure::{
    ExactMatcher, NgramMatcher, ParaphraseMatcher, StructuralMatcherSet, TextMatcher,
};
