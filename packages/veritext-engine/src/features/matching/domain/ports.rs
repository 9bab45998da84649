//! Matching Ports
//!
//! `SemanticScorer` abstracts sentence-meaning comparison so an
//! embedding-backed implementation can replace the bundled token-overlap
//! stand-in without touching the paraphrase detector or the score combiner.

use super::metrics::jaccard_similarity;

/// Sentence-level semantic similarity scorer
pub trait SemanticScorer: Send + Sync {
    /// Score two sentences in [0.0, 1.0]
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Word-set Jaccard as a coarse stand-in for semantic similarity
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenOverlapScorer;

impl TokenOverlapScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SemanticScorer for TokenOverlapScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        jaccard_similarity(a, b)
    }
}
