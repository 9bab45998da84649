//! Matching Infrastructure
//!
//! Implements the matcher suite behind the detection pipelines:
//! - Exact: verbatim substrings (greedy, length-grown)
//! - N-gram: shared word windows of 3, 4, and 5 words
//! - Paraphrase: sentence pairs with high semantic, low lexical overlap

use rayon::prelude::*;

use crate::features::matching::domain::{
    MatchAlgorithm, MatcherConfig, OverlapResolver, SimilarityMatch,
};

pub mod exact_matcher;
pub mod ngram_matcher;
pub mod paraphrase_matcher;

pub use exact_matcher::ExactMatcher;
pub use ngram_matcher::NgramMatcher;
pub use paraphrase_matcher::ParaphraseMatcher;

/// Text matcher trait
///
/// All matchers implement this interface for uniform API
pub trait TextMatcher: Send + Sync {
    /// Get matcher name
    fn name(&self) -> &'static str;

    /// Tag stamped on produced matches
    fn algorithm(&self) -> MatchAlgorithm;

    /// Find regions of `text1` matched against `text2`
    fn find_matches(&self, text1: &str, text2: &str) -> Vec<SimilarityMatch>;
}

/// Structural matcher suite: exact substrings plus every word-window size
pub struct StructuralMatcherSet {
    exact: ExactMatcher,
    ngrams: Vec<NgramMatcher>,
}

impl StructuralMatcherSet {
    /// Create the standard suite (exact min length 15, windows 3/4/5)
    pub fn new() -> Self {
        Self::from_config(&MatcherConfig::default())
    }

    /// Create a suite from configured thresholds
    ///
    /// Window sizes outside the supported 3..=5 range are skipped; run
    /// [`MatcherConfig::validate`] first to surface them as errors instead.
    pub fn from_config(config: &MatcherConfig) -> Self {
        Self {
            exact: ExactMatcher::with_min_length(config.exact_min_length),
            ngrams: config
                .ngram_sizes
                .iter()
                .filter_map(|&n| NgramMatcher::new(n))
                .collect(),
        }
    }

    /// Matchers in pipeline order: exact first, then windows as configured
    fn matchers(&self) -> Vec<&dyn TextMatcher> {
        let mut matchers: Vec<&dyn TextMatcher> = vec![&self.exact];
        for ngram in &self.ngrams {
            matchers.push(ngram);
        }
        matchers
    }

    /// Run every matcher and resolve the pooled candidates.
    ///
    /// Matchers fan out across threads; results are collected per matcher in
    /// pipeline order before pooling, so the output is deterministic.
    pub fn find_all(&self, text1: &str, text2: &str) -> Vec<SimilarityMatch> {
        let candidate_sets: Vec<Vec<SimilarityMatch>> = self
            .matchers()
            .par_iter()
            .map(|matcher| matcher.find_matches(text1, text2))
            .collect();

        OverlapResolver::merge_sets(candidate_sets)
    }
}

impl Default for StructuralMatcherSet {
    fn default() -> Self {
        Self::new()
    }
}
