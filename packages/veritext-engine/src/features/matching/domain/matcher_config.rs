//! Matcher Configuration
//!
//! Centralized thresholds for the structural and paraphrase matchers.
//! Defaults reproduce the standard pipeline; overrides go through the
//! builder-style setters and are checked by [`MatcherConfig::validate`].

use crate::shared::models::{EngineError, Result};

/// Detection thresholds shared by the matcher suite
///
/// # Example
/// ```
/// use veritext_engine::features::matching::domain::MatcherConfig;
///
/// let config = MatcherConfig::default().with_exact_min_length(25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Minimum length of an exact match, in chars of preprocessed text
    pub exact_min_length: usize,

    /// Word-window sizes for the n-gram passes
    pub ngram_sizes: Vec<usize>,

    /// Minimum sentence length considered by the paraphrase detector
    pub paraphrase_min_sentence: usize,

    /// Combined-score floor for keeping a paraphrase pair (exclusive)
    pub paraphrase_threshold: f64,

    /// Lexical-overlap ceiling above which a pair is near-verbatim and
    /// left to the structural matchers (exclusive)
    pub jaccard_ceiling: f64,
}

impl MatcherConfig {
    pub fn with_exact_min_length(mut self, min_length: usize) -> Self {
        self.exact_min_length = min_length;
        self
    }

    pub fn with_ngram_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.ngram_sizes = sizes;
        self
    }

    pub fn with_paraphrase_min_sentence(mut self, min_sentence: usize) -> Self {
        self.paraphrase_min_sentence = min_sentence;
        self
    }

    pub fn with_paraphrase_threshold(mut self, threshold: f64) -> Self {
        self.paraphrase_threshold = threshold;
        self
    }

    pub fn with_jaccard_ceiling(mut self, ceiling: f64) -> Self {
        self.jaccard_ceiling = ceiling;
        self
    }

    /// Check that thresholds are usable before running the suite
    pub fn validate(&self) -> Result<()> {
        if self.exact_min_length == 0 {
            return Err(EngineError::invalid_input(
                "exact_min_length must be at least 1",
            ));
        }
        if self.ngram_sizes.is_empty() {
            return Err(EngineError::invalid_input("ngram_sizes must not be empty"));
        }
        // Window sizes are bounded by the fixed algorithm tag set
        if self.ngram_sizes.iter().any(|&n| !(3..=5).contains(&n)) {
            return Err(EngineError::invalid_input(
                "ngram window sizes must be 3, 4, or 5",
            ));
        }
        if !(0.0..=1.0).contains(&self.paraphrase_threshold) {
            return Err(EngineError::invalid_input(
                "paraphrase_threshold must be within [0.0, 1.0]",
            ));
        }
        if !(0.0..=1.0).contains(&self.jaccard_ceiling) {
            return Err(EngineError::invalid_input(
                "jaccard_ceiling must be within [0.0, 1.0]",
            ));
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            exact_min_length: 15,
            ngram_sizes: vec![3, 4, 5],
            paraphrase_min_sentence: 30,
            paraphrase_threshold: 0.6,
            jaccard_ceiling: 0.8,
        }
    }
}
