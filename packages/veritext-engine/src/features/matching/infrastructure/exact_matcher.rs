//! Exact Matcher (Verbatim Substrings)
//!
//! Finds regions of the suspect text that occur verbatim in the source text,
//! growing each candidate to its maximal length.
//!
//! # Algorithm
//!
//! 1. Preprocess both texts (idempotent over already-clean input)
//! 2. Scan start positions of text1 (exclusive upper bound `len1 - min_length`)
//! 3. At each start, grow the candidate from `min_length` while text2 still
//!    contains it; record the longest hit and its source position
//! 4. On a hit, skip past the matched region; otherwise advance one char
//! 5. Resolve overlaps, longest first
//!
//! # Performance
//!
//! - **Complexity**: O(n² · m) worst case (candidate growth × substring scan)
//! - **Practical**: skip-ahead after each hit keeps common inputs fast
//!
//! # Example
//!
//! ```text
//! text1: "the industrial revolution changed everything overnight"
//! text2: "historians agree the industrial revolution changed much"
//!                        └────────── exact match ──────────┘
//! ```

use super::TextMatcher as TextMatcherTrait;
use crate::features::matching::domain::{MatchAlgorithm, OverlapResolver, SimilarityMatch};
use crate::features::normalize::TextNormalizer;

/// Verbatim substring matcher over preprocessed text
pub struct ExactMatcher {
    /// Minimum match length, in chars of preprocessed text
    min_length: usize,
}

impl Default for ExactMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ExactMatcher {
    /// Create a new matcher with the standalone default threshold
    pub fn new() -> Self {
        Self { min_length: 20 }
    }

    /// Create with a custom minimum length (the detect pipeline uses 15)
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Greedy longest-substring scan over preprocessed texts.
    ///
    /// Inputs must already be preprocessed; their alphabet is ASCII, so byte
    /// indexing is safe and offsets double as char offsets.
    fn scan(text1: &str, text2: &str, min_length: usize) -> Vec<SimilarityMatch> {
        let len1 = text1.len();
        // Exclusive bound: texts no longer than min_length yield nothing
        if len1 <= min_length || text2.is_empty() {
            return Vec::new();
        }

        let mut matches = Vec::new();
        let mut i = 0;
        while i < len1 - min_length {
            let mut best: Option<(usize, usize)> = None; // (length, source position)

            let mut len = min_length;
            while i + len <= len1 {
                let candidate = &text1[i..i + len];
                match text2.find(candidate) {
                    Some(source_pos) => {
                        best = Some((len, source_pos));
                        len += 1;
                    }
                    None => break,
                }
            }

            if let Some((len, source_pos)) = best {
                let matched = &text1[i..i + len];
                matches.push(
                    SimilarityMatch::new(1.0, matched, matched, MatchAlgorithm::ExactMatch)
                        .with_positions(i, i + len, source_pos, source_pos + len),
                );
                i += len;
            } else {
                i += 1;
            }
        }

        OverlapResolver::resolve(matches)
    }
}

impl TextMatcherTrait for ExactMatcher {
    fn name(&self) -> &'static str {
        "Exact Matcher (verbatim substrings)"
    }

    fn algorithm(&self) -> MatchAlgorithm {
        MatchAlgorithm::ExactMatch
    }

    fn find_matches(&self, text1: &str, text2: &str) -> Vec<SimilarityMatch> {
        let p1 = TextNormalizer::preprocess(text1);
        let p2 = TextNormalizer::preprocess(text2);
        Self::scan(&p1, &p2, self.min_length)
    }
}
