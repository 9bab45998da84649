//! N-gram Matcher (Shared Word Windows)
//!
//! Finds consecutive word windows of the suspect text that occur verbatim in
//! the source text. Near-verbatim copying survives this pass even when small
//! edits break the exact matcher's substrings.
//!
//! # Algorithm
//!
//! 1. Tokenize both texts into words
//! 2. Build n-word windows joined with single spaces
//! 3. Index the source windows by first occurrence
//! 4. Every suspect window present in the index becomes a candidate with
//!    fixed similarity 0.8
//! 5. Resolve overlaps, longest first
//!
//! # Positions
//!
//! Positions are reconstructed from cumulative word-join lengths
//! (`join(words[..i], " ").len()`), not tracked through normalization. They
//! drift from the raw text when the input carried punctuation or extra
//! whitespace; adequate for scoring, not for exact-offset highlighting.

use rustc_hash::FxHashMap;

use super::TextMatcher as TextMatcherTrait;
use crate::features::matching::domain::{MatchAlgorithm, OverlapResolver, SimilarityMatch};
use crate::features::normalize::TextNormalizer;

/// Similarity assigned to every n-gram hit
const NGRAM_SIMILARITY: f64 = 0.8;

/// Word-window matcher for a fixed window size
pub struct NgramMatcher {
    /// Window size in words
    n: usize,

    /// Tag stamped on produced matches
    algorithm: MatchAlgorithm,
}

impl NgramMatcher {
    /// Create a matcher for a supported window size (3, 4, or 5)
    pub fn new(n: usize) -> Option<Self> {
        MatchAlgorithm::ngram(n).map(|algorithm| Self { n, algorithm })
    }

    /// Window size in words
    pub fn window_size(&self) -> usize {
        self.n
    }

    /// Consecutive n-word windows joined with single spaces
    fn build_ngrams(words: &[String], n: usize) -> Vec<String> {
        if words.len() < n {
            return Vec::new();
        }
        words.windows(n).map(|window| window.join(" ")).collect()
    }

    /// Length of `join(words[..count], " ")`
    ///
    /// This is the approximate offset of word `count` in the joined text; it
    /// omits the separator between the prefix and the window itself.
    fn joined_prefix_len(words: &[String], count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        words[..count].iter().map(String::len).sum::<usize>() + count - 1
    }
}

impl TextMatcherTrait for NgramMatcher {
    fn name(&self) -> &'static str {
        match self.n {
            3 => "3-gram Matcher (word windows)",
            4 => "4-gram Matcher (word windows)",
            _ => "5-gram Matcher (word windows)",
        }
    }

    fn algorithm(&self) -> MatchAlgorithm {
        self.algorithm
    }

    fn find_matches(&self, text1: &str, text2: &str) -> Vec<SimilarityMatch> {
        let words1 = TextNormalizer::split_into_words(text1);
        let words2 = TextNormalizer::split_into_words(text2);
        if words1.len() < self.n || words2.len() < self.n {
            return Vec::new();
        }

        let ngrams1 = Self::build_ngrams(&words1, self.n);
        let ngrams2 = Self::build_ngrams(&words2, self.n);

        // First occurrence of each source window
        let mut source_index: FxHashMap<&str, usize> = FxHashMap::default();
        for (j, gram) in ngrams2.iter().enumerate() {
            source_index.entry(gram.as_str()).or_insert(j);
        }

        let mut matches = Vec::new();
        for (i, gram) in ngrams1.iter().enumerate() {
            if let Some(&j) = source_index.get(gram.as_str()) {
                let start = Self::joined_prefix_len(&words1, i);
                let source_start = Self::joined_prefix_len(&words2, j);
                let len = gram.len();
                let m = SimilarityMatch::new(
                    NGRAM_SIMILARITY,
                    gram.clone(),
                    gram.clone(),
                    self.algorithm,
                )
                .with_positions(start, start + len, source_start, source_start + len);
                matches.push(m);
            }
        }

        OverlapResolver::resolve(matches)
    }
}
