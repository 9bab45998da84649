//! Paraphrase Matcher (Sentence Semantics)
//!
//! Pairs sentences whose meaning overlaps while their wording diverges.
//! Near-verbatim pairs are left to the structural matchers: a pair whose
//! word overlap reaches the lexical ceiling is dropped here no matter how
//! high its semantic score.
//!
//! # Algorithm
//!
//! 1. Split both texts into sentences; skip sentences below the length floor
//! 2. Score every cross pair: `combined = 0.7 * semantic + 0.3 * jaccard`
//! 3. Keep pairs with `combined > threshold` and `jaccard < ceiling`
//! 4. Anchor each kept pair at its sentence's offset in the original text
//! 5. Resolve overlaps, longest first
//!
//! The semantic side goes through the [`SemanticScorer`] port, so an
//! embedding-backed scorer can replace the bundled token-overlap stand-in.

use std::sync::Arc;

use super::TextMatcher as TextMatcherTrait;
use crate::features::matching::domain::{
    jaccard_similarity, MatchAlgorithm, MatcherConfig, OverlapResolver, SemanticScorer,
    SimilarityMatch,
};
use crate::features::normalize::TextNormalizer;

/// Weight of the semantic score in the combined score
const SEMANTIC_WEIGHT: f64 = 0.7;

/// Weight of the lexical (Jaccard) score in the combined score
const LEXICAL_WEIGHT: f64 = 0.3;

/// Sentence-level paraphrase matcher
pub struct ParaphraseMatcher {
    /// Sentences shorter than this are skipped
    min_sentence: usize,

    /// Combined-score floor for keeping a pair (exclusive)
    threshold: f64,

    /// Lexical-overlap ceiling above which a pair is near-verbatim (exclusive)
    jaccard_ceiling: f64,

    scorer: Arc<dyn SemanticScorer>,
}

impl ParaphraseMatcher {
    /// Create with default thresholds and the given scorer
    pub fn new(scorer: Arc<dyn SemanticScorer>) -> Self {
        Self::from_config(&MatcherConfig::default(), scorer)
    }

    /// Create from configured thresholds
    pub fn from_config(config: &MatcherConfig, scorer: Arc<dyn SemanticScorer>) -> Self {
        Self {
            min_sentence: config.paraphrase_min_sentence,
            threshold: config.paraphrase_threshold,
            jaccard_ceiling: config.jaccard_ceiling,
            scorer,
        }
    }

    /// Byte offset of `sentence` in `text`.
    ///
    /// Sentence splitting only trims its pieces, so the sentence occurs
    /// verbatim and the scan finds it; a miss anchors at 0.
    fn anchor(text: &str, sentence: &str) -> usize {
        text.find(sentence).unwrap_or(0)
    }
}

impl TextMatcherTrait for ParaphraseMatcher {
    fn name(&self) -> &'static str {
        "Paraphrase Matcher (sentence semantics)"
    }

    fn algorithm(&self) -> MatchAlgorithm {
        MatchAlgorithm::SemanticParaphrase
    }

    fn find_matches(&self, text1: &str, text2: &str) -> Vec<SimilarityMatch> {
        let sentences1 = TextNormalizer::split_into_sentences(text1);
        let sentences2 = TextNormalizer::split_into_sentences(text2);

        let mut matches = Vec::new();
        for sentence1 in &sentences1 {
            if sentence1.len() < self.min_sentence {
                continue;
            }
            for sentence2 in &sentences2 {
                if sentence2.len() < self.min_sentence {
                    continue;
                }

                let semantic = self.scorer.score(sentence1, sentence2);
                let jaccard = jaccard_similarity(sentence1, sentence2);
                let combined = SEMANTIC_WEIGHT * semantic + LEXICAL_WEIGHT * jaccard;

                if combined > self.threshold && jaccard < self.jaccard_ceiling {
                    let start = Self::anchor(text1, sentence1);
                    let source_start = Self::anchor(text2, sentence2);

                    matches.push(
                        SimilarityMatch::new(
                            combined,
                            sentence1.as_str(),
                            sentence2.as_str(),
                            MatchAlgorithm::SemanticParaphrase,
                        )
                        .with_positions(
                            start,
                            start + sentence1.len(),
                            source_start,
                            source_start + sentence2.len(),
                        )
                        .with_confidence(semantic),
                    );
                }
            }
        }

        OverlapResolver::resolve(matches)
    }
}
