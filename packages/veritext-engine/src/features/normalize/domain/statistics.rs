//! Descriptive statistics over a raw text

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::normalizer::TextNormalizer;

/// Word and sentence counts used to annotate comparison inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    /// Characters of the input as given
    pub character_count: usize,

    /// Tokens per [`TextNormalizer::split_into_words`]
    pub word_count: usize,

    /// Sentences per [`TextNormalizer::split_into_sentences`]
    pub sentence_count: usize,

    /// Rounded to the nearest whole word; 0 when there are no sentences
    pub average_words_per_sentence: usize,

    /// Distinct word tokens
    pub unique_words: usize,
}

impl TextStatistics {
    /// Compute statistics over the text as given (no preprocessing)
    pub fn from_text(text: &str) -> Self {
        let words = TextNormalizer::split_into_words(text);
        let sentences = TextNormalizer::split_into_sentences(text);
        let unique: FxHashSet<&str> = words.iter().map(String::as_str).collect();

        let average_words_per_sentence = if sentences.is_empty() {
            0
        } else {
            (words.len() as f64 / sentences.len() as f64).round() as usize
        };

        Self {
            character_count: text.chars().count(),
            word_count: words.len(),
            sentence_count: sentences.len(),
            average_words_per_sentence,
            unique_words: unique.len(),
        }
    }
}
