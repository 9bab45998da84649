//! Text normalization
//!
//! Every structural matcher compares preprocessed text; citation parsing is
//! the exception and receives the original, case-preserved text.
//!
//! # Pipeline
//!
//! ```text
//! raw text → collapse whitespace → strip punctuation → lowercase → trim
//! ```
//!
//! The pass order is observable: stripping runs after whitespace collapsing,
//! so a removed character between two spaces leaves a double space. Offsets
//! into the output are stable and callers rely on that.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// ASCII alphanumerics, underscore, whitespace and sentence punctuation survive
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^A-Za-z0-9_\s.,!?;:()\-'"]"#).unwrap());

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Stateless text canonicalization shared by all matchers
pub struct TextNormalizer;

impl TextNormalizer {
    /// Normalize text for substring and n-gram comparison.
    ///
    /// Idempotent over already-clean text. The output alphabet is ASCII, so
    /// byte offsets into it double as character offsets.
    pub fn preprocess(text: &str) -> String {
        let collapsed = WHITESPACE_RUN.replace_all(text, " ");
        let stripped = DISALLOWED.replace_all(&collapsed, "");
        stripped.to_lowercase().trim().to_string()
    }

    /// Split into sentences on runs of `.`, `!`, `?`.
    ///
    /// Pieces are trimmed; pieces of 10 chars or fewer are dropped. The input
    /// is used as given (no preprocessing).
    pub fn split_into_sentences(text: &str) -> Vec<String> {
        SENTENCE_BREAK
            .split(text)
            .map(str::trim)
            .filter(|sentence| sentence.len() > 10)
            .map(String::from)
            .collect()
    }

    /// Split into lowercase word tokens.
    ///
    /// Tokens are whitespace-separated, stripped of non-`[A-Za-z0-9_]`
    /// characters, lowercased; tokens of 2 chars or fewer are dropped.
    pub fn split_into_words(text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|token| NON_WORD.replace_all(token, "").to_lowercase())
            .filter(|word| word.len() > 2)
            .collect()
    }
}
