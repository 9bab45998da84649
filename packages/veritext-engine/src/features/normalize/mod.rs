//! Text Normalization
//!
//! Canonicalizes raw document text for the structural matchers and provides
//! the word/sentence tokenization shared by every downstream feature.
//!
//! Citation parsing deliberately bypasses this feature and runs on the
//! original, case-preserved text.

pub mod domain;

pub use domain::{TextNormalizer, TextStatistics};
