//! Web Source Matching
//!
//! Finds phrases of a suspect text that also appear in web sources. The
//! provider boundary is a port: the engine depends only on
//! [`WebMatchProvider`] and treats provider failure as an empty result,
//! bounded by its own timeout.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (score combiner / analysis usecases)
//!           ↓
//! infrastructure/ (phrase scan + corpus provider)
//!           ↓
//! domain/ (web match record, provider port)
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export domain types
pub use domain::{WebMatch, WebMatchProvider};

// Re-export infrastructure (providers reuse the phrase scan)
pub use infrastructure::{
    build_search_queries, dedup_web_matches, extract_key_phrases, scan_for_phrases,
    CorpusWebProvider, WebPage,
};
