//! Web Search Infrastructure
//!
//! The phrase scan shared by providers, plus the bundled corpus-backed
//! provider. Live search backends implement [`WebMatchProvider`] themselves
//! and reuse [`phrase_scan`] for the body-side scan.
//!
//! [`WebMatchProvider`]: super::domain::WebMatchProvider

pub mod corpus_provider;
pub mod phrase_scan;

pub use corpus_provider::{CorpusWebProvider, WebPage};
pub use phrase_scan::{
    build_search_queries, dedup_web_matches, extract_key_phrases, probe_sentences,
    scan_for_phrases,
};
