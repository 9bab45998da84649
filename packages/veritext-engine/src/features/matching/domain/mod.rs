//! Matching Domain Models
//!
//! Pure business logic layer for textual similarity matching.
//! Contains the match record, algorithm tags, similarity metrics, and
//! overlap resolution with no I/O.
//!
//! # Architecture
//!
//! ```text
//! domain/
//! ├── match_algorithm.rs   # Algorithm and source-type tags
//! ├── similarity_match.rs  # Matched region with provenance
//! ├── metrics.rs           # Cosine / Jaccard whole-text metrics
//! ├── overlap_resolver.rs  # Longest-first disjoint-span selection
//! ├── matcher_config.rs    # Thresholds for the matcher suite
//! └── ports.rs             # SemanticScorer port + default impl
//! ```

pub mod match_algorithm;
pub mod matcher_config;
pub mod metrics;
pub mod overlap_resolver;
pub mod ports;
pub mod similarity_match;

// Re-exports for convenience
pub use match_algorithm::{MatchAlgorithm, SourceType};
pub use matcher_config::MatcherConfig;
pub use metrics::{cosine_similarity, jaccard_similarity};
pub use overlap_resolver::OverlapResolver;
pub use ports::{SemanticScorer, TokenOverlapScorer};
pub use similarity_match::SimilarityMatch;
