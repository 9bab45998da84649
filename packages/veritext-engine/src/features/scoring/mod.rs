//! Score Combining
//!
//! Turns matcher output, similarity metrics, and citation analysis into one
//! result: an overall score on the 0..100 scale, per-component scores, the
//! kept matches, and aggregate statistics.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (analysis usecases / embedding API)
//!           ↓
//! application/ (similarity engine)
//!           ↓
//! domain/ (result, statistics, options, risk bands)
//! ```

pub mod application;
pub mod domain;

// Re-export domain types
pub use domain::{
    AlgorithmScores, AnalysisOptions, CitationTotals, MatchStatistics, RiskLevel,
    SimilarityResult, SourceBreakdown,
};

// Re-export the engine (the usual entry point)
pub use application::SimilarityEngine;
