//! Document Analysis Usecases
//!
//! Store-backed orchestration on top of the similarity engine: pairwise
//! comparison, quick checks of raw text, corpus-wide analysis of one
//! document, batch pair runs, and one-against-all corpus ranking. Long
//! operations report progress through a listener port.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (HTTP handlers / CLI)
//!           ↓
//! application/ (analysis service)
//!           ↓
//! domain/ (report shapes, progress port)
//! ```

pub mod application;
pub mod domain;

// Re-export domain types
pub use domain::{
    AnalysisReport, BatchComparisonReport, BatchPairResult, BatchSummary, ComparisonReport,
    CorpusComparisonReport, CorpusComparisonRow, DocumentProfile, DocumentRef, NoopListener,
    ProgressListener, ProgressUpdate, QuickCheckReport,
};

// Re-export the service (the usual entry point)
pub use application::AnalysisService;
