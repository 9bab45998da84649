//! Citation Detection and Filtering
//!
//! Finds quotes, inline citations, and reference-section entries so the
//! score combiner can exclude properly cited content and mark matches that
//! fall inside citations.
//!
//! Detection runs on the ORIGINAL, case-preserved text -- never on
//! normalizer output -- because quote marks, capitalization, and section
//! headings are exactly what the detectors look for.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (score combiner / analysis usecases)
//!           ↓
//! infrastructure/ (regex detectors + analyzer)
//!           ↓
//! domain/ (citation records, analysis aggregate, span filter)
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export domain types
pub use domain::{
    Citation, CitationAnalysis, CitationFilter, CitationKind, CitationStatistics, SourceInfo,
};

// Re-export infrastructure (the analyzer is the usual entry point)
pub use infrastructure::{
    BibliographyDetector, CitationAnalyzer, CitationDetector, ParentheticalDetector,
    QuoteDetector, ReferenceSectionDetector,
};
