//! Citation Detection Infrastructure
//!
//! Implements the detector family behind citation analysis:
//! - Quote: text inside quotation marks
//! - Parenthetical: inline author-year and numeric citations
//! - Reference section: entries under a references-style heading
//! - Bibliography: entries under a bibliography heading
//!
//! Detection runs over the ORIGINAL, case-preserved text; spans index into
//! it directly.

use crate::features::citation::domain::{Citation, CitationAnalysis, CitationKind};

pub mod bibliography_detector;
pub mod parenthetical_detector;
pub mod quote_detector;
pub mod reference_detector;

pub use bibliography_detector::BibliographyDetector;
pub use parenthetical_detector::ParentheticalDetector;
pub use quote_detector::QuoteDetector;
pub use reference_detector::ReferenceSectionDetector;

/// Citation detector trait
///
/// All detectors implement this interface for uniform API
pub trait CitationDetector: Send + Sync {
    /// Get detector name
    fn name(&self) -> &'static str;

    /// Kind of citation this detector produces
    fn kind(&self) -> CitationKind;

    /// Detect citations in `text`
    fn detect(&self, text: &str) -> Vec<Citation>;
}

/// Runs the full detector family and assembles one analysis
pub struct CitationAnalyzer {
    detectors: Vec<Box<dyn CitationDetector>>,
}

impl CitationAnalyzer {
    /// Quote, parenthetical, reference, and bibliography detectors in order
    pub fn new() -> Self {
        Self {
            detectors: vec![
                Box::new(QuoteDetector::new()),
                Box::new(ParentheticalDetector::new()),
                Box::new(ReferenceSectionDetector::new()),
                Box::new(BibliographyDetector::new()),
            ],
        }
    }

    /// Custom detector set; pool order decides which citation survives when
    /// two start at the same offset
    pub fn with_detectors(detectors: Vec<Box<dyn CitationDetector>>) -> Self {
        Self { detectors }
    }

    /// Detect citations in `text` and compute coverage
    pub fn analyze(&self, text: &str) -> CitationAnalysis {
        let mut pooled = Vec::new();
        for detector in &self.detectors {
            pooled.extend(detector.detect(text));
        }

        let unique = Self::dedup(pooled);
        CitationAnalysis::from_citations(unique, text.len())
    }

    /// Earliest-start-wins selection of non-overlapping citations.
    ///
    /// The sort is stable, so citations sharing a start keep pool order.
    fn dedup(mut citations: Vec<Citation>) -> Vec<Citation> {
        citations.sort_by_key(|c| c.start_position);

        let mut kept: Vec<Citation> = Vec::new();
        for citation in citations {
            if !kept.iter().any(|existing| citation.overlaps(existing)) {
                kept.push(citation);
            }
        }
        kept
    }
}

impl Default for CitationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
