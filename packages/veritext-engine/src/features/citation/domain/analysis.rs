//! Citation Analysis Results

use serde::{Deserialize, Serialize};

use super::citation::{Citation, CitationKind};

/// Aggregated result of citation detection over one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationAnalysis {
    /// All kept citations, ordered by start position
    pub citations: Vec<Citation>,

    pub total_citations: usize,

    /// Kept citations of kind `quote`
    pub quoted_text: Vec<Citation>,

    /// Kept citations of kind `reference`
    pub references: Vec<Citation>,

    /// Kept citations of kind `bibliography`
    pub bibliography: Vec<Citation>,

    /// Percentage of the text covered by citations, rounded to 2 decimals
    pub citation_coverage: f64,
}

impl CitationAnalysis {
    /// Analysis of a text with no citations
    pub fn empty() -> Self {
        Self {
            citations: Vec::new(),
            total_citations: 0,
            quoted_text: Vec::new(),
            references: Vec::new(),
            bibliography: Vec::new(),
            citation_coverage: 0.0,
        }
    }

    /// Assemble an analysis from deduplicated citations.
    ///
    /// `text_len` is the length of the analyzed text; empty text yields
    /// zero coverage.
    pub fn from_citations(citations: Vec<Citation>, text_len: usize) -> Self {
        let total_cited: usize = citations.iter().map(Citation::len).sum();
        let citation_coverage = if text_len == 0 {
            0.0
        } else {
            let coverage = total_cited as f64 / text_len as f64 * 100.0;
            (coverage * 100.0).round() / 100.0
        };

        let sublist = |kind: CitationKind| -> Vec<Citation> {
            citations
                .iter()
                .filter(|c| c.kind == kind)
                .cloned()
                .collect()
        };

        Self {
            total_citations: citations.len(),
            quoted_text: sublist(CitationKind::Quote),
            references: sublist(CitationKind::Reference),
            bibliography: sublist(CitationKind::Bibliography),
            citation_coverage,
            citations,
        }
    }
}

impl Default for CitationAnalysis {
    fn default() -> Self {
        Self::empty()
    }
}

/// Summary counts over an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationStatistics {
    pub total_citations: usize,
    pub quoted_text_count: usize,
    pub parenthetical_citations: usize,
    pub reference_count: usize,
    pub bibliography_count: usize,
    pub citation_coverage: f64,

    /// Mean citation span length, rounded to the nearest char; 0 for none
    pub average_citation_length: usize,
}

impl CitationStatistics {
    pub fn from_analysis(analysis: &CitationAnalysis) -> Self {
        let average_citation_length = if analysis.citations.is_empty() {
            0
        } else {
            let total: usize = analysis.citations.iter().map(Citation::len).sum();
            (total as f64 / analysis.citations.len() as f64).round() as usize
        };

        Self {
            total_citations: analysis.total_citations,
            quoted_text_count: analysis.quoted_text.len(),
            parenthetical_citations: analysis
                .citations
                .iter()
                .filter(|c| c.kind == CitationKind::Parenthetical)
                .count(),
            reference_count: analysis.references.len(),
            bibliography_count: analysis.bibliography.len(),
            citation_coverage: analysis.citation_coverage,
            average_citation_length,
        }
    }
}
