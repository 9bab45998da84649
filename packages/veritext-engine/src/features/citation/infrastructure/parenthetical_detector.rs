//! Parenthetical Citation Detector
//!
//! Inline author-year citations in round or square brackets, plus numeric
//! bracket citations. Patterns run in a fixed order and ids continue across
//! them; the analyzer's dedup resolves any double hits.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CitationDetector;
use crate::features::citation::domain::{Citation, CitationKind, SourceInfo};

/// Author-year and numeric citation shapes, in application order
static CITATION_PATTERNS: Lazy<[Regex; 5]> = Lazy::new(|| {
    [
        // (Author, 2020)
        Regex::new(r"\(([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s*(\d{4})\)").unwrap(),
        // (Author 2020)
        Regex::new(r"\(([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(\d{4})\)").unwrap(),
        // (Author et al., 2020)
        Regex::new(r"\(([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+et\s+al\.),\s*(\d{4})\)").unwrap(),
        // [Author, 2020]
        Regex::new(r"\[([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s*(\d{4})\]").unwrap(),
        // [1], [2], ... numbered citations
        Regex::new(r"\[(\d+)\]").unwrap(),
    ]
});

/// Inline citation detector
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentheticalDetector;

impl ParentheticalDetector {
    pub fn new() -> Self {
        Self
    }
}

impl CitationDetector for ParentheticalDetector {
    fn name(&self) -> &'static str {
        "Parenthetical Detector (inline citations)"
    }

    fn kind(&self) -> CitationKind {
        CitationKind::Parenthetical
    }

    fn detect(&self, text: &str) -> Vec<Citation> {
        let mut citations = Vec::new();

        for pattern in CITATION_PATTERNS.iter() {
            for captures in pattern.captures_iter(text) {
                let Some(whole) = captures.get(0) else {
                    continue;
                };

                // Author and year only when both groups captured; numeric
                // citations carry an empty source_info
                let mut source_info = SourceInfo::default();
                if let (Some(author), Some(year)) = (captures.get(1), captures.get(2)) {
                    source_info.author = Some(author.as_str().to_string());
                    source_info.year = Some(year.as_str().to_string());
                }

                citations.push(
                    Citation::new(
                        format!("ref-{}", citations.len()),
                        whole.as_str(),
                        CitationKind::Parenthetical,
                        whole.start(),
                        whole.end(),
                    )
                    .with_source_info(source_info),
                );
            }
        }

        citations
    }
}
