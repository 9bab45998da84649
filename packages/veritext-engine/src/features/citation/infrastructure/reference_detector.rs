//! Reference-Section Detector
//!
//! Finds a references-style heading and carves the section body into
//! entries. Entry fields (author, year, title, doi, url) are parsed
//! best-effort by [`parse_reference_entry`], which the bibliography
//! detector shares.
//!
//! # Position bookkeeping
//!
//! Entry spans come from a cursor that starts at the SECTION MATCH (the
//! heading), advancing `entry.len() + 1` per kept entry. The first entry's
//! span therefore reaches back over the heading line. Stored reports and
//! the exclusion filter rely on these spans staying put.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CitationDetector;
use crate::features::citation::domain::{Citation, CitationKind, SourceInfo};

/// Heading plus lazily-terminated body.
///
/// The body stops at a blank line, a letter-opened line (case folded by
/// `(?i)`), a numbered line, a Roman-numeral line, or end of text.
static REFERENCE_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)(?:references|bibliography|works\s+cited|sources)\s*:?\s*\n(.*?)(?:\n\n|\n[A-Z]|\n\d+\.|\n[IVX]+\.|\z)",
    )
    .unwrap()
});

/// A new entry opens after a newline with `1.`, `[`, or `word,`
static ENTRY_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.|\[|[A-Za-z0-9_]+,)").unwrap());

// Entry field extractors
static AUTHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-z]+(?:,\s*[A-Z]\.?)*(?:\s+[A-Z][a-z]+)*)").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{4})\)|(\d{4})").unwrap());
static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"|'([^']+)'|_([^_]+)_"#).unwrap());
static DOI: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)doi:\s*([^\s,]+)").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s,)]+").unwrap());

/// Entries at or below this trimmed length are noise, not references
const MIN_ENTRY_LENGTH: usize = 20;

/// Reference-section citation detector
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceSectionDetector;

impl ReferenceSectionDetector {
    pub fn new() -> Self {
        Self
    }
}

impl CitationDetector for ReferenceSectionDetector {
    fn name(&self) -> &'static str {
        "Reference Detector (section entries)"
    }

    fn kind(&self) -> CitationKind {
        CitationKind::Reference
    }

    fn detect(&self, text: &str) -> Vec<Citation> {
        let Some(captures) = REFERENCE_SECTION.captures(text) else {
            return Vec::new();
        };
        let (Some(section), Some(body)) = (captures.get(0), captures.get(1)) else {
            return Vec::new();
        };

        collect_entries(
            body.as_str(),
            section.start(),
            &ENTRY_BOUNDARY,
            CitationKind::Reference,
            "ref",
        )
    }
}

/// Walk a section body: split into entries, drop short ones, assign
/// heading-anchored spans, parse source details.
pub(super) fn collect_entries(
    body: &str,
    section_start: usize,
    boundary: &Regex,
    kind: CitationKind,
    id_prefix: &str,
) -> Vec<Citation> {
    let entries: Vec<&str> = split_entries(body, boundary)
        .into_iter()
        .filter(|entry| entry.trim().len() > MIN_ENTRY_LENGTH)
        .collect();

    let mut citations = Vec::new();
    let mut cursor = section_start;
    for (index, entry) in entries.iter().enumerate() {
        let trimmed = entry.trim();
        citations.push(
            Citation::new(
                format!("{}-{}", id_prefix, index),
                trimmed,
                kind,
                cursor,
                cursor + trimmed.len(),
            )
            .with_source_info(parse_reference_entry(trimmed)),
        );
        cursor += entry.len() + 1; // +1 for the newline the split consumed
    }
    citations
}

/// Lookahead-style split: cut at a newline iff the remainder opens a new
/// entry. The newline itself belongs to neither piece.
pub(super) fn split_entries<'a>(body: &'a str, boundary: &Regex) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    for (pos, _) in body.match_indices('\n') {
        if boundary.is_match(&body[pos + 1..]) {
            pieces.push(&body[piece_start..pos]);
            piece_start = pos + 1;
        }
    }
    pieces.push(&body[piece_start..]);
    pieces
}

/// Best-effort field extraction from one reference entry
pub(super) fn parse_reference_entry(entry: &str) -> SourceInfo {
    let mut info = SourceInfo::default();

    if let Some(captures) = AUTHOR.captures(entry) {
        info.author = captures.get(1).map(|m| m.as_str().to_string());
    }
    // Parenthesized year first, bare year as fallback
    if let Some(captures) = YEAR.captures(entry) {
        info.year = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str().to_string());
    }
    // Title in double quotes, single quotes, or underscores
    if let Some(captures) = TITLE.captures(entry) {
        info.title = captures
            .get(1)
            .or_else(|| captures.get(2))
            .or_else(|| captures.get(3))
            .map(|m| m.as_str().to_string());
    }
    if let Some(captures) = DOI.captures(entry) {
        info.doi = captures.get(1).map(|m| m.as_str().to_string());
    }
    if let Some(found) = URL.find(entry) {
        info.url = Some(found.as_str().to_string());
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // BASIC FUNCTIONALITY
    // =====================================================================

    #[test]
    fn test_bracket_numbered_entries() {
        let detector = ReferenceSectionDetector::new();
        let text = "Essay body goes here.\n\nReferences:\n\
                    [1] Smith, J. (2020). \"Climate Patterns\". doi: 10.1000/xyz\n\
                    [2] Jones, K. (2019). 'Ocean Current Dynamics'. https://example.org/currents\n";

        let citations = detector.detect(text);

        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].id, "ref-0");
        assert_eq!(citations[1].id, "ref-1");
        assert!(citations[0].text.starts_with("[1] Smith"));
        assert!(citations[1].text.starts_with("[2] Jones"));

        // The cursor starts at the heading, not at the first entry
        assert_eq!(
            citations[0].start_position,
            text.find("References").unwrap()
        );
        assert!(citations[1].start_position > citations[0].start_position);
    }

    #[test]
    fn test_entry_field_parsing() {
        let detector = ReferenceSectionDetector::new();
        let text = "References:\n\
                    [1] Smith, J. (2020). \"Climate Patterns\". doi: 10.1000/xyz\n\
                    [2] Jones, K. (2019). 'Ocean Current Dynamics'. https://example.org/currents\n";

        let citations = detector.detect(text);
        assert_eq!(citations.len(), 2);

        let first = citations[0].source_info.as_ref().unwrap();
        assert_eq!(first.year.as_deref(), Some("2020"));
        assert_eq!(first.title.as_deref(), Some("Climate Patterns"));
        assert_eq!(first.doi.as_deref(), Some("10.1000/xyz"));

        let second = citations[1].source_info.as_ref().unwrap();
        assert_eq!(second.year.as_deref(), Some("2019"));
        assert_eq!(second.title.as_deref(), Some("Ocean Current Dynamics"));
        assert_eq!(second.url.as_deref(), Some("https://example.org/currents"));
    }

    #[test]
    fn test_parse_reference_entry_author_forms() {
        let info = parse_reference_entry("Smith, J. (2020). \"A Study of Things\". Journal.");
        assert_eq!(info.author.as_deref(), Some("Smith, J."));
        assert_eq!(info.year.as_deref(), Some("2020"));

        // Initials chain stops where the comma-initial shape does
        let info = parse_reference_entry("Brown, A. 2018. _Underscored Title_ somewhere.");
        assert_eq!(info.author.as_deref(), Some("Brown, A."));
        assert_eq!(info.year.as_deref(), Some("2018"));
        assert_eq!(info.title.as_deref(), Some("Underscored Title"));
    }

    #[test]
    fn test_parse_reference_entry_no_fields() {
        let info = parse_reference_entry("[3] an all lowercase entry without structure");
        assert!(info.author.is_none());
        assert!(info.year.is_none());
        assert!(info.title.is_none());
    }

    #[test]
    fn test_split_entries_boundaries() {
        let boundary = Regex::new(r"^(?:\d+\.|\[|[A-Za-z0-9_]+,)").unwrap();
        let body = "[1] first entry line\n[2] second entry line\nno boundary continuation";

        let pieces = split_entries(body, &boundary);

        assert_eq!(
            pieces,
            vec![
                "[1] first entry line",
                "[2] second entry line\nno boundary continuation",
            ]
        );
    }

    #[test]
    fn test_works_cited_heading() {
        let detector = ReferenceSectionDetector::new();
        let text = "Works Cited:\n[1] Miller, T. (2015). \"Glacier Retreat Records\".\n";

        let citations = detector.detect(text);
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].kind, CitationKind::Reference);
    }

    // =====================================================================
    // EDGE CASES
    // =====================================================================

    #[test]
    fn test_no_section() {
        let detector = ReferenceSectionDetector::new();
        assert!(detector
            .detect("Plain text without any reference section at all.")
            .is_empty());
    }

    #[test]
    fn test_short_entries_dropped() {
        let detector = ReferenceSectionDetector::new();
        let text = "References:\n[1] too short\n";
        assert!(detector.detect(text).is_empty());
    }

    #[test]
    fn test_empty_body() {
        let detector = ReferenceSectionDetector::new();
        assert!(detector.detect("References:\n").is_empty());
    }
}
