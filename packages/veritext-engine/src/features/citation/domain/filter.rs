//! Citation-Aware Text Filtering
//!
//! Blanks cited regions before similarity analysis and answers "is this
//! span cited" queries for match marking. Blanking preserves text length,
//! so every downstream offset stays valid.

use super::citation::Citation;

/// Containment tests and span blanking over detected citations
pub struct CitationFilter;

impl CitationFilter {
    /// True iff some citation FULLY CONTAINS `[start, end)`.
    ///
    /// Partial overlap never counts as cited.
    pub fn is_text_cited(start: usize, end: usize, citations: &[Citation]) -> bool {
        citations.iter().any(|c| c.contains(start, end))
    }

    /// Replace each citation span with spaces, preserving text length.
    ///
    /// Citations are processed by start descending so earlier replacements
    /// cannot shift later offsets. Spans that run past the text or cut a
    /// char boundary are skipped rather than truncated.
    pub fn exclude_cited_content(text: &str, citations: &[Citation]) -> String {
        let mut sorted: Vec<&Citation> = citations.iter().collect();
        sorted.sort_by(|a, b| b.start_position.cmp(&a.start_position));

        let mut filtered = text.to_string();
        for citation in sorted {
            let start = citation.start_position;
            let end = citation.end_position;
            if start >= end
                || end > filtered.len()
                || !filtered.is_char_boundary(start)
                || !filtered.is_char_boundary(end)
            {
                continue;
            }
            filtered.replace_range(start..end, &" ".repeat(end - start));
        }
        filtered
    }
}
