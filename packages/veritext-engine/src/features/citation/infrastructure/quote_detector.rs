//! Quote Detector (Quotation Marks)
//!
//! Finds quoted runs in the original text. Double-quoted runs need 10 inner
//! chars; single-quoted runs need 20, which keeps apostrophe-to-apostrophe
//! spans across normal prose from qualifying.
//!
//! The citation span covers the quote marks; `text` carries only the inner
//! capture.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CitationDetector;
use crate::features::citation::domain::{Citation, CitationKind};

/// Double-quoted run with at least 10 inner chars (non-greedy)
static DOUBLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]{10,}?)""#).unwrap());

/// Single-quoted run with at least 20 inner chars (non-greedy)
static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"'([^']{20,}?)'").unwrap());

/// Quotation-mark citation detector
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteDetector;

impl QuoteDetector {
    pub fn new() -> Self {
        Self
    }
}

impl CitationDetector for QuoteDetector {
    fn name(&self) -> &'static str {
        "Quote Detector (quotation marks)"
    }

    fn kind(&self) -> CitationKind {
        CitationKind::Quote
    }

    fn detect(&self, text: &str) -> Vec<Citation> {
        let mut citations = Vec::new();

        // Ids continue across the double and single pass
        for pattern in [&*DOUBLE_QUOTED, &*SINGLE_QUOTED] {
            for captures in pattern.captures_iter(text) {
                let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                    continue;
                };
                citations.push(Citation::new(
                    format!("quote-{}", citations.len()),
                    inner.as_str(),
                    CitationKind::Quote,
                    whole.start(),
                    whole.end(),
                ));
            }
        }

        citations
    }
}
