//! Phrase Scan (Suspect Text vs. Page Body)
//!
//! Substring scan shared by web match providers: finds phrases of the
//! suspect text inside a fetched page body and scores them by length.
//!
//! # Algorithm
//!
//! 1. Preprocess both the suspect text and the page body
//! 2. Scan start positions of the suspect text (exclusive bound
//!    `len - MIN_PHRASE_LENGTH`)
//! 3. At each start, grow the candidate from `MIN_PHRASE_LENGTH` up to
//!    `MAX_PHRASE_LENGTH` while the body still contains it; emit the longest
//!    hit with `similarity = min(1.0, length / 100)`
//! 4. On a hit, skip past the matched region; otherwise advance one char
//! 5. Drop overlapping hits, highest similarity first, and cap the result
//!    at [`MAX_MATCHES_PER_SOURCE`]

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::domain::WebMatch;
use crate::features::normalize::TextNormalizer;

/// Shortest phrase worth attributing to a web source
pub const MIN_PHRASE_LENGTH: usize = 20;

/// Growth cap per candidate; at 100+ chars similarity saturates at 1.0 anyway
pub const MAX_PHRASE_LENGTH: usize = 200;

/// Per-source cap after overlap filtering
pub const MAX_MATCHES_PER_SOURCE: usize = 10;

/// Probe sentence bounds: long enough to be distinctive, short enough to
/// survive as a single search query
const MIN_PROBE_LENGTH: usize = 50;
const MAX_PROBE_LENGTH: usize = 200;
const PROBE_TRUNCATE: usize = 100;
const MAX_PROBES: usize = 3;

static FILLER_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:the|a|an|and|or|but|in|on|at|to|for|of|with|by)\b").unwrap()
});

/// Scan a page body for phrases of the suspect text.
///
/// Both inputs are preprocessed on entry; `url` and `title` are carried into
/// every emitted match. Results are overlap-filtered and capped.
pub fn scan_for_phrases(text: &str, body: &str, title: &str, url: &str) -> Vec<WebMatch> {
    let suspect = TextNormalizer::preprocess(text);
    let source = TextNormalizer::preprocess(body);

    let len = suspect.len();
    // Exclusive bound: suspect texts no longer than the minimum yield nothing
    if len <= MIN_PHRASE_LENGTH || source.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut i = 0;
    while i < len - MIN_PHRASE_LENGTH {
        let mut best: Option<usize> = None;

        let cap = MAX_PHRASE_LENGTH.min(len - i);
        let mut phrase_len = MIN_PHRASE_LENGTH;
        while phrase_len <= cap {
            // Preprocessed text is ASCII, so byte slicing is safe
            let candidate = &suspect[i..i + phrase_len];
            if source.contains(candidate) {
                best = Some(phrase_len);
                phrase_len += 1;
            } else {
                break;
            }
        }

        if let Some(phrase_len) = best {
            let phrase = &suspect[i..i + phrase_len];
            matches.push(WebMatch {
                url: url.to_string(),
                title: title.to_string(),
                matched_text: phrase.to_string(),
                source_text: phrase.to_string(),
                similarity: (phrase_len as f64 / 100.0).min(1.0),
                start_position: i,
                end_position: i + phrase_len,
            });
            i += phrase_len;
        } else {
            i += 1;
        }
    }

    dedup_web_matches(matches)
}

/// Drop overlapping matches, keeping the highest-similarity ones, and cap
/// the result at [`MAX_MATCHES_PER_SOURCE`].
pub fn dedup_web_matches(mut matches: Vec<WebMatch>) -> Vec<WebMatch> {
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<WebMatch> = Vec::new();
    for candidate in matches {
        if kept.len() >= MAX_MATCHES_PER_SOURCE {
            break;
        }
        if kept.iter().all(|existing| !existing.overlaps(&candidate)) {
            kept.push(candidate);
        }
    }
    kept
}

/// Sentences of `text` distinctive enough to probe a source corpus with:
/// longer than 50 chars, shorter than 200, truncated to 100, first 3 only.
pub fn probe_sentences(text: &str) -> Vec<String> {
    TextNormalizer::split_into_sentences(text)
        .into_iter()
        .filter(|sentence| sentence.len() > MIN_PROBE_LENGTH && sentence.len() < MAX_PROBE_LENGTH)
        .take(MAX_PROBES)
        .map(|sentence| sentence.chars().take(PROBE_TRUNCATE).collect())
        .collect()
}

/// Probe sentences as exact-phrase queries for a search backend
pub fn build_search_queries(text: &str) -> Vec<String> {
    probe_sentences(text)
        .into_iter()
        .map(|probe| format!("\"{probe}\""))
        .collect()
}

/// Key phrases of `text` for looser discovery queries: mid-length sentences
/// with filler words removed, first `max_phrases` only.
pub fn extract_key_phrases(text: &str, max_phrases: usize) -> Vec<String> {
    TextNormalizer::split_into_sentences(text)
        .into_iter()
        .filter(|sentence| sentence.len() > 30 && sentence.len() < 150)
        .map(|sentence| FILLER_WORDS.replace_all(&sentence, "").trim().to_string())
        .filter(|phrase| phrase.len() > 20)
        .take(max_phrases)
        .collect()
}
