//! Corpus Web Provider
//!
//! [`WebMatchProvider`] over a pre-fetched page corpus. Stands in for a live
//! search backend: probe sentences of the suspect text play the role of
//! exact-phrase queries, and a page "responds" when its body contains one.
//!
//! # Flow
//!
//! ```text
//! suspect text → probe sentences → qualifying pages (≤ max_sources)
//!                                        │
//!                                        ▼
//!                          phrase scan per page → pooled matches
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::super::domain::{WebMatch, WebMatchProvider};
use super::phrase_scan::{probe_sentences, scan_for_phrases};
use crate::features::normalize::TextNormalizer;
use crate::shared::models::Result;

/// Bodies at or under this length are noise (error pages, stubs), not sources
const MIN_BODY_LENGTH: usize = 100;

/// One pre-fetched page of the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    pub url: String,
    pub title: String,
    pub body: String,
}

impl WebPage {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// In-process web match provider over an injected page corpus
pub struct CorpusWebProvider {
    pages: Vec<WebPage>,
}

impl CorpusWebProvider {
    pub fn new(pages: Vec<WebPage>) -> Self {
        Self { pages }
    }

    pub fn empty() -> Self {
        Self { pages: Vec::new() }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages worth scanning for this text: thin bodies are skipped, and a
    /// page qualifies iff its body contains one of the probe sentences.
    fn candidate_pages(&self, probes: &[String]) -> Vec<&WebPage> {
        let probes: Vec<String> = probes
            .iter()
            .map(|probe| TextNormalizer::preprocess(probe))
            .collect();

        self.pages
            .iter()
            .filter(|page| {
                if page.body.len() <= MIN_BODY_LENGTH {
                    return false;
                }
                let body = TextNormalizer::preprocess(&page.body);
                probes.iter().any(|probe| body.contains(probe))
            })
            .collect()
    }
}

#[async_trait]
impl WebMatchProvider for CorpusWebProvider {
    async fn find_matches(&self, text: &str, max_sources: usize) -> Result<Vec<WebMatch>> {
        let probes = probe_sentences(text);
        if probes.is_empty() {
            tracing::debug!("No probe sentences in suspect text, skipping corpus scan");
            return Ok(Vec::new());
        }

        let pages = self.candidate_pages(&probes);
        let mut matches = Vec::new();
        for page in pages.iter().take(max_sources) {
            matches.extend(scan_for_phrases(text, &page.body, &page.title, &page.url));
        }

        tracing::debug!(
            "Corpus scan found {} matches across {} of {} pages",
            matches.len(),
            pages.len().min(max_sources),
            self.pages.len()
        );
        Ok(matches)
    }
}
