//! Similarity Engine (Score Combiner)
//!
//! Drives the full two-text pipeline and combines component scores into one
//! overall figure on the 0..100 scale.
//!
//! # Flow
//!
//! ```text
//! text1, text2
//!   │  citation analysis (original texts)
//!   │  optional blanking of cited regions
//!   ▼
//! structural matches ──┐
//! paraphrase matches ──┼─► pooled, overlap-resolved, citation-marked
//!                      │
//! cosine / jaccard / semantic components
//!                      │
//!                      ▼
//! overall = 0.4·structural + 0.2·cosine + 0.2·jaccard + 0.2·semantic
//!                      │
//! optional web search (fail-soft, timeout-bounded)
//! ```
//!
//! Both check entry points are infallible: bad providers degrade to empty
//! web results, never to a failed check.

use std::sync::Arc;
use std::time::Duration;

use crate::features::citation::domain::{CitationAnalysis, CitationFilter};
use crate::features::citation::infrastructure::CitationAnalyzer;
use crate::features::matching::domain::{
    cosine_similarity, jaccard_similarity, MatcherConfig, OverlapResolver, SemanticScorer,
    SimilarityMatch, TokenOverlapScorer,
};
use crate::features::matching::infrastructure::{
    ParaphraseMatcher, StructuralMatcherSet, TextMatcher,
};
use crate::features::normalize::TextNormalizer;
use crate::features::scoring::domain::{
    AlgorithmScores, AnalysisOptions, MatchStatistics, SimilarityResult,
};
use crate::features::websearch::domain::{WebMatch, WebMatchProvider};
use crate::shared::models::{EngineError, Result};

/// Web sources consulted by a comprehensive check
const WEB_DEFAULT_SOURCES: usize = 5;

/// Bound on one provider call
const WEB_DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Combined-score weights; the three auxiliary components share equal weight
const STRUCTURAL_WEIGHT: f64 = 0.4;
const COSINE_WEIGHT: f64 = 0.2;
const JACCARD_WEIGHT: f64 = 0.2;
const SEMANTIC_WEIGHT: f64 = 0.2;

/// Two-text similarity pipeline
///
/// Owns the matcher suite, the citation analyzer, and the optional web
/// provider. Construction is cheap; one engine serves many checks and is
/// `Send + Sync`.
pub struct SimilarityEngine {
    config: MatcherConfig,
    structural: StructuralMatcherSet,
    paraphrase: ParaphraseMatcher,
    citations: CitationAnalyzer,
    scorer: Arc<dyn SemanticScorer>,
    web_provider: Option<Arc<dyn WebMatchProvider>>,
    web_timeout: Duration,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEngine {
    /// Engine with default thresholds and the bundled token-overlap scorer
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        let scorer: Arc<dyn SemanticScorer> = Arc::new(TokenOverlapScorer::new());
        Self {
            structural: StructuralMatcherSet::from_config(&config),
            paraphrase: ParaphraseMatcher::from_config(&config, Arc::clone(&scorer)),
            citations: CitationAnalyzer::new(),
            scorer,
            config,
            web_provider: None,
            web_timeout: WEB_DEFAULT_TIMEOUT,
        }
    }

    /// Replace the semantic scorer; the paraphrase detector follows it
    pub fn with_semantic_scorer(mut self, scorer: Arc<dyn SemanticScorer>) -> Self {
        self.paraphrase = ParaphraseMatcher::from_config(&self.config, Arc::clone(&scorer));
        self.scorer = scorer;
        self
    }

    pub fn with_web_provider(mut self, provider: Arc<dyn WebMatchProvider>) -> Self {
        self.web_provider = Some(provider);
        self
    }

    pub fn with_web_timeout(mut self, timeout: Duration) -> Self {
        self.web_timeout = timeout;
        self
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn citation_analyzer(&self) -> &CitationAnalyzer {
        &self.citations
    }

    pub fn has_web_provider(&self) -> bool {
        self.web_provider.is_some()
    }

    /// Structural pipeline only: exact and n-gram matches, overlap-resolved,
    /// scored by matched coverage of `text1`.
    pub fn detect_similarity(&self, text1: &str, text2: &str) -> SimilarityResult {
        let kept = self.structural.find_all(text1, text2);
        let overall = Self::coverage_score(&kept, TextNormalizer::preprocess(text1).len());

        tracing::debug!(
            "Structural detection kept {} matches, overall {:.2}",
            kept.len(),
            overall
        );

        let statistics = MatchStatistics::from_matches(&kept, &[], &CitationAnalysis::empty());
        SimilarityResult {
            overall_similarity: overall,
            matches: kept,
            web_matches: Vec::new(),
            citation_analysis: CitationAnalysis::empty(),
            exclude_citations: false,
            algorithm_scores: AlgorithmScores {
                structural: overall,
                ..AlgorithmScores::default()
            },
            statistics,
        }
    }

    /// Full pipeline: citations, structural and paraphrase matching,
    /// component scores, optional web search.
    ///
    /// Infallible: web provider failure is logged and degrades to an empty
    /// web match list.
    pub async fn comprehensive_check(
        &self,
        text1: &str,
        text2: &str,
        options: &AnalysisOptions,
    ) -> SimilarityResult {
        let citations1 = self.citations.analyze(text1);
        let citations2 = self.citations.analyze(text2);

        let (subject, source) = if options.exclude_citations {
            (
                CitationFilter::exclude_cited_content(text1, &citations1.citations),
                CitationFilter::exclude_cited_content(text2, &citations2.citations),
            )
        } else {
            (text1.to_string(), text2.to_string())
        };

        let structural = self.detect_similarity(&subject, &source);
        let structural_score = structural.overall_similarity;

        let mut candidate_sets = vec![structural.matches];
        if options.include_semantic_analysis {
            candidate_sets.push(self.paraphrase.find_matches(&subject, &source));
        }
        let mut kept = OverlapResolver::merge_sets(candidate_sets);

        // Cited-or-not is judged against the suspect text's own citations
        for m in &mut kept {
            m.is_cited = Some(CitationFilter::is_text_cited(
                m.start_position,
                m.end_position,
                &citations1.citations,
            ));
        }

        let cosine = cosine_similarity(&subject, &source) * 100.0;
        let jaccard = jaccard_similarity(&subject, &source) * 100.0;
        let semantic = if options.include_semantic_analysis {
            self.scorer.score(&subject, &source) * 100.0
        } else {
            0.0
        };

        let combined = (STRUCTURAL_WEIGHT * structural_score
            + COSINE_WEIGHT * cosine
            + JACCARD_WEIGHT * jaccard
            + SEMANTIC_WEIGHT * semantic)
            .clamp(0.0, 100.0);
        let overall = (combined * 100.0).round() / 100.0;

        let web_matches = if options.include_web_search {
            match self.find_web_matches(&subject, WEB_DEFAULT_SOURCES).await {
                Ok(found) => found,
                Err(error) => {
                    tracing::warn!("Web search failed, continuing without it: {error}");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        tracing::info!(
            "Comprehensive check: overall {:.2}, {} matches, {} web matches",
            overall,
            kept.len(),
            web_matches.len()
        );

        let statistics = MatchStatistics::from_matches(&kept, &web_matches, &citations1);
        SimilarityResult {
            overall_similarity: overall,
            matches: kept,
            web_matches,
            citation_analysis: citations1,
            exclude_citations: options.exclude_citations,
            algorithm_scores: AlgorithmScores {
                structural: structural_score,
                cosine,
                jaccard,
                semantic,
            },
            statistics,
        }
    }

    /// Query the web provider, bounded by the engine timeout.
    ///
    /// Absent provider yields an empty result. Timeout and provider errors
    /// surface as [`EngineError::WebSearch`]; callers decide whether that is
    /// fatal.
    pub async fn find_web_matches(
        &self,
        text: &str,
        max_sources: usize,
    ) -> Result<Vec<SimilarityMatch>> {
        let Some(provider) = &self.web_provider else {
            tracing::debug!("No web provider configured, skipping web search");
            return Ok(Vec::new());
        };

        let found = tokio::time::timeout(self.web_timeout, provider.find_matches(text, max_sources))
            .await
            .map_err(|_| EngineError::web_search("web match provider timed out"))??;

        Ok(found
            .into_iter()
            .map(WebMatch::into_similarity_match)
            .collect())
    }

    /// min(100, matched length / text length · 100), rounded to 2 decimals
    fn coverage_score(matches: &[SimilarityMatch], text_len: usize) -> f64 {
        if text_len == 0 {
            return 0.0;
        }
        let matched: usize = matches.iter().map(SimilarityMatch::len).sum();
        let score = (matched as f64 / text_len as f64 * 100.0).min(100.0);
        (score * 100.0).round() / 100.0
    }
}
