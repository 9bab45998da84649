//! Scoring Domain
//!
//! The combined result of a similarity check: overall score on the 0..100
//! scale, component scores, kept matches, citation analysis, and aggregate
//! statistics. Web matches are carried separately from document matches and
//! never overlap-resolved against them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::citation::domain::CitationAnalysis;
use crate::features::matching::domain::{MatchAlgorithm, SimilarityMatch, SourceType};

/// Options for a comprehensive check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisOptions {
    /// Blank cited regions of both texts before matching
    pub exclude_citations: bool,

    /// Query the web provider and carry its matches in the result
    pub include_web_search: bool,

    /// Run the paraphrase detector and the semantic component score
    pub include_semantic_analysis: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            exclude_citations: false,
            include_web_search: false,
            include_semantic_analysis: true,
        }
    }
}

/// Component scores feeding the combined overall, all on the 0..100 scale
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmScores {
    /// Matched-coverage score from the structural pipeline
    pub structural: f64,

    /// Word-frequency cosine over the compared texts
    pub cosine: f64,

    /// Word-set Jaccard over the compared texts
    pub jaccard: f64,

    /// Semantic scorer output; 0 when semantic analysis is disabled
    pub semantic: f64,
}

/// Match counts by source kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBreakdown {
    pub document: usize,
    pub web: usize,
    pub academic: usize,
}

impl SourceBreakdown {
    pub fn total(&self) -> usize {
        self.document + self.web + self.academic
    }

    pub fn record(&mut self, source_type: SourceType) {
        match source_type {
            SourceType::Document => self.document += 1,
            SourceType::Web => self.web += 1,
            SourceType::Academic => self.academic += 1,
        }
    }
}

/// Citation figures carried inside match statistics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationTotals {
    pub total_citations: usize,
    pub citation_coverage: f64,
    pub quoted_text_count: usize,
}

impl CitationTotals {
    pub fn from_analysis(analysis: &CitationAnalysis) -> Self {
        Self {
            total_citations: analysis.total_citations,
            citation_coverage: analysis.citation_coverage,
            quoted_text_count: analysis.quoted_text.len(),
        }
    }
}

/// Aggregate statistics over a result's matches
///
/// Length figures cover the document-side matches only; web matches count
/// toward the total and the breakdown but not the averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatistics {
    /// Document matches plus web matches
    pub total_matches: usize,

    /// Integer-rounded mean match length; 0 when there are no matches
    pub average_match_length: usize,

    /// Longest match length; 0 when there are no matches
    pub longest_match: usize,

    /// Distinct algorithms in encounter order, document matches first
    pub algorithms_used: Vec<MatchAlgorithm>,

    pub source_breakdown: SourceBreakdown,

    pub citation_stats: CitationTotals,
}

impl MatchStatistics {
    pub fn from_matches(
        matches: &[SimilarityMatch],
        web_matches: &[SimilarityMatch],
        citations: &CitationAnalysis,
    ) -> Self {
        let mut algorithms_used = Vec::new();
        for m in matches.iter().chain(web_matches.iter()) {
            if !algorithms_used.contains(&m.algorithm) {
                algorithms_used.push(m.algorithm);
            }
        }

        let source_breakdown = SourceBreakdown {
            document: matches
                .iter()
                .filter(|m| m.source_type == SourceType::Document)
                .count(),
            web: web_matches.len(),
            academic: matches
                .iter()
                .filter(|m| m.source_type == SourceType::Academic)
                .count(),
        };

        let (average_match_length, longest_match) = if matches.is_empty() {
            (0, 0)
        } else {
            let total: usize = matches.iter().map(|m| m.matched_text.len()).sum();
            let longest = matches
                .iter()
                .map(|m| m.matched_text.len())
                .max()
                .unwrap_or(0);
            (
                (total as f64 / matches.len() as f64).round() as usize,
                longest,
            )
        };

        Self {
            total_matches: matches.len() + web_matches.len(),
            average_match_length,
            longest_match,
            algorithms_used,
            source_breakdown,
            citation_stats: CitationTotals::from_analysis(citations),
        }
    }
}

/// Risk band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Minimal Risk")]
    Minimal,
}

impl RiskLevel {
    /// Band an overall score on the 0..100 scale
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            RiskLevel::High
        } else if score >= 40.0 {
            RiskLevel::Medium
        } else if score >= 20.0 {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Minimal => "Minimal Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Combined result of a similarity check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    /// Combined similarity on the 0..100 scale
    pub overall_similarity: f64,

    /// Marked matches against the compared source, pairwise disjoint
    pub matches: Vec<SimilarityMatch>,

    /// Web-sourced matches; span the suspect side independently of `matches`
    pub web_matches: Vec<SimilarityMatch>,

    /// Citation analysis of the suspect text
    pub citation_analysis: CitationAnalysis,

    /// Whether cited regions were blanked before matching
    pub exclude_citations: bool,

    pub algorithm_scores: AlgorithmScores,

    pub statistics: MatchStatistics,
}

impl SimilarityResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.overall_similarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_match(start: usize, end: usize, algorithm: MatchAlgorithm) -> SimilarityMatch {
        let text = "m".repeat(end - start);
        SimilarityMatch::new(0.8, text.clone(), text, algorithm)
            .with_positions(start, end, start, end)
    }

    // =====================================================================
    // BASIC FUNCTIONALITY
    // =====================================================================

    #[test]
    fn test_analysis_options_defaults() {
        let options = AnalysisOptions::default();

        assert!(!options.exclude_citations);
        assert!(!options.include_web_search);
        assert!(options.include_semantic_analysis);
    }

    #[test]
    fn test_analysis_options_serde_defaults_missing_fields() {
        let options: AnalysisOptions =
            serde_json::from_str(r#"{"excludeCitations":true}"#).unwrap();

        assert!(options.exclude_citations);
        assert!(!options.include_web_search);
        assert!(options.include_semantic_analysis);
    }

    #[test]
    fn test_risk_level_banding() {
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(70.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(69.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(39.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(20.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(19.99), RiskLevel::Minimal);
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Minimal);
    }

    #[test]
    fn test_risk_level_display_strings() {
        assert_eq!(RiskLevel::High.to_string(), "High Risk");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Medium).unwrap(),
            "\"Medium Risk\""
        );
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"Minimal Risk\"").unwrap(),
            RiskLevel::Minimal
        );
    }

    #[test]
    fn test_statistics_lengths_and_total() {
        let matches = vec![
            doc_match(0, 20, MatchAlgorithm::ExactMatch),
            doc_match(30, 40, MatchAlgorithm::Ngram3),
        ];
        let web = vec![doc_match(50, 120, MatchAlgorithm::WebSearch)];

        let stats = MatchStatistics::from_matches(&matches, &web, &CitationAnalysis::empty());

        assert_eq!(stats.total_matches, 3);
        // Mean of 20 and 10, web lengths excluded
        assert_eq!(stats.average_match_length, 15);
        assert_eq!(stats.longest_match, 20);
    }

    #[test]
    fn test_statistics_algorithms_in_encounter_order() {
        let matches = vec![
            doc_match(0, 20, MatchAlgorithm::Ngram4),
            doc_match(30, 50, MatchAlgorithm::ExactMatch),
            doc_match(60, 80, MatchAlgorithm::Ngram4),
        ];
        let web = vec![doc_match(90, 120, MatchAlgorithm::WebSearch)];

        let stats = MatchStatistics::from_matches(&matches, &web, &CitationAnalysis::empty());

        assert_eq!(
            stats.algorithms_used,
            vec![
                MatchAlgorithm::Ngram4,
                MatchAlgorithm::ExactMatch,
                MatchAlgorithm::WebSearch,
            ]
        );
    }

    #[test]
    fn test_statistics_source_breakdown() {
        let matches = vec![
            doc_match(0, 20, MatchAlgorithm::ExactMatch),
            doc_match(30, 50, MatchAlgorithm::Ngram3),
        ];
        let web = vec![
            doc_match(60, 80, MatchAlgorithm::WebSearch),
            doc_match(90, 110, MatchAlgorithm::WebSearch),
        ];

        let stats = MatchStatistics::from_matches(&matches, &web, &CitationAnalysis::empty());

        assert_eq!(stats.source_breakdown.document, 2);
        assert_eq!(stats.source_breakdown.web, 2);
        assert_eq!(stats.source_breakdown.academic, 0);
        assert_eq!(stats.source_breakdown.total(), 4);
    }

    #[test]
    fn test_source_breakdown_record() {
        let mut breakdown = SourceBreakdown::default();
        breakdown.record(SourceType::Document);
        breakdown.record(SourceType::Document);
        breakdown.record(SourceType::Web);
        breakdown.record(SourceType::Academic);

        assert_eq!(breakdown.document, 2);
        assert_eq!(breakdown.web, 1);
        assert_eq!(breakdown.academic, 1);
    }

    #[test]
    fn test_result_risk_level() {
        let result = SimilarityResult {
            overall_similarity: 72.5,
            matches: Vec::new(),
            web_matches: Vec::new(),
            citation_analysis: CitationAnalysis::empty(),
            exclude_citations: false,
            algorithm_scores: AlgorithmScores::default(),
            statistics: MatchStatistics::from_matches(&[], &[], &CitationAnalysis::empty()),
        };

        assert_eq!(result.risk_level(), RiskLevel::High);
    }

    // =====================================================================
    // EDGE CASES
    // =====================================================================

    #[test]
    fn test_statistics_empty() {
        let stats = MatchStatistics::from_matches(&[], &[], &CitationAnalysis::empty());

        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.average_match_length, 0);
        assert_eq!(stats.longest_match, 0);
        assert!(stats.algorithms_used.is_empty());
        assert_eq!(stats.source_breakdown, SourceBreakdown::default());
        assert_eq!(stats.citation_stats, CitationTotals::default());
    }

    #[test]
    fn test_statistics_serde_camel_case() {
        let stats = MatchStatistics::from_matches(&[], &[], &CitationAnalysis::empty());
        let json = serde_json::to_value(&stats).unwrap();

        assert!(json.get("totalMatches").is_some());
        assert!(json.get("averageMatchLength").is_some());
        assert!(json.get("sourceBreakdown").is_some());
        assert!(json.get("citationStats").is_some());
    }
}
