//! Analysis Domain
//!
//! Report shapes produced by the analysis usecases, plus the progress
//! listener port. Reports carry engine result types directly and serialize
//! to the camelCase wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::citation::domain::CitationAnalysis;
use crate::features::matching::domain::SimilarityMatch;
use crate::features::normalize::TextStatistics;
use crate::features::scoring::domain::{
    AnalysisOptions, RiskLevel, SimilarityResult, SourceBreakdown,
};

/// One progress step of a long-running analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    /// Completion in [0.0, 100.0]
    pub percent: f64,
    pub message: String,
}

impl ProgressUpdate {
    pub fn new(percent: f64, message: impl Into<String>) -> Self {
        Self {
            percent,
            message: message.into(),
        }
    }
}

/// Receiver of progress updates during corpus analysis and batch runs
pub trait ProgressListener: Send + Sync {
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Listener that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl ProgressListener for NoopListener {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

/// Identity and statistics of one compared document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentProfile {
    pub id: String,
    pub name: String,
    pub statistics: TextStatistics,
}

/// Result of comparing two stored documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub id: String,
    pub document1: DocumentProfile,
    pub document2: DocumentProfile,
    pub similarity_result: SimilarityResult,
    pub created_at: DateTime<Utc>,
}

/// Result of an ad-hoc two-text check; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCheckReport {
    pub text1_statistics: TextStatistics,
    pub text2_statistics: TextStatistics,
    pub similarity_result: SimilarityResult,
    pub timestamp: DateTime<Utc>,
}

/// Result of analyzing one document against the whole corpus
///
/// The match list pools per-source results without cross-source overlap
/// resolution: one suspect region matching several sources appears once per
/// source, told apart by `source_id`. Coverage therefore counts such a
/// region once per source and the overall score reads as an upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: String,
    pub document_id: String,
    pub document_name: String,
    pub overall_similarity: f64,

    /// Pooled match count before truncation
    pub total_matches: usize,

    pub source_breakdown: SourceBreakdown,
    pub citation_analysis: CitationAnalysis,

    /// Sorted by similarity descending, truncated for report size
    pub matches: Vec<SimilarityMatch>,

    pub analysis_options: AnalysisOptions,
    pub created_at: DateTime<Utc>,
}

/// Identity of one document in a batch result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub id: String,
    pub name: String,
}

/// One compared pair of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPairResult {
    pub document1: DocumentRef,
    pub document2: DocumentRef,
    pub similarity: f64,
    pub match_count: usize,
    pub risk_level: RiskLevel,
}

/// Aggregate figures over a batch run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,

    /// Mean similarity over all compared pairs, rounded to 2 decimals
    pub average_similarity: f64,
}

impl BatchSummary {
    /// Tally risk bands and the mean similarity; minimal-risk pairs count
    /// toward the mean but not toward any band.
    pub fn from_results(results: &[BatchPairResult]) -> Self {
        let mut summary = Self::default();
        if results.is_empty() {
            return summary;
        }

        for result in results {
            match result.risk_level {
                RiskLevel::High => summary.high_risk += 1,
                RiskLevel::Medium => summary.medium_risk += 1,
                RiskLevel::Low => summary.low_risk += 1,
                RiskLevel::Minimal => {}
            }
        }

        let mean = results.iter().map(|r| r.similarity).sum::<f64>() / results.len() as f64;
        summary.average_similarity = (mean * 100.0).round() / 100.0;
        summary
    }
}

/// Result of an all-pairs batch comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchComparisonReport {
    /// Pairs actually compared (skipped pairs excluded)
    pub total_comparisons: usize,

    /// Sorted by similarity descending
    pub results: Vec<BatchPairResult>,

    pub summary: BatchSummary,
}

/// One corpus document scored against the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusComparisonRow {
    pub document_id: String,
    pub document_name: String,
    pub similarity: f64,
    pub match_count: usize,
}

/// Target-vs-corpus scan result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusComparisonReport {
    pub document_id: String,
    pub document_name: String,

    /// Sorted by similarity descending
    pub results: Vec<CorpusComparisonRow>,

    pub total_documents_compared: usize,
}
