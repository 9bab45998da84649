//! Analysis Service (Store-Backed Usecases)
//!
//! Orchestrates the similarity engine over stored documents: pairwise
//! comparison, ad-hoc quick checks, corpus-wide analysis of one document,
//! and batch runs. Stores come in by reference; the service owns only the
//! engine.
//!
//! Persistence is fail-soft throughout: a dead report store costs the saved
//! rows, never the computed report.

use std::cmp::Ordering;

use chrono::Utc;
use uuid::Uuid;

use veritext_storage::domain::{
    DocumentRecord, DocumentStore, MatchRecord, ReportRecord, ReportStore,
};

use crate::features::analysis::domain::{
    AnalysisReport, BatchComparisonReport, BatchPairResult, BatchSummary, ComparisonReport,
    CorpusComparisonReport, CorpusComparisonRow, DocumentProfile, DocumentRef, ProgressListener,
    ProgressUpdate, QuickCheckReport,
};
use crate::features::matching::domain::{SimilarityMatch, SourceType};
use crate::features::normalize::TextStatistics;
use crate::features::scoring::application::SimilarityEngine;
use crate::features::scoring::domain::{AnalysisOptions, RiskLevel, SourceBreakdown};
use crate::shared::models::{EngineError, Result, Value};

/// Matches carried inside an analysis report
const MAX_REPORT_MATCHES: usize = 50;

/// Match rows persisted per report
const MAX_PERSISTED_MATCHES: usize = 100;

/// Web sources consulted during corpus analysis
const WEB_ANALYZE_SOURCES: usize = 10;

/// Minimum usable quick-check input, in chars after trimming
const MIN_QUICK_CHECK_LENGTH: usize = 10;

/// Store-backed analysis usecases over one similarity engine
pub struct AnalysisService {
    engine: SimilarityEngine,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new(SimilarityEngine::new())
    }
}

impl AnalysisService {
    pub fn new(engine: SimilarityEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    /// Compare two stored documents and persist the outcome.
    ///
    /// # Errors
    ///
    /// Identical ids are rejected; either document missing is an error.
    /// Persistence failure is logged, not returned.
    pub async fn compare_documents(
        &self,
        documents: &dyn DocumentStore,
        reports: &dyn ReportStore,
        id1: &str,
        id2: &str,
        options: &AnalysisOptions,
    ) -> Result<ComparisonReport> {
        if id1 == id2 {
            return Err(EngineError::invalid_input(
                "cannot compare a document with itself",
            ));
        }

        let doc1 = documents
            .get_document(id1)
            .await?
            .ok_or_else(|| EngineError::document_not_found(id1))?;
        let doc2 = documents
            .get_document(id2)
            .await?
            .ok_or_else(|| EngineError::document_not_found(id2))?;

        tracing::info!("Comparing documents {} and {}", doc1.id, doc2.id);
        let result = self
            .engine
            .comprehensive_check(&doc1.content, &doc2.content, options)
            .await;

        let report = ComparisonReport {
            id: Uuid::new_v4().to_string(),
            document1: profile(&doc1),
            document2: profile(&doc2),
            similarity_result: result,
            created_at: Utc::now(),
        };

        self.persist_comparison(reports, &report).await;
        Ok(report)
    }

    /// Check two raw texts against each other with default options.
    ///
    /// Runs on the texts as given and never persists anything.
    pub async fn quick_check(&self, text1: &str, text2: &str) -> Result<QuickCheckReport> {
        if text1.trim().is_empty() || text2.trim().is_empty() {
            return Err(EngineError::invalid_input("both text inputs are required"));
        }
        if text1.trim().chars().count() < MIN_QUICK_CHECK_LENGTH
            || text2.trim().chars().count() < MIN_QUICK_CHECK_LENGTH
        {
            return Err(EngineError::invalid_input(
                "text inputs must be at least 10 characters long",
            ));
        }

        let result = self
            .engine
            .comprehensive_check(text1, text2, &AnalysisOptions::default())
            .await;

        Ok(QuickCheckReport {
            text1_statistics: TextStatistics::from_text(text1),
            text2_statistics: TextStatistics::from_text(text2),
            similarity_result: result,
            timestamp: Utc::now(),
        })
    }

    /// Analyze one document against every other stored document, plus an
    /// optional web pass over the target's content.
    ///
    /// Matches pool across sources without cross-source overlap resolution;
    /// each kept match is re-tagged with the source document it came from.
    /// Web search runs once over the whole target, fail-soft.
    pub async fn analyze_document(
        &self,
        documents: &dyn DocumentStore,
        reports: &dyn ReportStore,
        document_id: &str,
        options: &AnalysisOptions,
        listener: &dyn ProgressListener,
    ) -> Result<AnalysisReport> {
        let target = documents
            .get_document(document_id)
            .await?
            .ok_or_else(|| EngineError::document_not_found(document_id))?;

        listener.on_progress(&ProgressUpdate::new(10.0, "Starting analysis..."));

        let corpus: Vec<DocumentRecord> = documents
            .list_documents()
            .await?
            .into_iter()
            .filter(|doc| doc.id != target.id)
            .collect();

        // The web pass runs once over the whole target, not per document
        let per_document_options = AnalysisOptions {
            include_web_search: false,
            ..*options
        };

        let mut matches: Vec<SimilarityMatch> = Vec::new();
        let mut breakdown = SourceBreakdown::default();

        let total = corpus.len();
        for (index, doc) in corpus.iter().enumerate() {
            let result = self
                .engine
                .comprehensive_check(&target.content, &doc.content, &per_document_options)
                .await;

            for mut m in result.matches {
                m.source_type = SourceType::Document;
                m.source_title = Some(doc.name.clone());
                m.source_id = Some(doc.id.clone());
                breakdown.record(SourceType::Document);
                matches.push(m);
            }

            let percent = 10.0 + ((index + 1) as f64 / total as f64) * 60.0;
            listener.on_progress(&ProgressUpdate::new(
                percent,
                format!("Compared against {}", doc.name),
            ));
        }

        if options.include_web_search {
            listener.on_progress(&ProgressUpdate::new(75.0, "Searching web content..."));
            match self
                .engine
                .find_web_matches(&target.content, WEB_ANALYZE_SOURCES)
                .await
            {
                Ok(web) => {
                    for m in web {
                        breakdown.record(SourceType::Web);
                        matches.push(m);
                    }
                    listener.on_progress(&ProgressUpdate::new(90.0, "Web search completed"));
                }
                Err(error) => {
                    tracing::warn!("Web search failed during analysis: {error}");
                    listener.on_progress(&ProgressUpdate::new(
                        90.0,
                        "Web search failed, continuing...",
                    ));
                }
            }
        }

        listener.on_progress(&ProgressUpdate::new(95.0, "Analyzing citations..."));
        let citation_analysis = self.engine.citation_analyzer().analyze(&target.content);

        let matched_length: usize = matches.iter().map(SimilarityMatch::len).sum();
        let overall = if target.content.is_empty() {
            0.0
        } else {
            let score = (matched_length as f64 / target.content.len() as f64 * 100.0).min(100.0);
            (score * 100.0).round() / 100.0
        };

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        let report = AnalysisReport {
            id: Uuid::new_v4().to_string(),
            document_id: target.id.clone(),
            document_name: target.name.clone(),
            overall_similarity: overall,
            total_matches: matches.len(),
            source_breakdown: breakdown,
            citation_analysis,
            matches: matches.iter().take(MAX_REPORT_MATCHES).cloned().collect(),
            analysis_options: *options,
            created_at: Utc::now(),
        };

        self.persist_analysis(reports, &report, &matches).await;

        listener.on_progress(&ProgressUpdate::new(100.0, "Analysis complete!"));
        tracing::info!(
            "Analysis of {} finished: overall {:.2}, {} matches",
            report.document_id,
            report.overall_similarity,
            report.total_matches
        );
        Ok(report)
    }

    /// Compare every `i < j` pair of the given documents sequentially.
    ///
    /// Missing documents skip their pairs; progress fires after every pair
    /// including skipped ones.
    pub async fn batch_compare(
        &self,
        documents: &dyn DocumentStore,
        ids: &[String],
        options: &AnalysisOptions,
        listener: &dyn ProgressListener,
    ) -> Result<BatchComparisonReport> {
        if ids.len() < 2 {
            return Err(EngineError::invalid_input(
                "batch comparison requires at least 2 documents",
            ));
        }

        let total_pairs = ids.len() * (ids.len() - 1) / 2;
        let mut results = Vec::new();
        let mut completed = 0usize;

        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                completed += 1;

                match self.load_pair(documents, &ids[i], &ids[j]).await {
                    Ok((doc1, doc2)) => {
                        let result = self
                            .engine
                            .comprehensive_check(&doc1.content, &doc2.content, options)
                            .await;
                        results.push(BatchPairResult {
                            document1: DocumentRef {
                                id: doc1.id,
                                name: doc1.name,
                            },
                            document2: DocumentRef {
                                id: doc2.id,
                                name: doc2.name,
                            },
                            similarity: result.overall_similarity,
                            match_count: result.matches.len(),
                            risk_level: RiskLevel::from_score(result.overall_similarity),
                        });
                    }
                    Err(error) => {
                        tracing::warn!("Skipping pair ({}, {}): {error}", ids[i], ids[j]);
                    }
                }

                listener.on_progress(&ProgressUpdate::new(
                    completed as f64 / total_pairs as f64 * 100.0,
                    format!("Compared {completed} of {total_pairs} pairs"),
                ));
            }
        }

        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        let summary = BatchSummary::from_results(&results);

        Ok(BatchComparisonReport {
            total_comparisons: results.len(),
            results,
            summary,
        })
    }

    /// Score one document against every other stored document with default
    /// options, sequentially.
    pub async fn compare_against_corpus(
        &self,
        documents: &dyn DocumentStore,
        document_id: &str,
    ) -> Result<CorpusComparisonReport> {
        let target = documents
            .get_document(document_id)
            .await?
            .ok_or_else(|| EngineError::document_not_found(document_id))?;

        let corpus: Vec<DocumentRecord> = documents
            .list_documents()
            .await?
            .into_iter()
            .filter(|doc| doc.id != target.id)
            .collect();

        let options = AnalysisOptions::default();
        let mut rows = Vec::with_capacity(corpus.len());
        for doc in &corpus {
            let result = self
                .engine
                .comprehensive_check(&target.content, &doc.content, &options)
                .await;
            rows.push(CorpusComparisonRow {
                document_id: doc.id.clone(),
                document_name: doc.name.clone(),
                similarity: result.overall_similarity,
                match_count: result.matches.len(),
            });
        }

        rows.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        Ok(CorpusComparisonReport {
            document_id: target.id,
            document_name: target.name,
            total_documents_compared: rows.len(),
            results: rows,
        })
    }

    async fn load_pair(
        &self,
        documents: &dyn DocumentStore,
        id1: &str,
        id2: &str,
    ) -> Result<(DocumentRecord, DocumentRecord)> {
        let doc1 = documents
            .get_document(id1)
            .await?
            .ok_or_else(|| EngineError::document_not_found(id1))?;
        let doc2 = documents
            .get_document(id2)
            .await?
            .ok_or_else(|| EngineError::document_not_found(id2))?;
        Ok((doc1, doc2))
    }

    async fn persist_comparison(&self, reports: &dyn ReportStore, report: &ComparisonReport) {
        let scores = serde_json::to_value(report.similarity_result.algorithm_scores)
            .unwrap_or(Value::Null);
        let row = ReportRecord::comparison(
            report.id.clone(),
            report.document1.id.clone(),
            report.document2.id.clone(),
            report.similarity_result.overall_similarity,
            scores,
        );

        if let Err(error) = reports.save_report(&row).await {
            tracing::warn!("Failed to persist comparison report {}: {error}", report.id);
            return;
        }

        let rows: Vec<MatchRecord> = report
            .similarity_result
            .matches
            .iter()
            .chain(report.similarity_result.web_matches.iter())
            .take(MAX_PERSISTED_MATCHES)
            .map(|m| match_row(&report.id, m))
            .collect();
        if let Err(error) = reports.save_matches(&report.id, &rows).await {
            tracing::warn!(
                "Failed to persist match rows for report {}: {error}",
                report.id
            );
        }
    }

    async fn persist_analysis(
        &self,
        reports: &dyn ReportStore,
        report: &AnalysisReport,
        all_matches: &[SimilarityMatch],
    ) {
        let mut row = ReportRecord::analysis(
            report.id.clone(),
            report.document_id.clone(),
            report.overall_similarity,
            Value::Null,
        );
        row.metadata = serde_json::to_value(report.analysis_options).unwrap_or(Value::Null);

        if let Err(error) = reports.save_report(&row).await {
            tracing::warn!("Failed to persist analysis report {}: {error}", report.id);
            return;
        }

        let rows: Vec<MatchRecord> = all_matches
            .iter()
            .take(MAX_PERSISTED_MATCHES)
            .map(|m| match_row(&report.id, m))
            .collect();
        if let Err(error) = reports.save_matches(&report.id, &rows).await {
            tracing::warn!(
                "Failed to persist match rows for report {}: {error}",
                report.id
            );
        }
    }
}

fn profile(doc: &DocumentRecord) -> DocumentProfile {
    DocumentProfile {
        id: doc.id.clone(),
        name: doc.name.clone(),
        statistics: TextStatistics::from_text(&doc.content),
    }
}

/// Flatten one engine match into a storable row
fn match_row(report_id: &str, m: &SimilarityMatch) -> MatchRecord {
    let mut row = MatchRecord::new(
        Uuid::new_v4().to_string(),
        report_id,
        m.similarity,
        m.algorithm.as_str(),
        m.source_type.as_str(),
    )
    .with_spans(
        m.start_position,
        m.end_position,
        m.source_start_pos,
        m.source_end_pos,
    )
    .with_texts(m.matched_text.clone(), m.source_text.clone())
    .with_confidence(m.confidence);

    row.source_url = m.source_url.clone();
    row.source_title = m.source_title.clone();
    row
}
