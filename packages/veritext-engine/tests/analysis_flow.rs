//! End-to-End Analysis Flow
//!
//! Exercises the store-backed usecases: corpus-wide analysis of one stored
//! document, sequential batch runs, one-against-all ranking, and report
//! persistence. Progress updates are collected and checked against the
//! staged percentages callers display.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::json;

use veritext_engine::{
    AnalysisOptions, AnalysisService, CorpusWebProvider, EngineError, NoopListener,
    ProgressListener, ProgressUpdate, SimilarityEngine, SourceType, WebPage,
};
use veritext_storage::{
    DocumentRecord, DocumentStore, InMemoryDocumentStore, InMemoryReportStore, ReportStore,
};

const ASSIGNMENT: &str = "Farmers in the region have adapted by planting drought resistant \
     crop varieties. Water reservoirs are monitored continuously throughout the growing \
     season. My own closing thought differs entirely here.";

const TEXTBOOK: &str = "Climate change is altering rainfall patterns across the continent. \
     Farmers in the region have adapted by planting drought resistant crop varieties. \
     Water reservoirs are monitored continuously throughout the growing season. \
     Agricultural yields depend heavily on these adaptations now.";

const RECIPES: &str = "Sourdough bread needs a lively starter, patient folding, and a hot \
     oven with steam in the first minutes of the bake. Pizza dough prefers a colder and \
     slower fermentation in the refrigerator overnight.";

#[derive(Default)]
struct CollectingListener {
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl CollectingListener {
    fn snapshot(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

impl ProgressListener for CollectingListener {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.updates.lock().unwrap().push(update.clone());
    }
}

/// doc-1 copies two sentences of doc-2; doc-3 is unrelated
async fn seeded_store() -> InMemoryDocumentStore {
    let store = InMemoryDocumentStore::new();
    for (id, name, content) in [
        ("doc-1", "assignment.txt", ASSIGNMENT),
        ("doc-2", "textbook.txt", TEXTBOOK),
        ("doc-3", "recipes.txt", RECIPES),
    ] {
        store
            .save_document(&DocumentRecord::new(id, name, content))
            .await
            .unwrap();
    }
    store
}

// =========================================================================
// CORPUS ANALYSIS
// =========================================================================

#[tokio::test]
async fn test_analyze_document_finds_corpus_source() {
    let documents = seeded_store().await;
    let reports = InMemoryReportStore::new();
    let service = AnalysisService::default();
    let listener = CollectingListener::default();

    let report = service
        .analyze_document(
            &documents,
            &reports,
            "doc-1",
            &AnalysisOptions::default(),
            &listener,
        )
        .await
        .unwrap();

    assert_eq!(report.document_id, "doc-1");
    assert_eq!(report.document_name, "assignment.txt");

    // The copied passage matches doc-2 only; doc-3 contributes nothing
    assert_eq!(report.total_matches, 1);
    assert_eq!(report.matches.len(), 1);
    let m = &report.matches[0];
    assert_eq!(m.source_type, SourceType::Document);
    assert_eq!(m.source_id.as_deref(), Some("doc-2"));
    assert_eq!(m.source_title.as_deref(), Some("textbook.txt"));

    assert_eq!(report.source_breakdown.document, 1);
    assert_eq!(report.source_breakdown.web, 0);
    assert!(report.overall_similarity > 50.0);
    assert_eq!(report.citation_analysis.total_citations, 0);
}

#[tokio::test]
async fn test_analyze_document_progress_stages() {
    let documents = seeded_store().await;
    let reports = InMemoryReportStore::new();
    let service = AnalysisService::default();
    let listener = CollectingListener::default();

    service
        .analyze_document(
            &documents,
            &reports,
            "doc-1",
            &AnalysisOptions::default(),
            &listener,
        )
        .await
        .unwrap();

    let updates = listener.snapshot();
    let staged: Vec<(f64, &str)> = updates
        .iter()
        .map(|u| (u.percent, u.message.as_str()))
        .collect();

    // Corpus order follows upload order, so the stages are exact
    assert_eq!(
        staged,
        vec![
            (10.0, "Starting analysis..."),
            (40.0, "Compared against textbook.txt"),
            (70.0, "Compared against recipes.txt"),
            (95.0, "Analyzing citations..."),
            (100.0, "Analysis complete!"),
        ]
    );
}

#[tokio::test]
async fn test_analyze_document_persists_analysis_report() {
    let documents = seeded_store().await;
    let reports = InMemoryReportStore::new();
    let service = AnalysisService::default();

    let report = service
        .analyze_document(
            &documents,
            &reports,
            "doc-1",
            &AnalysisOptions::default(),
            &NoopListener,
        )
        .await
        .unwrap();

    let stored = reports.get_report(&report.id).await.unwrap().unwrap();
    assert!(stored.is_analysis());
    assert_eq!(stored.document1_id, "doc-1");
    assert_eq!(stored.document2_id, None);
    assert_eq!(stored.overall_similarity, report.overall_similarity);
    assert_eq!(
        stored.metadata,
        json!({
            "excludeCitations": false,
            "includeWebSearch": false,
            "includeSemanticAnalysis": true,
        })
    );

    let rows = reports.get_matches(&report.id).await.unwrap();
    assert_eq!(rows.len(), report.total_matches);
    assert_eq!(rows[0].source_type, "document");
    assert_eq!(rows[0].source_title.as_deref(), Some("textbook.txt"));
}

#[tokio::test]
async fn test_analyze_document_with_web_search() {
    let documents = InMemoryDocumentStore::new();
    documents
        .save_document(&DocumentRecord::new(
            "doc-web",
            "lab-report.txt",
            "Photosynthesis converts light energy into chemical energy stored in glucose \
             molecules. Plants manage this daily.",
        ))
        .await
        .unwrap();
    let reports = InMemoryReportStore::new();

    let page = WebPage::new(
        "https://example.edu/biology/photosynthesis",
        "Photosynthesis Basics",
        "Biology textbooks explain that photosynthesis converts light energy into \
         chemical energy stored in glucose molecules in every chapter.",
    );
    let engine =
        SimilarityEngine::new().with_web_provider(Arc::new(CorpusWebProvider::new(vec![page])));
    let service = AnalysisService::new(engine);
    let listener = CollectingListener::default();

    let report = service
        .analyze_document(
            &documents,
            &reports,
            "doc-web",
            &AnalysisOptions {
                include_web_search: true,
                ..AnalysisOptions::default()
            },
            &listener,
        )
        .await
        .unwrap();

    assert_eq!(report.total_matches, 1);
    assert_eq!(report.source_breakdown.web, 1);
    assert_eq!(report.matches[0].source_type, SourceType::Web);
    assert_eq!(
        report.matches[0].source_url.as_deref(),
        Some("https://example.edu/biology/photosynthesis")
    );

    // Empty corpus: straight from start to the web stage
    let staged: Vec<(f64, String)> = listener
        .snapshot()
        .into_iter()
        .map(|u| (u.percent, u.message))
        .collect();
    assert_eq!(staged[0], (10.0, "Starting analysis...".to_string()));
    assert_eq!(staged[1], (75.0, "Searching web content...".to_string()));
    assert_eq!(staged[2], (90.0, "Web search completed".to_string()));
    assert_eq!(staged[3], (95.0, "Analyzing citations...".to_string()));
    assert_eq!(staged[4], (100.0, "Analysis complete!".to_string()));
}

#[tokio::test]
async fn test_analyze_missing_document() {
    let documents = seeded_store().await;
    let reports = InMemoryReportStore::new();
    let service = AnalysisService::default();

    let outcome = service
        .analyze_document(
            &documents,
            &reports,
            "doc-404",
            &AnalysisOptions::default(),
            &NoopListener,
        )
        .await;

    assert!(matches!(outcome, Err(EngineError::DocumentNotFound(_))));
}

// =========================================================================
// BATCH COMPARISON
// =========================================================================

#[tokio::test]
async fn test_batch_compare_all_pairs() {
    let documents = seeded_store().await;
    let service = AnalysisService::default();
    let listener = CollectingListener::default();
    let ids = vec![
        "doc-1".to_string(),
        "doc-2".to_string(),
        "doc-3".to_string(),
    ];

    let report = service
        .batch_compare(&documents, &ids, &AnalysisOptions::default(), &listener)
        .await
        .unwrap();

    assert_eq!(report.total_comparisons, 3);
    assert_eq!(report.results.len(), 3);

    // Results come back sorted; the copied pair leads
    let top = &report.results[0];
    assert_eq!(top.document1.id, "doc-1");
    assert_eq!(top.document2.id, "doc-2");
    assert!(top.similarity > report.results[1].similarity);
    assert!(top.match_count >= 1);

    // The summary mean is the mean of the reported pairs
    let mean: f64 =
        report.results.iter().map(|r| r.similarity).sum::<f64>() / report.results.len() as f64;
    assert_eq!(report.summary.average_similarity, (mean * 100.0).round() / 100.0);

    let updates = listener.snapshot();
    assert_eq!(updates.len(), 3);
    assert_eq!(updates[0].message, "Compared 1 of 3 pairs");
    assert_eq!(updates[2].message, "Compared 3 of 3 pairs");
    assert!((updates[0].percent - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(updates[2].percent, 100.0);
}

#[tokio::test]
async fn test_batch_compare_skips_missing_documents() {
    let documents = seeded_store().await;
    let service = AnalysisService::default();
    let listener = CollectingListener::default();
    let ids = vec![
        "doc-1".to_string(),
        "ghost".to_string(),
        "doc-2".to_string(),
    ];

    let report = service
        .batch_compare(&documents, &ids, &AnalysisOptions::default(), &listener)
        .await
        .unwrap();

    // Only (doc-1, doc-2) survives; both ghost pairs are skipped
    assert_eq!(report.total_comparisons, 1);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].document2.id, "doc-2");

    // Progress still covers every pair, skipped ones included
    let updates = listener.snapshot();
    assert_eq!(updates.len(), 3);
    assert_eq!(updates[2].message, "Compared 3 of 3 pairs");
    assert_eq!(updates[2].percent, 100.0);
}

#[tokio::test]
async fn test_batch_compare_requires_two_documents() {
    let documents = seeded_store().await;
    let service = AnalysisService::default();

    let outcome = service
        .batch_compare(
            &documents,
            &["doc-1".to_string()],
            &AnalysisOptions::default(),
            &NoopListener,
        )
        .await;

    assert!(matches!(outcome, Err(EngineError::InvalidInput(_))));
}

// =========================================================================
// CORPUS RANKING AND PAIR REPORTS
// =========================================================================

#[tokio::test]
async fn test_compare_against_corpus_ranks_sources() {
    let documents = seeded_store().await;
    let service = AnalysisService::default();

    let report = service
        .compare_against_corpus(&documents, "doc-1")
        .await
        .unwrap();

    assert_eq!(report.document_id, "doc-1");
    assert_eq!(report.document_name, "assignment.txt");
    assert_eq!(report.total_documents_compared, 2);
    assert_eq!(report.results.len(), 2);

    // The textbook the assignment copied from ranks first
    assert_eq!(report.results[0].document_id, "doc-2");
    assert!(report.results[0].similarity > report.results[1].similarity);
    assert!(report.results[0].match_count >= 1);
    assert_eq!(report.results[1].document_id, "doc-3");
}

#[tokio::test]
async fn test_compare_documents_persists_comparison_type() {
    let documents = seeded_store().await;
    let reports = InMemoryReportStore::new();
    let service = AnalysisService::default();

    let report = service
        .compare_documents(
            &documents,
            &reports,
            "doc-1",
            "doc-2",
            &AnalysisOptions::default(),
        )
        .await
        .unwrap();

    let stored = reports.get_report(&report.id).await.unwrap().unwrap();
    assert_eq!(stored.report_type, "comparison");
    assert!(!stored.is_analysis());
    assert!(stored.algorithm_scores.get("structural").is_some());
    assert!(stored.algorithm_scores.get("cosine").is_some());

    let listed = reports.list_reports_for_document("doc-2").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, report.id);
}

#[tokio::test]
async fn test_quick_check_reports_statistics() {
    let service = AnalysisService::default();

    let report = service.quick_check(ASSIGNMENT, TEXTBOOK).await.unwrap();

    assert!(report.similarity_result.overall_similarity > 30.0);
    assert!(report.text1_statistics.word_count > 20);
    assert!(report.text2_statistics.sentence_count >= 3);
    assert!(report.text2_statistics.character_count > report.text1_statistics.character_count);
}
