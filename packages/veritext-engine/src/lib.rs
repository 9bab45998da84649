/*
 * VeriText Engine - Textual Similarity Detection
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (EngineError, Span)
 * - features/    : Vertical slices (normalize → matching → citation → websearch → scoring → analysis)
 *
 * Performance:
 * - Rayon work-stealing across source documents
 * - Regex sets compiled once, reused everywhere
 * - Matching runs on preprocessed text; positions refer to that text
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (detection pipeline stages)
pub mod features;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use shared::models::{EngineError, Result, Span};

pub use features::normalize::{TextNormalizer, TextStatistics};

pub use features::matching::{
    MatchAlgorithm, MatcherConfig, SemanticScorer, SimilarityMatch, SourceType,
    StructuralMatcherSet, TokenOverlapScorer,
};

pub use features::citation::{CitationAnalysis, CitationAnalyzer, CitationFilter};

pub use features::websearch::{CorpusWebProvider, WebMatch, WebMatchProvider, WebPage};

pub use features::scoring::{
    AlgorithmScores, AnalysisOptions, RiskLevel, SimilarityEngine, SimilarityResult,
};

pub use features::analysis::{
    AnalysisReport, AnalysisService, BatchComparisonReport, ComparisonReport,
    CorpusComparisonReport, NoopListener, ProgressListener, ProgressUpdate, QuickCheckReport,
};
