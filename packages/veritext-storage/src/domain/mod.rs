//! Domain layer for document and report persistence
//!
//! # Core Principles
//!
//! 1. **Flat records**: rows mirror the wire schema (camelCase JSON), not the
//!    engine's rich result types
//! 2. **Record identity**: callers assign ids; the store never invents them
//! 3. **Match rows are owned by their report**: deleting a report removes its
//!    match rows
//!
//! # Domain Models
//!
//! - `DocumentRecord`: A stored text document with a content hash
//! - `ReportRecord`: A persisted similarity report (comparison or analysis)
//! - `MatchRecord`: One matched region row belonging to a report
//!
//! # Port Traits
//!
//! - `DocumentStore`: Document persistence abstraction
//! - `ReportStore`: Report + match-row persistence abstraction
//!
//! # Examples
//!
//! ```rust,ignore
//! use veritext_storage::domain::{DocumentStore, DocumentRecord};
//!
//! async fn example(store: impl DocumentStore) -> Result<()> {
//!     let doc = DocumentRecord::new("doc-1", "essay.txt", "The quick brown fox...");
//!     store.save_document(&doc).await?;
//!
//!     let found = store.get_document("doc-1").await?;
//!     assert!(found.is_some());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Result;

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// A stored text document
///
/// Documents are the corpus a suspect text is analyzed against. The content
/// hash is computed once at construction and lets callers detect re-uploads
/// of identical content without comparing bodies.
///
/// # Examples
///
/// ```rust
/// use veritext_storage::domain::DocumentRecord;
///
/// let doc = DocumentRecord::new("doc-1", "essay.txt", "The quick brown fox");
/// assert_eq!(doc.id, "doc-1");
/// assert_eq!(doc.content_hash.len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Document ID (unique identifier)
    pub id: String,
    /// Display name (original file name)
    pub name: String,
    /// Full text content
    pub content: String,
    /// SHA-256 of the content (hex)
    pub content_hash: String,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Optional metadata (mime type, uploader, etc.)
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl DocumentRecord {
    /// Create a new document record
    ///
    /// # Arguments
    ///
    /// - `id`: Document identifier
    /// - `name`: Display name
    /// - `content`: Full text content (hashed on construction)
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let content_hash = hash_content(&content);
        Self {
            id: id.into(),
            name: name.into(),
            content,
            content_hash,
            uploaded_at: Utc::now(),
            metadata: serde_json::Value::Null,
        }
    }

    /// Create a document record with metadata
    pub fn with_metadata(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        metadata: serde_json::Value,
    ) -> Self {
        let mut doc = Self::new(id, name, content);
        doc.metadata = metadata;
        doc
    }

    /// Content length in characters
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// Compute the SHA-256 hex digest of a document body
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// A persisted similarity report
///
/// Flat row for either a pairwise comparison (`document2_id` set) or a
/// corpus-wide analysis (`document2_id` empty). Component scores travel as a
/// free-form JSON object so the row schema survives scoring changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    /// Report ID
    pub id: String,
    /// Suspect document
    pub document1_id: String,
    /// Source document (None for corpus-wide analysis reports)
    pub document2_id: Option<String>,
    /// Combined similarity score in [0, 100]
    pub overall_similarity: f64,
    /// Component scores (structural, cosine, jaccard, semantic, ...)
    #[serde(default)]
    pub algorithm_scores: serde_json::Value,
    /// Report type ("comparison" or "analysis")
    pub report_type: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Optional metadata
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl ReportRecord {
    /// Create a pairwise comparison report row
    pub fn comparison(
        id: impl Into<String>,
        document1_id: impl Into<String>,
        document2_id: impl Into<String>,
        overall_similarity: f64,
        algorithm_scores: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            document1_id: document1_id.into(),
            document2_id: Some(document2_id.into()),
            overall_similarity,
            algorithm_scores,
            report_type: "comparison".to_string(),
            created_at: Utc::now(),
            metadata: serde_json::Value::Null,
        }
    }

    /// Create a corpus-wide analysis report row
    pub fn analysis(
        id: impl Into<String>,
        document_id: impl Into<String>,
        overall_similarity: f64,
        algorithm_scores: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            document1_id: document_id.into(),
            document2_id: None,
            overall_similarity,
            algorithm_scores,
            report_type: "analysis".to_string(),
            created_at: Utc::now(),
            metadata: serde_json::Value::Null,
        }
    }

    /// True for corpus-wide analysis rows
    pub fn is_analysis(&self) -> bool {
        self.report_type == "analysis"
    }
}

/// One matched region row belonging to a report
///
/// Positions are character offsets into the texts as the engine saw them
/// (suspect side first). `source_url`/`source_title` are set for web matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Match row ID
    pub id: String,
    /// Owning report ID
    pub report_id: String,
    /// Per-match similarity in [0, 1]
    pub similarity: f64,
    /// Matched region in the suspect text
    pub matched_text: String,
    /// Matched region in the source text
    pub source_text: String,
    /// Suspect-side span (half-open, char offsets)
    pub start_position: usize,
    pub end_position: usize,
    /// Source-side span (half-open, char offsets)
    pub source_start_pos: usize,
    pub source_end_pos: usize,
    /// Producing algorithm tag ("exact-match", "3-gram", ...)
    pub algorithm: String,
    /// Source kind ("document", "web", "academic")
    pub source_type: String,
    /// Web source URL (web matches only)
    pub source_url: Option<String>,
    /// Display name of the source
    pub source_title: Option<String>,
    /// Matcher confidence in [0, 1]
    pub confidence: f64,
}

impl MatchRecord {
    /// Create a match row with empty spans and texts
    pub fn new(
        id: impl Into<String>,
        report_id: impl Into<String>,
        similarity: f64,
        algorithm: impl Into<String>,
        source_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            report_id: report_id.into(),
            similarity,
            matched_text: String::new(),
            source_text: String::new(),
            start_position: 0,
            end_position: 0,
            source_start_pos: 0,
            source_end_pos: 0,
            algorithm: algorithm.into(),
            source_type: source_type.into(),
            source_url: None,
            source_title: None,
            confidence: similarity,
        }
    }

    /// Set both spans
    pub fn with_spans(
        mut self,
        start: usize,
        end: usize,
        src_start: usize,
        src_end: usize,
    ) -> Self {
        self.start_position = start;
        self.end_position = end;
        self.source_start_pos = src_start;
        self.source_end_pos = src_end;
        self
    }

    /// Set both text bodies
    pub fn with_texts(mut self, matched: impl Into<String>, source: impl Into<String>) -> Self {
        self.matched_text = matched.into();
        self.source_text = source.into();
        self
    }

    /// Set web source attribution
    pub fn with_web_source(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self.source_title = Some(title.into());
        self
    }

    /// Set matcher confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Suspect-side span length
    pub fn span_length(&self) -> usize {
        self.end_position.saturating_sub(self.start_position)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait: DocumentStore
// ═══════════════════════════════════════════════════════════════════════════

/// Document storage abstraction
///
/// # Core Operations
///
/// 1. **Writes**
///    - `save_document`: Insert or replace a document
///    - `delete_document`: Remove a document
///
/// 2. **Reads**
///    - `get_document`: Fetch one document by id
///    - `list_documents`: Fetch the whole corpus
///    - `count_documents`: Corpus size
///
/// # Implementations
///
/// - `InMemoryDocumentStore`: HashMap-backed store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Save a document (insert or replace)
    ///
    /// # Arguments
    ///
    /// - `document`: Document to save
    async fn save_document(&self, document: &DocumentRecord) -> Result<()>;

    /// Get a document by ID
    ///
    /// # Returns
    ///
    /// `None` when no document has that id
    async fn get_document(&self, document_id: &str) -> Result<Option<DocumentRecord>>;

    /// List all documents
    ///
    /// # Returns
    ///
    /// Documents ordered by upload time, then id
    async fn list_documents(&self) -> Result<Vec<DocumentRecord>>;

    /// Delete a document
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DocumentNotFound` if the document doesn't exist
    async fn delete_document(&self, document_id: &str) -> Result<()>;

    /// Count stored documents
    async fn count_documents(&self) -> Result<usize>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait: ReportStore
// ═══════════════════════════════════════════════════════════════════════════

/// Report + match-row storage abstraction
///
/// Match rows belong to exactly one report; `delete_report` removes them
/// together with the report row.
#[async_trait]
pub trait ReportStore: Send + Sync {
    // ═══════════════════════════════════════════════════════════════════════
    // Report Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save a report row (insert or replace)
    async fn save_report(&self, report: &ReportRecord) -> Result<()>;

    /// Get a report by ID
    ///
    /// # Returns
    ///
    /// `None` when no report has that id
    async fn get_report(&self, report_id: &str) -> Result<Option<ReportRecord>>;

    /// List reports involving a document (as suspect or source)
    ///
    /// # Returns
    ///
    /// Reports ordered by creation time, newest first
    async fn list_reports_for_document(&self, document_id: &str) -> Result<Vec<ReportRecord>>;

    /// Delete a report and its match rows
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ReportNotFound` if the report doesn't exist
    async fn delete_report(&self, report_id: &str) -> Result<()>;

    // ═══════════════════════════════════════════════════════════════════════
    // Match Row Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Batch save match rows for a report
    ///
    /// # Arguments
    ///
    /// - `report_id`: Owning report
    /// - `matches`: Rows to save (their `report_id` fields must agree)
    async fn save_matches(&self, report_id: &str, matches: &[MatchRecord]) -> Result<()>;

    /// Get all match rows for a report
    ///
    /// # Returns
    ///
    /// Rows ordered by similarity descending
    async fn get_matches(&self, report_id: &str) -> Result<Vec<MatchRecord>>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ═══════════════════════════════════════════════════════════════════════
    // DocumentRecord Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_document_new() {
        let doc = DocumentRecord::new("doc-1", "essay.txt", "The quick brown fox");

        assert_eq!(doc.id, "doc-1");
        assert_eq!(doc.name, "essay.txt");
        assert_eq!(doc.content, "The quick brown fox");
        assert_eq!(doc.content_hash.len(), 64);
        assert_eq!(doc.metadata, serde_json::Value::Null);
    }

    #[test]
    fn test_document_hash_stable() {
        let a = DocumentRecord::new("a", "a.txt", "same content");
        let b = DocumentRecord::new("b", "b.txt", "same content");
        let c = DocumentRecord::new("c", "c.txt", "different content");

        assert_eq!(a.content_hash, b.content_hash);
        assert_ne!(a.content_hash, c.content_hash);
    }

    #[test]
    fn test_document_with_metadata() {
        let metadata = serde_json::json!({
            "mimeType": "text/plain",
            "uploader": "alice"
        });

        let doc =
            DocumentRecord::with_metadata("doc-1", "essay.txt", "content", metadata.clone());
        assert_eq!(doc.metadata, metadata);
    }

    #[test]
    fn test_document_serde_camel_case() {
        let doc = DocumentRecord::new("doc-1", "essay.txt", "content");

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"contentHash\""));
        assert!(json.contains("\"uploadedAt\""));

        let deserialized: DocumentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, doc.id);
        assert_eq!(deserialized.content_hash, doc.content_hash);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ReportRecord Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_report_comparison() {
        let scores = serde_json::json!({ "structural": 42.5, "cosine": 61.0 });
        let report = ReportRecord::comparison("rep-1", "doc-1", "doc-2", 48.12, scores.clone());

        assert_eq!(report.document1_id, "doc-1");
        assert_eq!(report.document2_id.as_deref(), Some("doc-2"));
        assert_eq!(report.overall_similarity, 48.12);
        assert_eq!(report.algorithm_scores, scores);
        assert_eq!(report.report_type, "comparison");
        assert!(!report.is_analysis());
    }

    #[test]
    fn test_report_analysis() {
        let report =
            ReportRecord::analysis("rep-2", "doc-1", 73.4, serde_json::Value::Null);

        assert_eq!(report.document1_id, "doc-1");
        assert_eq!(report.document2_id, None);
        assert!(report.is_analysis());
    }

    #[test]
    fn test_report_serde_camel_case() {
        let report =
            ReportRecord::comparison("rep-1", "doc-1", "doc-2", 10.0, serde_json::Value::Null);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"document1Id\""));
        assert!(json.contains("\"overallSimilarity\""));
        assert!(json.contains("\"reportType\""));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MatchRecord Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_match_record_builders() {
        let row = MatchRecord::new("m-1", "rep-1", 0.8, "3-gram", "document")
            .with_spans(10, 40, 5, 35)
            .with_texts("climate change is", "climate change is")
            .with_confidence(0.8);

        assert_eq!(row.report_id, "rep-1");
        assert_eq!(row.span_length(), 30);
        assert_eq!(row.algorithm, "3-gram");
        assert_eq!(row.source_url, None);
    }

    #[test]
    fn test_match_record_web_source() {
        let row = MatchRecord::new("m-2", "rep-1", 0.45, "web-search", "web")
            .with_web_source("https://example.com/a", "Example Article");

        assert_eq!(row.source_url.as_deref(), Some("https://example.com/a"));
        assert_eq!(row.source_title.as_deref(), Some("Example Article"));
    }

    #[test]
    fn test_match_record_serde_camel_case() {
        let row = MatchRecord::new("m-1", "rep-1", 1.0, "exact-match", "document");

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"matchedText\""));
        assert!(json.contains("\"sourceStartPos\""));
        assert!(json.contains("\"reportId\""));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Content Hash Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_hash_content_hex() {
        let hash = hash_content("hello");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_content_empty() {
        // SHA-256 of the empty string
        assert_eq!(
            hash_content(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
