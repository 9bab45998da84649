//! VeriText Storage - Document and Report Persistence
//!
//! Flat persistence domain for the similarity engine: stored documents, the
//! reports produced by analyzing them, and per-report match rows.
//!
//! ## Core Principles
//!
//! 1. **Flat records**: rows mirror the wire schema, not engine result types
//! 2. **Ports over backends**: engines take `&dyn DocumentStore` /
//!    `&dyn ReportStore`; no global store registry
//! 3. **Report ownership**: match rows live and die with their report
//!
//! ## Usage
//!
//! ```rust,ignore
//! use veritext_storage::{DocumentRecord, DocumentStore, InMemoryDocumentStore};
//!
//! let store = InMemoryDocumentStore::new();
//!
//! // 1. Save documents
//! let doc = DocumentRecord::new("doc-1", "essay.txt", "The quick brown fox...");
//! store.save_document(&doc).await?;
//!
//! // 2. Query the corpus
//! let all = store.list_documents().await?;
//!
//! // 3. Drop what is no longer needed
//! store.delete_document("doc-1").await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

// Domain re-exports
pub use domain::{
    hash_content, DocumentRecord, DocumentStore, MatchRecord, ReportRecord, ReportStore,
};

// Infrastructure re-exports
pub use infrastructure::{InMemoryDocumentStore, InMemoryReportStore};
