//! In-Memory Document and Report Stores
//!
//! Simple HashMap-based implementations of the storage ports. Handles are
//! cheap to clone and share one underlying map.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::{DocumentRecord, DocumentStore, MatchRecord, ReportRecord, ReportStore};
use crate::error::StorageError;
use crate::Result;

#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<String, DocumentRecord>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the store from an iterator of records (test and demo setup)
    pub fn with_documents(documents: impl IntoIterator<Item = DocumentRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.documents.write().unwrap();
            for doc in documents {
                map.insert(doc.id.clone(), doc);
            }
        }
        store
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn save_document(&self, document: &DocumentRecord) -> Result<()> {
        self.documents
            .write()
            .unwrap()
            .insert(document.id.clone(), document.clone());
        Ok(())
    }

    async fn get_document(&self, document_id: &str) -> Result<Option<DocumentRecord>> {
        Ok(self.documents.read().unwrap().get(document_id).cloned())
    }

    async fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        let mut docs: Vec<DocumentRecord> =
            self.documents.read().unwrap().values().cloned().collect();
        docs.sort_by(|a, b| {
            a.uploaded_at
                .cmp(&b.uploaded_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(docs)
    }

    async fn delete_document(&self, document_id: &str) -> Result<()> {
        match self.documents.write().unwrap().remove(document_id) {
            Some(_) => Ok(()),
            None => Err(StorageError::document_not_found(document_id)),
        }
    }

    async fn count_documents(&self) -> Result<usize> {
        Ok(self.documents.read().unwrap().len())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryReportStore {
    reports: Arc<RwLock<HashMap<String, ReportRecord>>>,
    matches: Arc<RwLock<HashMap<String, Vec<MatchRecord>>>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self {
            reports: Arc::new(RwLock::new(HashMap::new())),
            matches: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn save_report(&self, report: &ReportRecord) -> Result<()> {
        self.reports
            .write()
            .unwrap()
            .insert(report.id.clone(), report.clone());
        Ok(())
    }

    async fn get_report(&self, report_id: &str) -> Result<Option<ReportRecord>> {
        Ok(self.reports.read().unwrap().get(report_id).cloned())
    }

    async fn list_reports_for_document(&self, document_id: &str) -> Result<Vec<ReportRecord>> {
        let mut reports: Vec<ReportRecord> = self
            .reports
            .read()
            .unwrap()
            .values()
            .filter(|r| {
                r.document1_id == document_id || r.document2_id.as_deref() == Some(document_id)
            })
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    async fn delete_report(&self, report_id: &str) -> Result<()> {
        match self.reports.write().unwrap().remove(report_id) {
            Some(_) => {
                // Match rows cascade with their report
                self.matches.write().unwrap().remove(report_id);
                Ok(())
            }
            None => Err(StorageError::report_not_found(report_id)),
        }
    }

    async fn save_matches(&self, report_id: &str, matches: &[MatchRecord]) -> Result<()> {
        self.matches
            .write()
            .unwrap()
            .entry(report_id.to_string())
            .or_default()
            .extend_from_slice(matches);
        Ok(())
    }

    async fn get_matches(&self, report_id: &str) -> Result<Vec<MatchRecord>> {
        let mut rows = self
            .matches
            .read()
            .unwrap()
            .get(report_id)
            .cloned()
            .unwrap_or_default();
        rows.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        Ok(rows)
    }
}
