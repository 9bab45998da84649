//! Error types for the veritext-engine crate
//!
//! Unified error handling across all features. Storage and serialization
//! failures convert automatically so usecases can propagate with `?`.

use thiserror::Error;
use veritext_storage::StorageError;

/// Unified error type for detection and analysis operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input rejected before any analysis ran
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Referenced document is not present in the store
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// Web match provider failure
    #[error("web search failed: {0}")]
    WebSearch(String),

    /// Persistence layer failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// JSON serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    // Convenience constructors
    pub fn invalid_input(message: impl Into<String>) -> Self {
        EngineError::InvalidInput(message.into())
    }

    pub fn document_not_found(id: impl Into<String>) -> Self {
        EngineError::DocumentNotFound(id.into())
    }

    pub fn web_search(message: impl Into<String>) -> Self {
        EngineError::WebSearch(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EngineError>;
