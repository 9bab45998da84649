//! Error types for veritext-storage

use std::fmt;
use thiserror::Error;

/// Storage error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Document not found
    DocumentNotFound,
    /// Report not found
    ReportNotFound,
    /// Conflicting write (duplicate id)
    Conflict,
    /// Serialization/deserialization errors
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DocumentNotFound => "document_not_found",
            ErrorKind::ReportNotFound => "report_not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Serialization => "serialization",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct StorageError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl StorageError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn document_not_found(document_id: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::DocumentNotFound,
            format!("Document not found: {}", document_id.into()),
        )
    }

    pub fn report_not_found(report_id: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::ReportNotFound,
            format!("Report not found: {}", report_id.into()),
        )
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }
}

// JSON error conversions
impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    // ═══════════════════════════════════════════════════════════════════════
    // Error Construction Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_error_display() {
        let err = StorageError::document_not_found("doc-42");
        let msg = format!("{}", err);
        assert!(msg.contains("document_not_found"));
        assert!(msg.contains("doc-42"));
    }

    #[test]
    fn test_conflict_error() {
        let err = StorageError::conflict("Duplicate report id");
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Duplicate report id");
        assert!(err.source.is_none());

        let msg = format!("{}", err);
        assert_eq!(msg, "[conflict] Duplicate report id");
    }

    #[test]
    fn test_serialization_error() {
        let err = StorageError::serialization("Invalid JSON");
        assert_eq!(err.kind, ErrorKind::Serialization);

        let msg = format!("{}", err);
        assert_eq!(msg, "[serialization] Invalid JSON");
    }

    #[test]
    fn test_report_not_found() {
        let err = StorageError::report_not_found("rep-7");
        assert_eq!(err.kind, ErrorKind::ReportNotFound);
        assert!(err.message.contains("rep-7"));

        let msg = format!("{}", err);
        assert!(msg.contains("[report_not_found]"));
    }

    #[test]
    fn test_with_source() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = StorageError::serialization("payload unreadable").with_source(io_err);

        assert_eq!(err.kind, ErrorKind::Serialization);
        assert!(err.source.is_some());

        // Test error source chain
        let source = err.source().unwrap();
        assert!(source.to_string().contains("file not found"));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ErrorKind Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::DocumentNotFound.as_str(), "document_not_found");
        assert_eq!(ErrorKind::ReportNotFound.as_str(), "report_not_found");
        assert_eq!(ErrorKind::Conflict.as_str(), "conflict");
        assert_eq!(ErrorKind::Serialization.as_str(), "serialization");
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(ErrorKind::Conflict, ErrorKind::Conflict);
        assert_ne!(ErrorKind::Conflict, ErrorKind::Serialization);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Conversion Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
            .err()
            .unwrap();
        let err: StorageError = json_err.into();

        assert_eq!(err.kind, ErrorKind::Serialization);
        assert!(err.message.contains("JSON error"));
        assert!(err.source.is_some());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Result Type Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(StorageError::document_not_found("missing"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let result = outer();
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DocumentNotFound);
    }
}
