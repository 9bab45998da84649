//! Citation Domain Models
//!
//! Pure citation records, analysis aggregates, and the citation-aware text
//! filter. No regex machinery here; detectors live in `infrastructure`.
//!
//! # Architecture
//!
//! ```text
//! domain/
//! ├── citation.rs  # Citation record, kinds, parsed source details
//! ├── analysis.rs  # Analysis aggregate + summary statistics
//! └── filter.rs    # Span blanking and containment queries
//! ```

pub mod analysis;
pub mod citation;
pub mod filter;

// Re-exports for convenience
pub use analysis::{CitationAnalysis, CitationStatistics};
pub use citation::{Citation, CitationKind, SourceInfo};
pub use filter::CitationFilter;
