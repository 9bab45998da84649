//! Shared models

mod error;
mod span;

pub use error::{EngineError, Result};
pub use span::Span;

// Re-export serde_json::Value for convenience (used by report metadata)
pub use serde_json::Value;
