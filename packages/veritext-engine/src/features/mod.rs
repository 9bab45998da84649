//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations
//!
//! Detection pipeline order: normalize → matching → citation → websearch
//! → scoring → analysis.

pub mod analysis;
pub mod citation;
pub mod matching;
pub mod normalize;
pub mod scoring;
pub mod websearch;
