//! Normalization domain logic
//!
//! Pure text transforms with no I/O.

mod normalizer;
mod statistics;

pub use normalizer::TextNormalizer;
pub use statistics::TextStatistics;
