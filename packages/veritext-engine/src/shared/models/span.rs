//! Text location types
//!
//! These types represent half-open ranges in a document. Offsets are byte
//! offsets into the text they were produced from; preprocessed text is pure
//! ASCII, so its offsets double as character offsets.

use serde::{Deserialize, Serialize};

/// Half-open range `[start, end)` in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new Span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero span (0..0)
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when the two ranges share at least one character
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// True when `other` lies entirely inside this span
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::zero()
    }
}
