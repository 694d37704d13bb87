//! Byte ranges into diagram source text.

use std::ops::Range;

/// A byte range into the source text a diagnostic refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    ///
    /// A reversed range is normalized so that `start <= end`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start.min(range.end),
            end: range.start.max(range.end),
        }
    }

    /// Create an empty span at `offset`.
    pub fn at(offset: usize) -> Self {
        Self::new(offset..offset)
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Clamp the span so it lies within a source of `len` bytes.
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len)..self.end.min(len))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}
