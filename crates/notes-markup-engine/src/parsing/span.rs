use std::ops::Range;

use serde::Serialize;

/// A byte range `[start, end)` into the text slice a node was parsed from.
///
/// Spans are local: a child's span indexes its parent's `raw` text, not the
/// original input handed to [`parse`](crate::parsing::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Shifts both ends left by `base`, re-expressing the span relative to a
    /// slice that starts at `base`.
    #[must_use]
    pub fn relative_to(self, base: usize) -> Self {
        Self {
            start: self.start - base,
            end: self.end - base,
        }
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}
