//! Source Spans
//!
//! Byte-offset spans into a source file. Spans are half-open ranges
//! (`start..end`) and are the only location information the engine
//! attaches to diagnostics; line/column conversion belongs to the
//! outer harness.

use serde::{Deserialize, Serialize};

/// A half-open byte range into a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: u32,
    /// End byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Span { start, end }
    }

    /// An empty span at a single position.
    pub fn empty(pos: u32) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains a byte offset.
    pub fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_basics() {
        let span = Span::new(4, 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
        assert!(span.contains(4));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }

    #[test]
    fn empty_span() {
        let span = Span::empty(7);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert!(!span.contains(7));
    }
}
