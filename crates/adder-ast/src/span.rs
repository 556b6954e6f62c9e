use std::ops::Range;

use serde::Serialize;

/// Byte-offset span into source text. Start is inclusive, end is exclusive.
///
/// The inferencer never reads source text itself, but spans travel with
/// every node so that diagnostics can point back into whatever source the
/// upstream parser consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self { start, end }
    }

    /// A zero-length span at a single offset.
    pub fn at(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The span as a `Range<usize>`, the form diagnostic renderers want.
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}
