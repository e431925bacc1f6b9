//! Position and location tracking for scene sources
//!
//! This module defines the data structures for representing positions and
//! locations in scene source text, plus the index that converts byte offsets
//! to line/column positions.
//!
//! ## Types
//!
//! - [`Position`] - A line:column position in source text
//! - [`Range`] - A source range with start/end positions and byte span
//! - [`SourceIndex`] - Converts byte offsets to positions
//!
//! ## Key Design
//!
//! - **Mandatory locations**: every tree node and token carries a `Range`
//! - **No null locations**: the default range is (0, 0) to (0, 0), never None
//! - **Byte spans preserved**: both byte offsets and line:column are stored
//! - **Unicode-aware**: line starts are found via `char_indices()`
//! - **Cheap conversion**: O(log n) binary search per byte offset
//!
//! The lexer attaches a `Range` to each token as it is produced; the parser
//! merges child ranges bottom-up so every node spans exactly the tokens that
//! produced it.

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// A position in source text (line and column, both zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// A location in source text: byte span plus start and end positions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Check if a position falls within this range (inclusive on both ends)
    pub fn contains(&self, pos: Position) -> bool {
        let after_start = self.start.line < pos.line
            || (self.start.line == pos.line && self.start.column <= pos.column);
        let before_end =
            self.end.line > pos.line || (self.end.line == pos.line && self.end.column >= pos.column);
        after_start && before_end
    }

    /// The smallest range covering both `self` and `other`.
    ///
    /// Used by the parser to compute a node's extent from its first and last
    /// tokens or children.
    pub fn merge(&self, other: &Range) -> Range {
        let (span_start, start) = if other.start < self.start {
            (other.span.start, other.start)
        } else {
            (self.span.start.min(other.span.start), self.start)
        };
        let (span_end, end) = if other.end > self.end {
            (other.span.end, other.end)
        } else {
            (self.span.end.max(other.span.end), self.end)
        };
        Range::new(span_start..span_end, start, end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(0..0, Position::default(), Position::default())
    }
}

/// Fast conversion from byte offsets to line/column positions
pub struct SourceIndex {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceIndex {
    /// Build the index for one source text
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn position_at(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Convert a byte span to a full range
    pub fn range(&self, span: ByteRange<usize>) -> Range {
        let start = self.position_at(span.start);
        let end = self.position_at(span.end);
        Range::new(span, start, end)
    }

    /// Total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        let a = Position::new(1, 5);
        let b = Position::new(1, 5);
        let c = Position::new(2, 0);

        assert_eq!(a, b);
        assert!(a < c);
        assert!(Position::new(1, 9) < Position::new(2, 0));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(5, 10)), "5:10");
    }

    #[test]
    fn test_range_contains_single_line() {
        let range = Range::new(0..10, Position::new(0, 0), Position::new(0, 10));

        assert!(range.contains(Position::new(0, 0)));
        assert!(range.contains(Position::new(0, 5)));
        assert!(range.contains(Position::new(0, 10)));

        assert!(!range.contains(Position::new(0, 11)));
        assert!(!range.contains(Position::new(1, 0)));
    }

    #[test]
    fn test_range_contains_multiline() {
        let range = Range::new(0..0, Position::new(1, 5), Position::new(2, 10));

        assert!(!range.contains(Position::new(1, 4)));
        assert!(!range.contains(Position::new(0, 5)));

        assert!(range.contains(Position::new(1, 5)));
        assert!(range.contains(Position::new(2, 0)));
        assert!(range.contains(Position::new(2, 10)));

        assert!(!range.contains(Position::new(3, 0)));
    }

    #[test]
    fn test_range_merge() {
        let first = Range::new(2..5, Position::new(0, 2), Position::new(0, 5));
        let last = Range::new(10..20, Position::new(3, 0), Position::new(4, 3));

        let merged = first.merge(&last);
        assert_eq!(merged.span, 2..20);
        assert_eq!(merged.start, Position::new(0, 2));
        assert_eq!(merged.end, Position::new(4, 3));

        // merge is symmetric
        assert_eq!(last.merge(&first), merged);
    }

    #[test]
    fn test_range_merge_overlapping() {
        let a = Range::new(0..8, Position::new(0, 0), Position::new(0, 8));
        let b = Range::new(4..12, Position::new(0, 4), Position::new(0, 12));

        let merged = a.merge(&b);
        assert_eq!(merged.span, 0..12);
        assert_eq!(merged.start, Position::new(0, 0));
        assert_eq!(merged.end, Position::new(0, 12));
    }

    #[test]
    fn test_range_display() {
        let range = Range::new(0..0, Position::new(1, 0), Position::new(2, 5));
        assert_eq!(format!("{}", range), "1:0..2:5");
    }

    #[test]
    fn test_position_at_single_line() {
        let index = SourceIndex::new("camera");
        assert_eq!(index.position_at(0), Position::new(0, 0));
        assert_eq!(index.position_at(3), Position::new(0, 3));
        assert_eq!(index.position_at(6), Position::new(0, 6));
    }

    #[test]
    fn test_position_at_multiline() {
        let index = SourceIndex::new("camera {\n}\nlight");

        assert_eq!(index.position_at(0), Position::new(0, 0));
        assert_eq!(index.position_at(8), Position::new(0, 8));
        assert_eq!(index.position_at(9), Position::new(1, 0));
        assert_eq!(index.position_at(11), Position::new(2, 0));
        assert_eq!(index.position_at(15), Position::new(2, 4));
    }

    #[test]
    fn test_position_at_with_unicode() {
        let index = SourceIndex::new("wörld\nnext");
        // 'ö' takes two bytes; the newline sits at byte 6
        assert_eq!(index.position_at(7), Position::new(1, 0));
        assert_eq!(index.position_at(8), Position::new(1, 1));
    }

    #[test]
    fn test_span_to_range() {
        let index = SourceIndex::new("camera {\n}");
        let range = index.range(7..10);

        assert_eq!(range.span, 7..10);
        assert_eq!(range.start, Position::new(0, 7));
        assert_eq!(range.end, Position::new(1, 1));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceIndex::new("single").line_count(), 1);
        assert_eq!(SourceIndex::new("a\nb").line_count(), 2);
        assert_eq!(SourceIndex::new("a\nb\nc").line_count(), 3);
    }
}
