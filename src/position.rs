//! Source coordinates for diagnostics: positions and inclusive spans.

use std::fmt;

/// A position in a source text: byte-independent character offset plus
/// 1-based line and column.
///
/// The default position is offset 0 at line 1, column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl SourcePosition {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Advance this position across `text`, one character at a time.
    /// Newlines bump the line and reset the column.
    #[must_use]
    pub fn add_str(mut self, text: &str) -> Self {
        for ch in text.chars() {
            self.offset += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An inclusive range between two source positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl Span {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// A span covering a single position.
    pub fn point(position: SourcePosition) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// A span is empty when it covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// The smallest span covering both `self` and `other`.
    #[must_use]
    pub fn merge(&self, other: &Span) -> Span {
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
