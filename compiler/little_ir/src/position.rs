//! Source positions and spans.
//!
//! Positions never influence execution; they exist so that syntax and runtime
//! errors can point at the offending text.

use std::fmt;

/// A point in the source text.
///
/// - `offset`: byte offset from the start of the source
/// - `line`: 1-based line number
/// - `column`: 1-based column, counted in characters
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first character of a source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// Step past `ch`.
    ///
    /// A newline moves to column 1 of the next line; any other character moves
    /// one column right. The offset grows by the UTF-8 width of `ch`.
    #[inline]
    pub fn advance(&mut self, ch: char) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "len_utf8 is at most 4"
        )]
        let width = ch.len_utf8() as u32;
        self.offset += width;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of source text: `start` inclusive, `end` exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `at`.
    #[inline]
    pub const fn point(at: Position) -> Self {
        Span { start: at, end: at }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
