//! Character cursor with position tracking.

use little_ir::{Position, Span};

/// A forward-only cursor over source text.
///
/// The cursor never moves backwards; `position` is the location of the
/// character `current` returns.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            position: Position::START,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        self.source
            .get(self.position.offset as usize..)
            .unwrap_or_default()
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume the current character.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.position.advance(ch);
        Some(ch)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.current() {
            if !pred(ch) {
                break;
            }
            self.position.advance(ch);
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current().is_none()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Source text between `start` and the cursor.
    pub fn slice_from(&self, start: Position) -> &'a str {
        self.source
            .get(start.offset as usize..self.position.offset as usize)
            .unwrap_or_default()
    }

    #[inline]
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.position)
    }

    /// Span covering just the current character (empty at end of input).
    pub fn char_span(&self) -> Span {
        let mut end = self.position;
        if let Some(ch) = self.current() {
            end.advance(ch);
        }
        Span::new(self.position, end)
    }
}
