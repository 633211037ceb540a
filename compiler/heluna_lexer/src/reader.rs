//! Character reader with position tracking and one-character pushback.
//!
//! The reader hands out `(byte offset, char)` pairs. Every fresh character
//! advances the line/column counter: a newline moves to the next line and
//! resets the column to 1, anything else bumps the column.
//!
//! # Pushback
//!
//! The scanner decides where a token ends by reading one character past it.
//! That character is handed back through [`SourceReader::push_back`] and
//! replayed by the next [`SourceReader::read`]. Replaying does not move the
//! counter, so a token completed by pushback and the token that starts with
//! the replayed character share the same position.

use std::str::CharIndices;

use heluna_ir::Position;

pub(crate) struct SourceReader<'src> {
    chars: CharIndices<'src>,
    /// Replay slot: at most one pushed-back character with its offset.
    replay: Option<(u32, char)>,
    line: u32,
    column: u32,
}

impl<'src> SourceReader<'src> {
    /// Create a reader at the start of `source`.
    ///
    /// `source` must be at most `u32::MAX` bytes long; `lex` checks this
    /// before scanning.
    pub(crate) fn new(source: &'src str) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source length must fit in u32"
        );
        SourceReader {
            chars: source.char_indices(),
            replay: None,
            line: Position::START.line,
            column: Position::START.column,
        }
    }

    /// Read the next character, replaying a pushed-back one first.
    ///
    /// Returns `None` at end of input.
    pub(crate) fn read(&mut self) -> Option<(u32, char)> {
        if let Some(replayed) = self.replay.take() {
            return Some(replayed);
        }
        let (offset, ch) = self.chars.next()?;
        if ch == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some((u32::try_from(offset).unwrap_or(u32::MAX), ch))
    }

    /// Un-read a character so the next `read` returns it again.
    pub(crate) fn push_back(&mut self, offset: u32, ch: char) {
        debug_assert!(
            self.replay.is_none(),
            "at most one character can be pushed back"
        );
        self.replay = Some((offset, ch));
    }

    /// Current value of the line/column counter.
    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
