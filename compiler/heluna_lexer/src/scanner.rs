//! Character-driven scan state machine.
//!
//! The scanner keeps exactly one [`Mode`] at a time: `Idle` between tokens,
//! otherwise the kind of token being accumulated. Each mode has its own
//! transition method taking the next character; the loop in [`Scanner::run`]
//! only dispatches.
//!
//! Token boundaries are found by reading one character past the token. When
//! that character belongs to the next token it goes back through the reader's
//! replay slot and is scanned again from `Idle`.

use std::mem;

use heluna_ir::{Token, TokenKind, TokenList};
use tracing::{debug, trace};

use crate::chars::{decode_escape, is_blank, is_digit, is_symbol};
use crate::reader::SourceReader;
use crate::{LexError, LexErrorKind};

/// What the scanner is currently accumulating.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Mode {
    Idle,
    /// `escaped` is set right after a `\`.
    String {
        escaped: bool,
    },
    Integer,
    Float,
    Comment,
    Identifier,
    /// A label is emitted as soon as its `:` is read, so only references
    /// ever stay in this mode.
    Reference,
}

impl Mode {
    fn token_kind(self) -> TokenKind {
        match self {
            Mode::Idle => TokenKind::None,
            Mode::String { .. } => TokenKind::String,
            Mode::Integer => TokenKind::Integer,
            Mode::Float => TokenKind::Float,
            Mode::Comment => TokenKind::Comment,
            Mode::Identifier => TokenKind::Identifier,
            Mode::Reference => TokenKind::Reference,
        }
    }
}

/// Transient scan state. Lives for exactly one call to `lex`.
pub(crate) struct Scanner<'src> {
    reader: SourceReader<'src>,
    mode: Mode,
    /// Decoded text of the pending token.
    buffer: String,
    /// Byte offset of the pending token's first character.
    start: u32,
    tokens: TokenList,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Scanner {
            reader: SourceReader::new(source),
            mode: Mode::Idle,
            buffer: String::new(),
            start: 0,
            tokens: TokenList::new(source),
        }
    }

    /// Scan the whole input.
    ///
    /// Either every character is consumed and the full list is returned, or
    /// the first lexical error is returned and the partial list is dropped.
    pub(crate) fn run(mut self) -> Result<TokenList, LexError> {
        while let Some((offset, ch)) = self.reader.read() {
            match self.mode {
                Mode::Idle => self.idle(offset, ch),
                Mode::String { escaped } => self.string(ch, escaped)?,
                Mode::Integer | Mode::Float => self.number(offset, ch)?,
                Mode::Comment => self.comment(ch),
                Mode::Identifier => self.identifier(offset, ch),
                Mode::Reference => self.reference(offset, ch),
            }
        }
        self.finish()
    }

    fn idle(&mut self, offset: u32, ch: char) {
        if is_blank(ch) {
            return;
        }
        self.start = offset;
        match ch {
            '"' => self.mode = Mode::String { escaped: false },
            '$' => self.mode = Mode::Reference,
            '#' => self.mode = Mode::Comment,
            c if is_digit(c) => {
                self.buffer.push(c);
                self.mode = Mode::Integer;
            }
            c if is_symbol(c) => {
                self.buffer.push(c);
                self.emit(TokenKind::Symbol);
            }
            c => {
                self.buffer.push(c);
                self.mode = Mode::Identifier;
            }
        }
    }

    fn string(&mut self, ch: char, escaped: bool) -> Result<(), LexError> {
        if escaped {
            let Some(decoded) = decode_escape(ch) else {
                return Err(self.error(LexErrorKind::UnknownEscape { escape_char: ch }));
            };
            self.buffer.push(decoded);
            self.mode = Mode::String { escaped: false };
            return Ok(());
        }
        match ch {
            '"' => self.emit(TokenKind::String),
            '\\' => self.mode = Mode::String { escaped: true },
            c => self.buffer.push(c),
        }
        Ok(())
    }

    /// Shared transition for `Integer` and `Float`.
    fn number(&mut self, offset: u32, ch: char) -> Result<(), LexError> {
        let kind = self.mode.token_kind();
        debug_assert!(kind.is_number(), "number transition outside a numeric mode");
        let after_marker = self.buffer.ends_with('e');

        if is_digit(ch) {
            self.buffer.push(ch);
        } else if is_blank(ch) {
            self.emit(kind);
        } else if ch == '.' {
            if self.tokens.last_text_is(".") {
                // Numeric accessor (`foo.9.2`): this dot starts the next access.
                self.emit(kind);
                self.reader.push_back(offset, ch);
            } else {
                self.buffer.push('.');
                self.mode = Mode::Float;
            }
        } else if ch == 'e' || ch == 'E' {
            self.buffer.push('e');
            self.mode = Mode::Float;
        } else if after_marker && ch == '-' {
            self.buffer.push('-');
            self.exponent_digit()?;
        } else if after_marker {
            return Err(self.error(LexErrorKind::IncompleteExponent { found: ch }));
        } else {
            // `-` outside an exponent, other symbols, identifier characters.
            self.emit(kind);
            self.reader.push_back(offset, ch);
        }
        Ok(())
    }

    /// The character after `e-` must be a digit.
    fn exponent_digit(&mut self) -> Result<(), LexError> {
        match self.reader.read() {
            Some((_, ch)) if is_digit(ch) => {
                self.buffer.push(ch);
                Ok(())
            }
            Some((_, ch)) => Err(self.error(LexErrorKind::IncompleteExponent { found: ch })),
            None => Err(self.error(LexErrorKind::IncompleteExponentAtEnd)),
        }
    }

    fn comment(&mut self, ch: char) {
        if ch == '\n' {
            self.emit(TokenKind::Comment);
        } else {
            self.buffer.push(ch);
        }
    }

    fn identifier(&mut self, offset: u32, ch: char) {
        if is_blank(ch) {
            self.emit(TokenKind::Identifier);
        } else if is_symbol(ch) {
            self.emit(TokenKind::Identifier);
            self.reader.push_back(offset, ch);
        } else if ch == ':' {
            // The colon is consumed as part of the label.
            self.emit(TokenKind::Label);
        } else {
            self.buffer.push(ch);
        }
    }

    fn reference(&mut self, offset: u32, ch: char) {
        if is_blank(ch) {
            self.emit(TokenKind::Reference);
        } else if is_symbol(ch) {
            self.emit(TokenKind::Reference);
            self.reader.push_back(offset, ch);
        } else {
            self.buffer.push(ch);
        }
    }

    /// End of input: reject unfinished literals, emit any pending token.
    fn finish(mut self) -> Result<TokenList, LexError> {
        match self.mode {
            Mode::Idle => {}
            Mode::String { .. } => return Err(self.error(LexErrorKind::UnterminatedString)),
            Mode::Float if self.buffer.ends_with('e') => {
                return Err(self.error(LexErrorKind::IncompleteExponentAtEnd));
            }
            mode => self.emit(mode.token_kind()),
        }
        debug!(count = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    /// Push the pending token, stamped with the current counter, and go idle.
    fn emit(&mut self, kind: TokenKind) {
        let token = Token::new(
            kind,
            mem::take(&mut self.buffer),
            self.reader.position(),
            self.start,
        );
        trace!(?token, "emit");
        self.tokens.push(token);
        self.mode = Mode::Idle;
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        let error = LexError::new(kind, self.reader.position());
        debug!(%error, mode = ?self.mode, "scan failed");
        error
    }
}
