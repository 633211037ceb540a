//! Lexer error types.
//!
//! Every lexical error is fatal: the first one ends the scan. An error
//! carries WHAT went wrong (`kind`) and WHERE the scanner was when it noticed
//! (`position`, the counter after the offending character was read).

use heluna_ir::Position;

/// A fatal lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("Tokenizer error{}: {kind}", at(.position))]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE the scanner stopped. `None` when no character was scanned.
    pub position: Option<Position>,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Input ended inside a string literal.
    #[error("unterminated string literal, string literals must start and end with '\"'")]
    UnterminatedString,
    /// `\` followed by a character other than `n r t \ "`.
    #[error("unknown escape character '\\{escape_char}' in string literal")]
    UnknownEscape { escape_char: char },
    /// Exponent marker `e` (or `e-`) followed by something other than a digit.
    #[error("incomplete exponent, expected a digit after 'e' but found {found:?}")]
    IncompleteExponent { found: char },
    /// Input ended right after an exponent marker `e` (or `e-`).
    #[error("incomplete exponent, expected a digit after 'e' before end of input")]
    IncompleteExponentAtEnd,
    /// Source too long for `u32` token indices.
    #[error("source is {len} bytes, token indices address at most {max} bytes", max = u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Component name shown in rendered errors.
    pub const COMPONENT: &'static str = "Tokenizer";

    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError {
            kind,
            position: Some(position),
        }
    }

    /// Error raised before scanning starts.
    pub fn unpositioned(kind: LexErrorKind) -> Self {
        LexError {
            kind,
            position: None,
        }
    }

    /// The message without component or position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

fn at(position: &Option<Position>) -> String {
    position.map_or_else(String::new, |position| format!(" at {position}"))
}
