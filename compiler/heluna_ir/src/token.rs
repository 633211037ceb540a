//! Token types for the Heluna lexer.

use std::fmt;

use crate::Position;

/// The kind of a lexical token.
///
/// `None` is the "no token" sentinel. It never appears as the kind of a token
/// in a finished `TokenList`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Decimal integer literal: `42`
    Integer,
    /// Float literal: `3.14`, `1e9`, `2.5e-8` (exponent marker stored as `e`)
    Float,
    /// String literal with escapes resolved: `"hello\n"`
    String,
    /// Single reserved character: `=`, `.`, `(`, ...
    Symbol,
    /// Line comment body after `#`
    Comment,
    /// Named lookup introduced by `$`: `$foo`
    Reference,
    /// Named target terminated by `:`: `foo:`
    Label,
    /// Any other run of characters: `foo`
    Identifier,
    None,
}

impl TokenKind {
    /// Human-readable name of this kind, used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::Symbol => "Symbol",
            TokenKind::Comment => "Comment",
            TokenKind::Reference => "Reference",
            TokenKind::Label => "Label",
            TokenKind::Identifier => "Identifier",
            TokenKind::None => "None",
        }
    }

    /// True for the two numeric literal kinds.
    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned span of source text.
///
/// `line`/`column` are the scanner's counter *after* the character that
/// completed the token was read. A token completed by pushback carries the
/// position of the pushed-back character, not of its own last character.
/// `index` is the byte offset of the token's first character (the opening
/// delimiter for strings, references and comments).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded payload, without delimiters.
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub index: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position, index: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line: position.line,
            column: position.column,
            index,
        }
    }

    /// Line/column at which the token was completed.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// True if this is a `Symbol` token with exactly `text`.
    #[inline]
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == text
    }

    /// True if this is an `Identifier` token with exactly `text`.
    #[inline]
    pub fn is_identifier(&self, text: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == text
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) @ {}:{} #{}",
            self.kind, self.text, self.line, self.column, self.index
        )
    }
}

#[cfg(test)]
mod tests;
