//! Parse error types.
//!
//! Stream navigation errors are fatal to the current parse attempt only.
//! The cursor is left where it was before the failing call, so a caller can
//! backtrack and try another rule.

use heluna_ir::{Position, Token};

/// A stream navigation error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("Parser error{}: {message}", at(.token))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Caller-supplied description of what was expected.
    pub message: String,
    /// The offending token. `None` when the stream was exhausted.
    pub token: Option<Token>,
}

/// Why a stream navigation call failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// A token was required but the stream was exhausted.
    UnexpectedEnd,
    /// The next token has the wrong kind or text.
    UnexpectedToken,
}

impl ParseError {
    /// Component name shown in rendered errors.
    pub const COMPONENT: &'static str = "Parser";

    pub fn unexpected_end(message: impl Into<String>) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedEnd,
            message: message.into(),
            token: None,
        }
    }

    pub fn unexpected_token(message: impl Into<String>, token: Token) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: message.into(),
            token: Some(token),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Position of the offending token, if there was one.
    pub fn position(&self) -> Option<Position> {
        self.token.as_ref().map(Token::position)
    }
}

fn at(token: &Option<Token>) -> String {
    token
        .as_ref()
        .map_or_else(String::new, |token| format!(" at {}", token.position()))
}
