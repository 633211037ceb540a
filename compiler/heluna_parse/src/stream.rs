//! Token stream for navigating the scanner's output.
//!
//! Provides sequential consumption, conditional matching and explicit
//! save/restore of the cursor for speculative parsing.
//!
//! # Failure discipline
//!
//! - `consume_*` treat a mismatch as a normal outcome: they return `false`
//!   and leave the cursor untouched.
//! - `require_*` fail with a [`ParseError`], also leaving the cursor where it
//!   was before the call, so a caller can try an alternative rule.
//!
//! ```ignore
//! let saved = stream.position();
//! match parse_assignment(&mut stream) {
//!     Ok(stmt) => stmt,
//!     Err(_) => {
//!         stream.set_position(saved);
//!         parse_expression(&mut stream)?
//!     }
//! }
//! ```

use std::sync::Arc;

use heluna_ir::{Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Cursor over a finished token list.
///
/// The token list is shared: cloning a stream is cheap and yields an
/// independent cursor over the same tokens.
///
/// Invariant: `0 <= position <= len`.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Arc<TokenList>,
    pos: usize,
}

impl TokenStream {
    /// Create a stream positioned at the first token.
    pub fn new(tokens: TokenList) -> Self {
        TokenStream {
            tokens: Arc::new(tokens),
            pos: 0,
        }
    }

    /// The whole token list, independent of the cursor.
    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// The raw source the tokens were scanned from.
    #[inline]
    pub fn source(&self) -> &str {
        self.tokens.source()
    }

    /// Get the total number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index, ignoring the cursor.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get the current cursor position (one past the last consumed token).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor, e.g. to restore a position saved before
    /// speculative parsing.
    ///
    /// Positions past the end are clamped to the end.
    pub fn set_position(&mut self, pos: usize) {
        let len = self.tokens.len();
        if pos > len {
            trace!(pos, len, "set_position past end, clamping");
        }
        self.pos = pos.min(len);
    }

    /// Move the cursor back to the first token.
    pub fn reset(&mut self) {
        self.set_position(0);
    }

    /// Check if any token is left to consume.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Number of tokens left to consume.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Look at the next token without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the next token, or `None` at the end.
    pub fn next_token(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Un-consume the last consumed token.
    ///
    /// At the start of the stream this is a no-op that leaves the cursor at
    /// zero rather than an error.
    pub fn return_token(&mut self) {
        if let Some(pos) = self.pos.checked_sub(1) {
            self.pos = pos;
        } else {
            trace!("return_token at start of stream");
            self.reset();
        }
    }

    /// Consume the next token, failing with `err` if the stream is exhausted.
    pub fn require_next(&mut self, err: &str) -> Result<&Token, ParseError> {
        self.next_token()
            .ok_or_else(|| ParseError::unexpected_end(err))
    }

    /// Consume the next token if it is a symbol, otherwise fail with `err`.
    pub fn require_symbol(&mut self, err: &str) -> Result<&Token, ParseError> {
        self.require_kind(TokenKind::Symbol, err)
    }

    /// Consume the next token if it is the symbol `text`.
    pub fn consume_symbol(&mut self, text: &str) -> bool {
        self.consume_if(|token| token.is_symbol(text))
    }

    /// Consume the next token if it is an identifier, otherwise fail with `err`.
    pub fn require_identifier(&mut self, err: &str) -> Result<&Token, ParseError> {
        self.require_kind(TokenKind::Identifier, err)
    }

    /// Consume the next token if it is the identifier `text`.
    pub fn consume_identifier(&mut self, text: &str) -> bool {
        self.consume_if(|token| token.is_identifier(text))
    }

    /// Consume the identifier `text` or fail with `err`.
    ///
    /// Used for keywords the grammar demands at this point.
    pub fn consume_identifier_hard(&mut self, text: &str, err: &str) -> Result<(), ParseError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.is_identifier(text) => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => {
                trace!(pos = self.pos, ?token, expected = text, "consume_identifier_hard failed");
                Err(ParseError::unexpected_token(err, token.clone()))
            }
            None => Err(ParseError::unexpected_end(err)),
        }
    }

    fn require_kind(&mut self, kind: TokenKind, err: &str) -> Result<&Token, ParseError> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Err(ParseError::unexpected_end(err));
        };
        if token.kind != kind {
            trace!(pos = self.pos, ?token, expected = %kind, "require failed");
            return Err(ParseError::unexpected_token(err, token.clone()));
        }
        self.pos += 1;
        Ok(token)
    }

    fn consume_if(&mut self, matches: impl FnOnce(&Token) -> bool) -> bool {
        let matched = self.tokens.get(self.pos).is_some_and(matches);
        if matched {
            self.pos += 1;
        }
        matched
    }
}

#[cfg(test)]
mod tests;
