//! Scan-ordered token list.

use std::ops::Index;

use crate::Token;

/// The tokens produced by one scan, in scan order, together with the source
/// they were scanned from.
///
/// Tokens are only appended by the lexer. Once a scan finishes the list is
/// treated as immutable; consumers navigate it through a cursor.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TokenList {
    source: String,
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty list for `source`.
    pub fn new(source: impl Into<String>) -> Self {
        TokenList {
            source: source.into(),
            tokens: Vec::new(),
        }
    }

    /// Append a token.
    ///
    /// Callers must push in increasing `index` order.
    #[inline]
    pub fn push(&mut self, token: Token) {
        debug_assert!(
            !matches!(self.tokens.last(), Some(last) if last.index >= token.index),
            "tokens must be pushed in increasing index order"
        );
        self.tokens.push(token);
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over the tokens in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Get the tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The raw source text this list was scanned from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True if the most recently pushed token's text equals `text`.
    ///
    /// Compares text only, regardless of kind.
    pub fn last_text_is(&self, text: &str) -> bool {
        self.tokens.last().is_some_and(|last| last.text == text)
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
