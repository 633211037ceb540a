//! Lexer for Heluna.
//!
//! Turns raw source text into a [`TokenList`] of classified, positioned
//! tokens. The scanner is single-pass and character-driven: it keeps one
//! mode at a time, decides token boundaries by reading one character ahead,
//! and hands that character back when it belongs to the next token.
//!
//! # Token classes
//!
//! | Starts with | Kind | Ends at |
//! |-------------|------|---------|
//! | `"` | `String` | unescaped `"` |
//! | `$` | `Reference` | blank or symbol |
//! | digit | `Integer` / `Float` | blank, symbol, identifier character |
//! | `#` | `Comment` | newline |
//! | symbol | `Symbol` | itself |
//! | anything else | `Identifier` / `Label` | blank, symbol / `:` |
//!
//! Lexical errors (unterminated strings, unknown escapes, incomplete
//! exponents) end the scan immediately; no partial list is returned.

mod chars;
mod lex_error;
mod reader;
mod scanner;

pub use chars::{decode_escape, is_blank, is_digit, is_symbol, BLANKS, SYMBOLS};
pub use heluna_ir::{Position, Token, TokenKind, TokenList};
pub use lex_error::{LexError, LexErrorKind};

use scanner::Scanner;

/// Scan `source` into a token list.
///
/// Consumes the entire input. Returns the first lexical error, if any.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::unpositioned(LexErrorKind::SourceTooLarge {
            len: source.len(),
        }));
    }
    Scanner::new(source).run()
}
