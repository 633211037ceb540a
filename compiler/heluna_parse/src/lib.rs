//! Token stream layer of the Heluna parser.
//!
//! [`scan`] runs the lexer over a complete source text and wraps the result
//! in a [`TokenStream`], the cursor a grammar parser consumes tokens through.
//!
//! Two error categories reach callers:
//! - [`LexError`] (`Tokenizer`): the source itself is malformed.
//! - [`ParseError`] (`Parser`): a traversal asked for a token that is not
//!   there.
//!
//! [`Error`] unifies both for callers that run scanning and parsing in one
//! step.

mod error;
mod stream;

use std::sync::Once;

pub use error::{ParseError, ParseErrorKind};
pub use heluna_ir::{Position, Token, TokenKind, TokenList};
pub use heluna_lexer::{LexError, LexErrorKind};
pub use stream::TokenStream;

/// Scan a complete source text into a token stream positioned at the start.
///
/// Fails atomically with the first lexical error.
pub fn scan(source: &str) -> Result<TokenStream, LexError> {
    heluna_lexer::lex(source).map(TokenStream::new)
}

/// Any error raised while scanning or navigating Heluna source.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// `"Tokenizer"` for lexical errors, `"Parser"` for stream errors.
    pub fn component(&self) -> &'static str {
        match self {
            Error::Lex(_) => LexError::COMPONENT,
            Error::Parse(_) => ParseError::COMPONENT,
        }
    }

    /// The message without component or position.
    pub fn message(&self) -> String {
        match self {
            Error::Lex(error) => error.message(),
            Error::Parse(error) => error.message().to_owned(),
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Lex(error) => error.position(),
            Error::Parse(error) => error.position(),
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=heluna_lexer=trace` or `RUST_LOG=heluna_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // The host may already have installed a global subscriber.
            if let Err(error) = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
            {
                tracing::debug!(%error, "keeping existing tracing subscriber");
            }
        }
    });
}
