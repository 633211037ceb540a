//! Heluna IR - token data model.
//!
//! This crate contains the values exchanged between the Heluna lexer and
//! everything downstream of it:
//! - `TokenKind` and `Token` for classified, positioned source text
//! - `Position` for line/column locations
//! - `TokenList` for the immutable, scan-ordered lexer output
//!
//! Every type is a plain immutable value (`Clone + Eq + Hash + Debug`), so a
//! finished token list can be shared freely between independent cursors.

mod position;
mod token;
mod token_list;

pub use position::Position;
pub use token::{Token, TokenKind};
pub use token_list::TokenList;
