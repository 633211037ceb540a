//! Character classes of the Heluna lexical grammar.
//!
//! The blank and symbol sets are part of the language's lexical contract:
//! a compatible scanner must use exactly these characters.

/// Characters that separate tokens. Never emitted as tokens themselves.
pub const BLANKS: [char; 4] = [' ', '\n', '\r', '\t'];

/// Reserved symbols. Each occurrence is a one-character `Symbol` token, and
/// none of them can be part of an identifier, label or reference.
pub const SYMBOLS: [char; 22] = [
    '=', '.', ',', '-', '+', '*', '/', '%', '?', '&', '!', '|', '\'', ';', '<', '>', '(', ')', '{',
    '}', '[', ']',
];

/// Returns true for token-separating blank characters.
#[inline]
pub fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r' | '\t')
}

/// Returns true for reserved symbol characters.
#[inline]
pub fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '=' | '.'
            | ','
            | '-'
            | '+'
            | '*'
            | '/'
            | '%'
            | '?'
            | '&'
            | '!'
            | '|'
            | '\''
            | ';'
            | '<'
            | '>'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
    )
}

/// Returns true for ASCII decimal digits.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Decode the character following a `\` inside a string literal.
///
/// Returns `None` for escape codes the language does not define.
#[inline]
pub fn decode_escape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}
