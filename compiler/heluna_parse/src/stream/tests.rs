use super::*;
use crate::{scan, ParseErrorKind};
use pretty_assertions::assert_eq;

/// Helper: scan a source that is known to be lexically valid.
fn stream(source: &str) -> TokenStream {
    match scan(source) {
        Ok(stream) => stream,
        Err(error) => panic!("unexpected lexical error for {source:?}: {error}"),
    }
}

fn next_text(stream: &mut TokenStream) -> Option<String> {
    stream.next_token().map(|t| t.text.clone())
}

#[test]
fn test_stream_navigation() {
    let mut s = stream("4 + 9");
    assert!(s.has_next());
    assert_eq!(s.remaining(), 3);

    let first = s.next_token().cloned();
    assert_eq!(
        first.map(|t| (t.kind, t.text, t.column)),
        Some((TokenKind::Integer, "4".to_owned(), 2))
    );
    let second = s.next_token().cloned();
    assert_eq!(
        second.map(|t| (t.kind, t.text, t.column)),
        Some((TokenKind::Symbol, "+".to_owned(), 3))
    );
    let third = s.next_token().cloned();
    assert_eq!(
        third.map(|t| (t.kind, t.text, t.column)),
        Some((TokenKind::Integer, "9".to_owned(), 5))
    );

    assert!(!s.has_next());
    assert!(s.next_token().is_none());
    assert_eq!(s.position(), 3);
}

#[test]
fn test_peek_does_not_consume() {
    let mut s = stream("a b");
    assert_eq!(s.peek().map(|t| t.text.as_str()), Some("a"));
    assert_eq!(s.position(), 0);
    assert_eq!(next_text(&mut s).as_deref(), Some("a"));
    assert_eq!(s.peek().map(|t| t.text.as_str()), Some("b"));
}

#[test]
fn test_reset() {
    let mut s = stream("4");
    s.next_token();
    assert!(!s.has_next());
    s.reset();
    assert!(s.has_next());
    let token = s.next_token().cloned();
    assert_eq!(token.map(|t| (t.text, t.column)), Some(("4".to_owned(), 1)));
}

#[test]
fn test_set_position_clamps_to_end() {
    let mut s = stream("a b");
    s.set_position(10);
    assert_eq!(s.position(), 2);
    assert!(!s.has_next());
}

#[test]
fn test_return_token() {
    let mut s = stream("a b");
    s.next_token();
    s.next_token();
    s.return_token();
    assert_eq!(s.position(), 1);
    assert_eq!(next_text(&mut s).as_deref(), Some("b"));
}

#[test]
fn test_return_token_clamps_at_start() {
    let mut s = stream("");
    s.return_token();
    assert_eq!(s.position(), 0);

    let mut s = stream("a");
    s.return_token();
    s.return_token();
    assert_eq!(s.position(), 0);
    assert_eq!(next_text(&mut s).as_deref(), Some("a"));
}

#[test]
fn test_require_next() {
    let mut s = stream("4");
    assert!(s.require_next("expected a token").is_ok());
    let Err(error) = s.require_next("expected a token") else {
        panic!("exhausted stream should fail");
    };
    assert_eq!(error.kind, ParseErrorKind::UnexpectedEnd);
    assert_eq!(error.message(), "expected a token");
    assert_eq!(s.position(), 1);
}

#[test]
fn test_require_symbol_restores_cursor() {
    let mut s = stream("+");
    assert_eq!(
        s.require_symbol("some error").map(|t| t.text.clone()),
        Ok("+".to_owned())
    );

    let mut s = stream("foo");
    let Err(error) = s.require_symbol("some error") else {
        panic!("identifier is not a symbol");
    };
    assert_eq!(error.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(error.token.map(|t| t.text), Some("foo".to_owned()));
    assert_eq!(s.position(), 0);
}

#[test]
fn test_consume_symbol() {
    let mut s = stream("+ -");
    assert!(s.consume_symbol("+"));
    assert!(!s.consume_symbol("+"));
    assert_eq!(s.position(), 1);
    s.next_token();
    assert!(!s.consume_symbol("+"));
    assert_eq!(s.position(), 2);
}

#[test]
fn test_consume_symbol_ignores_other_kinds() {
    // A string whose text is "+" is not the symbol "+".
    let mut s = stream(r#""+""#);
    assert!(!s.consume_symbol("+"));
    assert_eq!(s.position(), 0);
}

#[test]
fn test_require_identifier() {
    let mut s = stream("foo");
    assert!(s.require_identifier("some error").is_ok());

    let mut s = stream("42");
    let result = s.require_identifier("some error");
    assert!(matches!(
        result,
        Err(ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            ..
        })
    ));
    assert_eq!(s.position(), 0);
}

#[test]
fn test_consume_identifier() {
    let mut s = stream("foo bar 42");
    assert!(s.consume_identifier("foo"));
    assert!(!s.consume_identifier("foo"));
    assert!(s.consume_identifier("bar"));
    assert!(!s.consume_identifier("42"));
    assert_eq!(s.position(), 2);
    s.next_token();
    assert!(!s.consume_identifier("foo"));
}

#[test]
fn test_consume_identifier_hard() {
    let mut s = stream("foo");
    assert_eq!(s.consume_identifier_hard("foo", "expected foo"), Ok(()));
    assert_eq!(s.position(), 1);

    let mut s = stream("42");
    let Err(error) = s.consume_identifier_hard("foo", "expected foo") else {
        panic!("integer is not the identifier foo");
    };
    assert_eq!(error.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(error.position(), Some(heluna_ir::Position::new(1, 2)));
    assert_eq!(s.position(), 0);

    let mut s = stream("");
    let result = s.consume_identifier_hard("foo", "expected foo");
    assert_eq!(result.map_err(|e| e.kind), Err(ParseErrorKind::UnexpectedEnd));
}

#[test]
fn test_clones_are_independent_cursors() {
    let mut a = stream("x y z");
    a.next_token();
    let mut b = a.clone();
    b.next_token();
    b.next_token();
    assert_eq!(a.position(), 1);
    assert_eq!(b.position(), 3);
    assert_eq!(next_text(&mut a).as_deref(), Some("y"));
}

#[test]
fn test_indexed_access_ignores_cursor() {
    let mut s = stream("4+9");
    s.next_token();
    assert_eq!(s.len(), 3);
    assert_eq!(s.get(0).map(|t| t.index), Some(0));
    assert_eq!(s.get(2).map(|t| t.index), Some(2));
    assert!(s.get(3).is_none());
    assert_eq!(s.tokens().len(), 3);
}
