use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_token_position() {
    let token = Token::new(TokenKind::Identifier, "foo", Position::new(2, 7), 11);
    assert_eq!(token.position(), Position::new(2, 7));
    assert_eq!(token.line, 2);
    assert_eq!(token.column, 7);
    assert_eq!(token.index, 11);
}

#[test]
fn test_token_matchers() {
    let plus = Token::new(TokenKind::Symbol, "+", Position::new(1, 1), 0);
    assert!(plus.is_symbol("+"));
    assert!(!plus.is_symbol("-"));
    assert!(!plus.is_identifier("+"));

    let foo = Token::new(TokenKind::Identifier, "foo", Position::new(1, 3), 0);
    assert!(foo.is_identifier("foo"));
    assert!(!foo.is_symbol("foo"));

    // Same text, different kind.
    let label = Token::new(TokenKind::Label, "foo", Position::new(1, 4), 0);
    assert!(!label.is_identifier("foo"));
}

#[test]
fn test_token_kind_names() {
    assert_eq!(TokenKind::Float.to_string(), "Float");
    assert_eq!(TokenKind::Reference.name(), "Reference");
    assert!(TokenKind::Integer.is_number());
    assert!(TokenKind::Float.is_number());
    assert!(!TokenKind::String.is_number());
}

#[test]
fn test_token_debug() {
    let token = Token::new(TokenKind::String, "a\nb", Position::new(2, 3), 0);
    assert_eq!(format!("{token:?}"), r#"String("a\nb") @ 2:3 #0"#);
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 14).to_string(), "line 3, column 14");
    assert_eq!(Position::START, Position::new(1, 0));
}
