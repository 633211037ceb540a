use super::*;

#[test]
fn test_counter_starts_before_first_column() {
    let reader = SourceReader::new("abc");
    assert_eq!(reader.position(), Position::new(1, 0));
}

#[test]
fn test_read_advances_column() {
    let mut reader = SourceReader::new("ab");
    assert_eq!(reader.read(), Some((0, 'a')));
    assert_eq!(reader.position(), Position::new(1, 1));
    assert_eq!(reader.read(), Some((1, 'b')));
    assert_eq!(reader.position(), Position::new(1, 2));
    assert_eq!(reader.read(), None);
    assert_eq!(reader.position(), Position::new(1, 2));
}

#[test]
fn test_newline_resets_column_to_one() {
    let mut reader = SourceReader::new("a\nb");
    reader.read();
    assert_eq!(reader.read(), Some((1, '\n')));
    assert_eq!(reader.position(), Position::new(2, 1));
    reader.read();
    assert_eq!(reader.position(), Position::new(2, 2));
}

#[test]
fn test_push_back_replays_without_moving_counter() {
    let mut reader = SourceReader::new("xy");
    let (offset, ch) = reader.read().unwrap_or_default();
    reader.push_back(offset, ch);
    assert_eq!(reader.position(), Position::new(1, 1));
    assert_eq!(reader.read(), Some((0, 'x')));
    assert_eq!(reader.position(), Position::new(1, 1));
    assert_eq!(reader.read(), Some((1, 'y')));
    assert_eq!(reader.position(), Position::new(1, 2));
}

#[test]
fn test_offsets_are_byte_offsets() {
    let mut reader = SourceReader::new("é+");
    assert_eq!(reader.read(), Some((0, 'é')));
    assert_eq!(reader.read(), Some((2, '+')));
    // One column per character, regardless of encoded width.
    assert_eq!(reader.position(), Position::new(1, 2));
}
