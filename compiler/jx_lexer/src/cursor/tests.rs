use super::*;

#[test]
fn current_and_peeks() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn reads_past_end_are_zero() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn eat_while_stops_at_end() {
    let mut cursor = Cursor::new("12345");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 5);
    assert!(cursor.is_eof());
}

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("λx");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn line_comment_scan_stops_before_newline() {
    let mut cursor = Cursor::new("// note\nx");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');

    let mut cursor = Cursor::new("// trailing");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_scan() {
    let mut cursor = Cursor::new(" a * b */ rest");
    assert!(cursor.eat_block_comment_body());
    assert_eq!(cursor.pos(), 9);

    let mut cursor = Cursor::new(" never closed");
    assert!(!cursor.eat_block_comment_body());
    assert!(cursor.is_eof());
}

#[test]
fn literal_delimiters() {
    let mut cursor = Cursor::new(r#"abc\"def""#);
    assert_eq!(cursor.skip_to_literal_delim(b'"'), b'\\');
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("abc\r\n");
    assert_eq!(cursor.skip_to_literal_delim(b'\''), b'\r');

    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.skip_to_literal_delim(b'"'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn current_char_decodes_multibyte() {
    let mut cursor = Cursor::new("aé€");
    assert_eq!(cursor.current_char(), Some('a'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), Some('é'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), Some('€'));
    cursor.advance_char();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current_char(), None);
}
