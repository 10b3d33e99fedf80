use super::*;
use crate::{unexpected_token, ErrorCode};
use pretty_assertions::assert_eq;

/// Build a file for `text` with its line breaks recorded, as the scanner would.
fn scanned(name: &str, text: &str) -> SourceFile {
    let mut file = SourceFile::new(name, text);
    for (offset, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            file.add_line(offset);
        }
    }
    file
}

#[test]
fn test_valid_positions() {
    let file = SourceFile::new("", "abc");
    assert!(!file.is_valid_pos(Pos::NONE));
    assert!(file.is_valid_pos(Pos::new(1)));
    assert!(file.is_valid_pos(Pos::new(3)));
    assert!(!file.is_valid_pos(Pos::new(4)));
    assert_eq!(file.end(), Pos::new(4));
    assert_eq!(file.last_pos(), Some(Pos::new(3)));
}

#[test]
fn test_empty_file_has_no_valid_positions() {
    let file = SourceFile::new("", "");
    assert!(!file.is_valid_pos(Pos::new(1)));
    assert_eq!(file.last_pos(), None);
}

#[test]
fn test_position_first_line() {
    let file = scanned("", "(+ 1 2)");
    assert_eq!(file.position(Pos::new(1)), LineCol { line: 1, column: 1 });
    assert_eq!(file.position(Pos::new(4)), LineCol { line: 1, column: 4 });
}

#[test]
fn test_position_after_line_break() {
    // '\n' at byte offset 4; the 'x' on line 2 is at offset 7.
    let file = scanned("", "(+ 1\n  x)");
    assert_eq!(file.line_count(), 2);
    assert_eq!(file.position(Pos::new(8)), LineCol { line: 2, column: 3 });
    assert_eq!(file.position(Pos::new(6)), LineCol { line: 2, column: 1 });
}

#[test]
fn test_position_of_newline_is_end_of_its_line() {
    let file = scanned("", "ab\ncd");
    assert_eq!(file.position(Pos::new(3)), LineCol { line: 1, column: 3 });
    assert_eq!(file.position(Pos::new(4)), LineCol { line: 2, column: 1 });
}

#[test]
fn test_position_many_lines() {
    let file = scanned("", "a\nb\nc\nd");
    assert_eq!(file.position(Pos::new(7)), LineCol { line: 4, column: 1 });
    assert_eq!(file.position(Pos::new(5)), LineCol { line: 3, column: 1 });
}

#[test]
fn test_report_and_format_named() {
    let mut file = scanned("prog.calc", "1\n(+ 1 x)");
    let _ = file.report(unexpected_token(Pos::new(8), "x"));
    assert_eq!(file.num_errors(), 1);
    assert_eq!(file.errors()[0].code, ErrorCode::E1001);
    assert_eq!(
        file.formatted_errors().collect::<Vec<_>>(),
        vec!["prog.calc - Line: 2 Column: 6 - unexpected token: x".to_string()]
    );
}

#[test]
fn test_format_unnamed_omits_name() {
    let mut file = scanned("", "(+)");
    let _ = file.report(unexpected_token(Pos::new(3), ")"));
    assert_eq!(
        file.format_diagnostic(&file.errors()[0]),
        "Line: 1 Column: 3 - unexpected token: )"
    );
}

#[test]
fn test_errors_keep_recorded_order() {
    let mut file = scanned("", "abcdef");
    let _ = file.report(unexpected_token(Pos::new(5), "e"));
    let _ = file.report(unexpected_token(Pos::new(2), "b"));
    let positions: Vec<Pos> = file.errors().iter().map(|d| d.pos).collect();
    assert_eq!(positions, vec![Pos::new(5), Pos::new(2)]);
}

#[test]
#[should_panic(expected = "invalid position")]
fn test_report_out_of_range_panics() {
    let mut file = SourceFile::new("", "ab");
    let _ = file.report(unexpected_token(Pos::new(3), "?"));
}

#[test]
#[should_panic(expected = "invalid position")]
fn test_report_no_pos_panics() {
    let mut file = SourceFile::new("", "ab");
    let _ = file.report(unexpected_token(Pos::NONE, "?"));
}
