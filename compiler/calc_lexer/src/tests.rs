use super::*;
use calc_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    let mut file = SourceFile::new("", src);
    tokenize(&mut file, src)
        .into_iter()
        .map(|(kind, _, _)| kind)
        .collect()
}

fn scan_all(src: &str) -> (Vec<(TokenKind, u32, String)>, SourceFile) {
    let mut file = SourceFile::new("test", src);
    let tokens = tokenize(&mut file, src)
        .into_iter()
        .map(|(kind, pos, lit)| (kind, pos.raw(), lit.to_string()))
        .collect();
    (tokens, file)
}

#[test]
fn test_empty_input() {
    let mut file = SourceFile::new("", "");
    let mut scanner = Scanner::new(&mut file, "");
    assert_eq!(scanner.scan(), (TokenKind::Eof, Pos::new(1), ""));
    assert_eq!(scanner.scan().0, TokenKind::Eof);
}

#[test]
fn test_single_tokens() {
    let cases = [
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("+", TokenKind::Add),
        ("-", TokenKind::Sub),
        ("*", TokenKind::Mul),
        ("/", TokenKind::Div),
        ("%", TokenKind::Mod),
        ("=", TokenKind::Eq),
        ("<>", TokenKind::Neq),
        ("<", TokenKind::Lt),
        ("<=", TokenKind::Lte),
        (">", TokenKind::Gt),
        (">=", TokenKind::Gte),
        ("; comment", TokenKind::Comment),
        ("42", TokenKind::Number),
        ("-42", TokenKind::Number),
        ("x", TokenKind::Ident),
        ("a_b-c9", TokenKind::Ident),
        ("\"str\"", TokenKind::String),
        ("define", TokenKind::Define),
        ("concat", TokenKind::Concat),
        ("switch", TokenKind::Switch),
    ];
    for (src, expected) in cases {
        assert_eq!(kinds(src), vec![expected], "source: {src:?}");
    }
}

#[test]
fn test_expression_positions() {
    let (tokens, file) = scan_all("(+123 -456)");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::LParen, 1, "(".to_string()),
            (TokenKind::Add, 2, "+".to_string()),
            (TokenKind::Number, 3, "123".to_string()),
            (TokenKind::Number, 7, "-456".to_string()),
            (TokenKind::RParen, 11, ")".to_string()),
        ]
    );
    assert!(!file.has_errors());
}

#[test]
fn test_eof_position_is_end_of_file() {
    let src = "(+ 1 2)";
    let mut file = SourceFile::new("", src);
    let mut scanner = Scanner::new(&mut file, src);
    while scanner.scan().0 != TokenKind::Eof {}
    assert_eq!(scanner.scan().1, Pos::new(8));
}

#[test]
fn test_minus_then_space_is_operator() {
    assert_eq!(kinds("- 5"), vec![TokenKind::Sub, TokenKind::Number]);
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("and case define if import or print set switch foo"),
        vec![
            TokenKind::And,
            TokenKind::Case,
            TokenKind::Define,
            TokenKind::If,
            TokenKind::Import,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Set,
            TokenKind::Switch,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn test_comment_runs_to_end_of_line() {
    let (tokens, file) = scan_all("; a comment (+ 1 2)\nx");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Comment, 1, "; a comment (+ 1 2)".to_string()),
            (TokenKind::Ident, 21, "x".to_string()),
        ]
    );
    assert_eq!(file.line_count(), 2);
}

#[test]
fn test_newlines_are_recorded() {
    let src = "(+ 1\n  x)\n";
    let mut file = SourceFile::new("f", src);
    let tokens = tokenize(&mut file, src);
    let x = tokens
        .iter()
        .find(|(kind, _, _)| *kind == TokenKind::Ident)
        .map(|(_, pos, _)| *pos);
    assert_eq!(file.line_count(), 3);
    let at = file.position(x.unwrap_or(Pos::NONE));
    assert_eq!((at.line, at.column), (2, 3));
}

#[test]
fn test_multiline_string() {
    let src = "\"a\nb\" x";
    let (tokens, file) = scan_all(src);
    assert_eq!(
        tokens,
        vec![
            (TokenKind::String, 1, "\"a\nb\"".to_string()),
            (TokenKind::Ident, 7, "x".to_string()),
        ]
    );
    assert_eq!(file.line_count(), 2);
    let at = file.position(Pos::new(7));
    assert_eq!((at.line, at.column), (2, 4));
}

#[test]
fn test_unterminated_string() {
    let (tokens, file) = scan_all("(print \"abc");
    assert_eq!(tokens.last().map(|t| t.0), Some(TokenKind::Illegal));
    assert_eq!(file.num_errors(), 1);
    assert_eq!(file.errors()[0].code, ErrorCode::E0002);
    assert_eq!(file.errors()[0].pos, Pos::new(8));
}

#[test]
fn test_illegal_character() {
    let (tokens, file) = scan_all("(+ 1 #)");
    assert_eq!(
        tokens.iter().map(|t| t.0).collect::<Vec<_>>(),
        vec![
            TokenKind::LParen,
            TokenKind::Add,
            TokenKind::Number,
            TokenKind::Illegal,
            TokenKind::RParen,
        ]
    );
    assert_eq!(tokens[3].1, 6);
    // Reporting the stray character is left to the parser.
    assert!(!file.has_errors());
}

#[test]
fn test_invalid_encoding_is_reported() {
    let text = String::from_utf8_lossy(b"(+ 1 \xff)").into_owned();
    let (tokens, file) = scan_all(&text);
    assert!(tokens.iter().any(|t| t.0 == TokenKind::Illegal));
    assert_eq!(file.num_errors(), 1);
    assert_eq!(file.errors()[0].code, ErrorCode::E0001);
    assert_eq!(file.errors()[0].pos, Pos::new(6));
}

#[test]
fn test_whitespace_variants_are_skipped() {
    assert_eq!(
        kinds(" \t\r\n( \x0c)"),
        vec![TokenKind::LParen, TokenKind::RParen]
    );
}
