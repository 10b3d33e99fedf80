use super::*;

#[test]
fn test_keyword_table_is_sorted() {
    assert!(KEYWORDS.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn test_lookup_keywords() {
    assert_eq!(lookup_keyword("define"), TokenKind::Define);
    assert_eq!(lookup_keyword("set"), TokenKind::Set);
    assert_eq!(lookup_keyword("switch"), TokenKind::Switch);
    assert_eq!(lookup_keyword("and"), TokenKind::And);
}

#[test]
fn test_lookup_non_keywords() {
    assert_eq!(lookup_keyword("defined"), TokenKind::Ident);
    assert_eq!(lookup_keyword("Define"), TokenKind::Ident);
    assert_eq!(lookup_keyword("x"), TokenKind::Ident);
    assert_eq!(lookup_keyword(""), TokenKind::Ident);
}

#[test]
fn test_display_name() {
    assert_eq!(TokenKind::Neq.to_string(), "<>");
    assert_eq!(TokenKind::Eof.to_string(), "end of file");
}
