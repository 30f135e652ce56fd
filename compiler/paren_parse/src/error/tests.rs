use super::*;
use paren_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn invalid_integer_maps_to_e0002() {
    let err = ParseError::InvalidInteger {
        span: Span::new(5, 8),
        lexeme: "12a".to_string(),
    };
    assert_eq!(err.code(), ErrorCode::E0002);
    assert_eq!(err.span(), Span::new(5, 8));
    assert_eq!(err.to_string(), "not a number: `12a`");

    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.labels[0].span, Span::new(5, 8));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn lex_errors_keep_their_code_and_span() {
    let lex = LexError::new(LexErrorKind::UnclosedParen, Span::new(0, 1));
    let err = ParseError::from(lex.clone());
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.span(), Span::new(0, 1));
    assert_eq!(err.to_string(), lex.to_string());
    assert!(std::error::Error::source(&err).is_some());
}
