use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_follow_phase_ranges() {
    let span = Span::new(0, 1);
    assert_eq!(
        LexError::new(LexErrorKind::UnterminatedString, span).code(),
        ErrorCode::E0001
    );
    assert_eq!(
        LexError::new(LexErrorKind::UnclosedParen, span).code(),
        ErrorCode::E1003
    );
    assert_eq!(
        LexError::new(LexErrorKind::UnexpectedCloseParen, span).code(),
        ErrorCode::E1001
    );
    assert!(LexError::new(LexErrorKind::UnmatchedDelimiter { delimiter: '(' }, span)
        .code()
        .is_internal_error());
}

#[test]
fn diagnostic_points_at_span() {
    let err = LexError::new(LexErrorKind::UnclosedParen, Span::new(4, 5));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.message, "unclosed parenthesis");
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.labels[0].span, Span::new(4, 5));
}

#[test]
fn display_messages() {
    let span = Span::DUMMY;
    assert_eq!(
        LexError::new(LexErrorKind::UnexpectedCloseParen, span).to_string(),
        "unexpected closing parenthesis"
    );
    assert_eq!(
        LexError::new(LexErrorKind::UnterminatedString, span).to_string(),
        "unterminated string literal"
    );
}
