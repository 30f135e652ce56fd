use super::*;
use pretty_assertions::assert_eq;

fn kind(lexeme: &str, position: usize) -> Option<NodeKind> {
    classify_leaf(lexeme, position, Span::DUMMY).unwrap_or_default()
}

#[test]
fn position_zero_name_is_keyword() {
    assert_eq!(kind("add", 0), Some(NodeKind::Keyword("add".into())));
    assert_eq!(kind("write-line", 0), Some(NodeKind::Keyword("write-line".into())));
    assert_eq!(kind("<", 0), Some(NodeKind::Keyword("<".into())));
    // Only the slot decides, so even `true` is an operator name here.
    assert_eq!(kind("true", 0), Some(NodeKind::Keyword("true".into())));
}

#[test]
fn position_zero_literal_stays_literal() {
    assert_eq!(kind("42", 0), Some(NodeKind::Int(42)));
    assert_eq!(kind("\"hi\"", 0), Some(NodeKind::Str("hi".into())));
}

#[test]
fn operands_are_classified_by_leading_byte() {
    assert_eq!(kind("12", 1), Some(NodeKind::Int(12)));
    assert_eq!(kind("\"a b\"", 2), Some(NodeKind::Str("a b".into())));
    assert_eq!(kind("\"\"", 1), Some(NodeKind::Str(String::new())));
    assert_eq!(kind("true", 1), Some(NodeKind::Bool(true)));
    assert_eq!(kind("false", 3), Some(NodeKind::Bool(false)));
    assert_eq!(kind("x", 1), Some(NodeKind::Var("x".into())));
    assert_eq!(kind("add", 1), Some(NodeKind::Var("add".into())));
}

#[test]
fn booleans_must_match_exactly() {
    assert_eq!(kind("True", 1), Some(NodeKind::Var("True".into())));
    assert_eq!(kind("falsey", 1), Some(NodeKind::Var("falsey".into())));
}

#[test]
fn minus_sign_is_not_a_digit() {
    assert_eq!(kind("-5", 1), Some(NodeKind::Var("-5".into())));
}

#[test]
fn string_escapes_are_kept_raw() {
    assert_eq!(
        kind(r#""say \"hi\"""#, 1),
        Some(NodeKind::Str(r#"say \"hi\""#.into()))
    );
}

#[test]
fn blank_lexemes_are_dropped() {
    assert_eq!(kind("", 0), None);
    assert_eq!(kind("   ", 1), None);
}

#[test]
fn digit_leading_garbage_is_not_a_number() {
    let err = classify_leaf("12abc", 1, Span::new(3, 8)).err();
    assert_eq!(
        err,
        Some(ParseError::InvalidInteger {
            span: Span::new(3, 8),
            lexeme: "12abc".into(),
        })
    );
}

#[test]
fn integer_overflowing_i64_is_not_a_number() {
    assert!(classify_leaf("99999999999999999999", 1, Span::DUMMY).is_err());
    assert_eq!(kind("9223372036854775807", 1), Some(NodeKind::Int(i64::MAX)));
}
