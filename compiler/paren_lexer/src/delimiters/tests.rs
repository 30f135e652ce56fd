use super::*;
use pretty_assertions::assert_eq;

fn sorted_parens(map: &DelimiterMap) -> Vec<(usize, usize)> {
    let mut pairs: Vec<_> = map.parens.iter().map(|(&open, &close)| (open, close)).collect();
    pairs.sort_unstable();
    pairs
}

// === Matching ===

#[test]
fn matches_single_form() {
    let map = DelimiterMap::build("(add 1 2)").unwrap_or_default();
    assert_eq!(map.paren_close(0), Some(8));
    assert_eq!(map.paren_count(), 1);
    assert_eq!(map.quote_count(), 0);
}

#[test]
fn matches_nested_forms_last_opened_first_closed() {
    let map = DelimiterMap::build("(a (b c) d)").unwrap_or_default();
    assert_eq!(sorted_parens(&map), vec![(0, 10), (3, 7)]);
}

#[test]
fn matches_multiple_top_level_forms() {
    let map = DelimiterMap::build("(set x 5) (write-line x)").unwrap_or_default();
    assert_eq!(sorted_parens(&map), vec![(0, 8), (10, 23)]);
}

#[test]
fn ignores_parens_inside_strings() {
    let source = r#"(write-line "(x")"#;
    let map = DelimiterMap::build(source).unwrap_or_default();
    assert_eq!(sorted_parens(&map), vec![(0, 16)]);
    assert_eq!(map.quote_close(12), Some(15));
    assert_eq!(map.paren_close(13), None);
}

#[test]
fn escaped_quote_is_not_a_delimiter() {
    let source = r#"(a "x\"y")"#;
    let map = DelimiterMap::build(source).unwrap_or_default();
    assert_eq!(map.quote_close(3), Some(8));
    assert_eq!(map.quote_count(), 1);
    assert_eq!(map.paren_close(0), Some(9));
}

#[test]
fn is_escaped_quote_checks_previous_byte() {
    let bytes = br#"\"a""#;
    assert!(is_escaped_quote(bytes, 1));
    assert!(!is_escaped_quote(bytes, 3));
    assert!(!is_escaped_quote(bytes, 0));
}

#[test]
fn empty_source_has_no_pairs() {
    let map = DelimiterMap::build("").unwrap_or_default();
    assert_eq!(map.paren_count(), 0);
    assert_eq!(map.quote_count(), 0);
}

// === Failures ===

#[test]
fn stray_close_paren_is_fatal() {
    let err = DelimiterMap::build("(a))").err();
    assert_eq!(
        err,
        Some(LexError::new(
            LexErrorKind::UnexpectedCloseParen,
            Span::new(3, 4)
        ))
    );
}

#[test]
fn unclosed_paren_is_fatal() {
    let err = DelimiterMap::build("(a (b)").err();
    assert_eq!(
        err,
        Some(LexError::new(LexErrorKind::UnclosedParen, Span::new(0, 1)))
    );
}

#[test]
fn unterminated_string_is_fatal() {
    let err = DelimiterMap::build(r#"(a "b)"#).err();
    assert_eq!(
        err,
        Some(LexError::new(
            LexErrorKind::UnterminatedString,
            Span::new(3, 6)
        ))
    );
}

#[test]
fn close_paren_inside_string_does_not_close_form() {
    let err = DelimiterMap::build(r#"(write-line ")""#).err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(LexErrorKind::UnclosedParen)
    );
}

// === Property tests ===

mod proptest_matcher {
    use super::super::DelimiterMap;
    use proptest::prelude::*;

    /// A random form and the number of parenthesis pairs outside strings.
    fn form() -> impl Strategy<Value = (String, usize)> {
        let atom = "[a-z0-9<>-]{1,6}".prop_map(|a| (a, 0));
        let string = "[a-z() ]{0,6}".prop_map(|s| (format!("\"{s}\""), 0));
        prop_oneof![atom, string].prop_recursive(4, 32, 6, |inner| {
            proptest::collection::vec(inner, 0..6).prop_map(|items| {
                let count = 1 + items.iter().map(|(_, c)| c).sum::<usize>();
                let body: Vec<String> = items.into_iter().map(|(s, _)| s).collect();
                (format!("({})", body.join(" ")), count)
            })
        })
    }

    proptest! {
        #[test]
        fn balanced_input_matches_every_paren((text, expected) in form()) {
            let map = DelimiterMap::build(&text);
            prop_assert!(map.is_ok(), "{text} should be balanced");
            let map = map.unwrap_or_default();
            let bytes = text.as_bytes();

            prop_assert_eq!(map.paren_count(), expected);
            let mut closes: Vec<usize> = Vec::new();
            for (&open, &close) in &map.parens {
                prop_assert!(open < close);
                prop_assert_eq!(bytes[open], b'(');
                prop_assert_eq!(bytes[close], b')');
                closes.push(close);
            }
            closes.sort_unstable();
            closes.dedup();
            prop_assert_eq!(closes.len(), expected);
        }

        #[test]
        fn extra_close_paren_is_rejected((text, _) in form()) {
            let broken = format!("{text})");
            prop_assert!(DelimiterMap::build(&broken).is_err());
        }

        #[test]
        fn missing_close_paren_is_rejected((text, _) in form()) {
            prop_assume!(text.ends_with(')'));
            let broken = &text[..text.len() - 1];
            prop_assert!(DelimiterMap::build(broken).is_err());
        }
    }
}
