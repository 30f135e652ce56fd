use super::*;
use pretty_assertions::assert_eq;

fn sample() -> (&'static str, TokenList) {
    let source = r#"(add 1 "a b" (sub 2))"#;
    let nested = TokenList::new(
        Span::new(13, 20),
        vec![
            TokenTree::Atom(Span::new(14, 17)),
            TokenTree::Atom(Span::new(18, 19)),
        ],
    );
    let list = TokenList::new(
        Span::new(0, 21),
        vec![
            TokenTree::Atom(Span::new(1, 4)),
            TokenTree::Atom(Span::new(5, 6)),
            TokenTree::Str(Span::new(7, 12)),
            TokenTree::List(nested),
        ],
    );
    (source, list)
}

#[test]
fn lexeme_borrows_leaf_text() {
    let (source, list) = sample();
    assert_eq!(list.children[0].lexeme(source), Some("add"));
    assert_eq!(list.children[2].lexeme(source), Some("\"a b\""));
    assert_eq!(list.children[3].lexeme(source), None);
}

#[test]
fn span_of_nested_list_covers_parens() {
    let (source, list) = sample();
    assert_eq!(list.children[3].span().slice(source), "(sub 2)");
    assert_eq!(list.len(), 4);
    assert!(!list.is_empty());
}

#[test]
fn display_renders_nested_lexemes() {
    let (source, list) = sample();
    assert_eq!(
        list.display(source).to_string(),
        r#"["add", "1", "\"a b\"", ["sub", "2"]]"#
    );
}

#[test]
fn display_empty_list() {
    let list = TokenList::new(Span::new(0, 2), Vec::new());
    assert!(list.is_empty());
    assert_eq!(list.display("()").to_string(), "[]");
}

#[test]
fn deep_token_list_clones_displays_and_drops() {
    let depth = 100_000;
    let mut list = TokenList::new(Span::DUMMY, Vec::new());
    for _ in 1..depth {
        list = TokenList::new(Span::DUMMY, vec![TokenTree::List(list)]);
    }

    let copy = list.clone();
    drop(list);

    let text = copy.display("").to_string();
    assert_eq!(text, format!("{}{}", "[".repeat(depth), "]".repeat(depth)));
}
