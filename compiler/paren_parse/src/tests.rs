use super::*;
use paren_ir::Span;
use paren_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

fn parse_ok(source: &str) -> Program {
    match parse(source) {
        Ok(program) => program,
        Err(err) => panic!("parse of {source:?} failed: {err}"),
    }
}

fn kinds(block: &Block) -> Vec<&NodeKind> {
    block.nodes.iter().map(|node| &node.kind).collect()
}

#[test]
fn builds_add_block() {
    let program = parse_ok("(add 1 2)");
    assert_eq!(program.forms.len(), 1);
    assert_eq!(
        kinds(&program.forms[0]),
        vec![
            &NodeKind::Keyword("add".into()),
            &NodeKind::Int(1),
            &NodeKind::Int(2),
        ]
    );
}

#[test]
fn nested_lists_become_nested_blocks() {
    let program = parse_ok("(write-line (add 1 2 3))");
    let outer = &program.forms[0];
    assert_eq!(outer.keyword(), Some("write-line"));
    let inner = outer.operands()[0].as_block();
    assert_eq!(inner.map(Block::keyword), Some(Some("add")));
    assert_eq!(inner.map(Block::len), Some(4));
}

#[test]
fn nested_block_in_operator_slot_is_not_keyword() {
    let program = parse_ok("((add 1 2) 3)");
    let block = &program.forms[0];
    assert_eq!(block.keyword(), None);
    assert!(block.nodes[0].as_block().is_some());
    assert_eq!(block.nodes[1].kind, NodeKind::Int(3));
}

#[test]
fn position_counts_only_kept_nodes() {
    // Inner blocks restart at position 0.
    let program = parse_ok("(defun sq (n) (add n n))");
    let block = &program.forms[0];
    assert_eq!(block.nodes[1].kind, NodeKind::Var("sq".into()));
    let params = block.nodes[2].as_block();
    assert_eq!(
        params.map(kinds),
        Some(vec![&NodeKind::Keyword("n".into())])
    );
}

#[test]
fn literals_of_every_kind() {
    let program = parse_ok(r#"(write-line "hi there" 7 true false x)"#);
    assert_eq!(
        kinds(&program.forms[0]),
        vec![
            &NodeKind::Keyword("write-line".into()),
            &NodeKind::Str("hi there".into()),
            &NodeKind::Int(7),
            &NodeKind::Bool(true),
            &NodeKind::Bool(false),
            &NodeKind::Var("x".into()),
        ]
    );
}

#[test]
fn node_spans_point_into_source() {
    let source = "(set x 15)";
    let program = parse_ok(source);
    let block = &program.forms[0];
    assert_eq!(block.span, Span::new(0, 10));
    assert_eq!(block.nodes[2].span.slice(source), "15");
}

#[test]
fn multiple_forms_keep_source_order() {
    let program = parse_ok("(set x 5)\n(write-line x)");
    assert_eq!(program.to_string(), "(set x 5)\n(write-line x)");
}

#[test]
fn display_round_trips_through_parser() {
    let source = r#"(if (< i 3) (write-line "small") (write-line i))"#;
    let program = parse_ok(source);
    assert_eq!(program.to_string(), source);
}

#[test]
fn empty_block_is_kept() {
    let program = parse_ok("()");
    assert!(program.forms[0].is_empty());
}

#[test]
fn bad_integer_is_fatal_for_whole_program() {
    let err = parse("(set x 5) (write-line 3x)").err();
    assert_eq!(
        err,
        Some(ParseError::InvalidInteger {
            span: Span::new(22, 24),
            lexeme: "3x".into(),
        })
    );
}

#[test]
fn lex_errors_surface_through_parse() {
    let err = parse("(add 1 2").err();
    assert_eq!(
        err,
        Some(ParseError::Lex(paren_lexer::LexError::new(
            LexErrorKind::UnclosedParen,
            Span::new(0, 1),
        )))
    );
}
