use super::*;
use pretty_assertions::assert_eq;

fn kw(name: &str) -> Node {
    Node::new(NodeKind::Keyword(name.to_string()), Span::DUMMY)
}

fn var(name: &str) -> Node {
    Node::new(NodeKind::Var(name.to_string()), Span::DUMMY)
}

fn int(value: i64) -> Node {
    Node::new(NodeKind::Int(value), Span::DUMMY)
}

#[test]
fn keyword_reads_position_zero() {
    let block = Block::new(vec![kw("add"), int(1), int(2)], Span::DUMMY);
    assert_eq!(block.keyword(), Some("add"));
    assert_eq!(block.operands().len(), 2);
}

#[test]
fn keyword_absent_for_non_keyword_head() {
    let nested = Node::new(NodeKind::Block(Block::default()), Span::DUMMY);
    let block = Block::new(vec![nested, int(1)], Span::DUMMY);
    assert_eq!(block.keyword(), None);
}

#[test]
fn operands_of_empty_block_is_empty() {
    let block = Block::default();
    assert!(block.is_empty());
    assert!(block.operands().is_empty());
    assert_eq!(block.keyword(), None);
}

#[test]
fn as_name_accepts_keyword_and_var() {
    assert_eq!(kw("n").as_name(), Some("n"));
    assert_eq!(var("m").as_name(), Some("m"));
    assert_eq!(int(3).as_name(), None);
}

#[test]
fn display_prints_s_expression() {
    let inner = Block::new(vec![kw("sub"), var("x"), int(1)], Span::DUMMY);
    let block = Block::new(
        vec![
            kw("write-line"),
            Node::new(NodeKind::Str("hi".to_string()), Span::DUMMY),
            Node::new(NodeKind::Bool(true), Span::DUMMY),
            Node::new(NodeKind::Block(inner), Span::DUMMY),
        ],
        Span::DUMMY,
    );
    assert_eq!(block.to_string(), r#"(write-line "hi" true (sub x 1))"#);
}

#[test]
fn program_display_one_form_per_line() {
    let program = Program::new(vec![
        Block::new(vec![kw("set"), var("x"), int(5)], Span::DUMMY),
        Block::new(vec![kw("write-line"), var("x")], Span::DUMMY),
    ]);
    assert_eq!(program.to_string(), "(set x 5)\n(write-line x)");
}

fn nested_blocks(depth: usize) -> Block {
    let mut block = Block::new(vec![kw("write-line"), int(1)], Span::DUMMY);
    for _ in 1..depth {
        let inner = Node::new(NodeKind::Block(block), Span::DUMMY);
        block = Block::new(vec![inner], Span::DUMMY);
    }
    block
}

#[test]
fn deep_block_clones_displays_and_drops() {
    let depth = 100_000;
    let block = nested_blocks(depth);

    let copy = block.clone();
    drop(block);

    let expected = format!(
        "{}(write-line 1){}",
        "(".repeat(depth - 1),
        ")".repeat(depth - 1)
    );
    assert_eq!(copy.to_string(), expected);
}
