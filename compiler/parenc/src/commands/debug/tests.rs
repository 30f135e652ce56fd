use super::*;
use pretty_assertions::assert_eq;

#[test]
fn describes_forms_and_functions() {
    let source = "(defun sq (n) (add n n))\n(write-line (sq 4))";
    let program = paren_parse::parse(source).unwrap_or_default();
    let text = describe_program("sq.lsp", &program);
    assert_eq!(
        text,
        "Parse result for 'sq.lsp':\n\
         \x20 Forms: 2\n\
         \x20 Functions: 1\n\
         \n\
         Functions:\n\
         \x20 sq (n)\n\
         \n\
         AST:\n\
         \x20 (defun sq (n) (add n n))\n\
         \x20 (write-line (sq 4))\n"
    );
}

#[test]
fn program_without_functions_skips_function_section() {
    let program = paren_parse::parse("(add 1 2)").unwrap_or_default();
    let text = describe_program("a.lsp", &program);
    assert!(!text.contains("Functions:\n"));
    assert!(text.ends_with("AST:\n  (add 1 2)\n"));
}
