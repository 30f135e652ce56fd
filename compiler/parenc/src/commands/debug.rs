//! Debug commands: `lex` and `parse` for inspecting interpreter internals.

use paren_diagnostic::emitter::ColorMode;
use paren_ir::{Block, Program};

use super::{emit_to_stderr, read_file, CommandFailed, CommandResult};

/// Tokenize a file and print each top-level form's token tree.
pub fn lex_file(path: &str, color: ColorMode) -> CommandResult {
    let source = read_file(path)?;
    let forms = paren_lexer::tokenize(&source).map_err(|err| {
        emit_to_stderr(&err.to_diagnostic(), &source, path, color);
        CommandFailed
    })?;

    println!("Tokens for '{}' ({} forms):", path, forms.len());
    for form in &forms {
        println!("  {} @ {}", form.display(&source), form.span);
    }
    Ok(())
}

/// Parse a file and print a summary plus the AST of every form.
pub fn parse_file(path: &str, color: ColorMode) -> CommandResult {
    let source = read_file(path)?;
    let program = paren_parse::parse(&source).map_err(|err| {
        emit_to_stderr(&err.to_diagnostic(), &source, path, color);
        CommandFailed
    })?;

    print!("{}", describe_program(path, &program));
    Ok(())
}

/// Summary printed by `paren parse`.
pub(crate) fn describe_program(path: &str, program: &Program) -> String {
    use std::fmt::Write;

    let defuns: Vec<&Block> = program
        .forms
        .iter()
        .filter(|form| form.keyword() == Some("defun"))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Parse result for '{path}':");
    let _ = writeln!(out, "  Forms: {}", program.forms.len());
    let _ = writeln!(out, "  Functions: {}", defuns.len());

    if !defuns.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Functions:");
        for defun in defuns {
            let operands = defun.operands();
            let name = operands.first().and_then(|n| n.as_name()).unwrap_or("?");
            let params = operands
                .get(1)
                .and_then(|n| n.as_block())
                .map(|block| {
                    block
                        .nodes
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            let _ = writeln!(out, "  {name} ({params})");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "AST:");
    for form in &program.forms {
        let _ = writeln!(out, "  {form}");
    }
    out
}

#[cfg(test)]
mod tests;
