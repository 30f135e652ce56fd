//! The `run` command: parse and evaluate a Paren source file.

use paren_diagnostic::emitter::ColorMode;
use paren_eval::stdout_handler;

use super::{emit_to_stderr, read_file, CommandFailed, CommandResult};
use crate::run_source;

/// Run a Paren program, writing `write-line` output to stdout.
///
/// Nothing runs if the file has a syntax error anywhere. The first
/// evaluation error stops the program.
pub fn run_file(path: &str, color: ColorMode) -> CommandResult {
    let source = read_file(path)?;
    tracing::debug!(path, bytes = source.len(), "running file");

    match run_source(&source, stdout_handler()) {
        Ok(_) => Ok(()),
        Err(problem) => {
            emit_to_stderr(&problem.to_diagnostic(), &source, path, color);
            Err(CommandFailed)
        }
    }
}
