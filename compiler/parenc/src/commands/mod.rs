//! Command handlers for the `paren` CLI.
//!
//! Each handler reports its own errors to stderr and returns
//! `Err(CommandFailed)` so the binary can pick the exit status.

use std::fmt;

use paren_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use paren_diagnostic::Diagnostic;

mod debug;
mod explain;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::run_file;

/// A command failed; the reason has already been written to stderr.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CommandFailed;

impl fmt::Display for CommandFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command failed")
    }
}

impl std::error::Error for CommandFailed {}

pub type CommandResult = Result<(), CommandFailed>;

/// Read a source file, reporting a friendly message on failure.
pub fn read_file(path: &str) -> Result<String, CommandFailed> {
    std::fs::read_to_string(path).map_err(|e| {
        let msg = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        };
        eprintln!("{msg}");
        CommandFailed
    })
}

/// Write `diagnostic` to stderr with a snippet of `source`.
pub(crate) fn emit_to_stderr(diagnostic: &Diagnostic, source: &str, path: &str, color: ColorMode) {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(diagnostic);
    emitter.flush();
}
