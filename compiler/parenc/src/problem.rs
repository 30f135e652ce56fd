//! The first failure of a run, from whichever phase produced it.

use std::fmt;

use paren_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use paren_diagnostic::{Diagnostic, ErrorCode};
use paren_eval::EvalError;
use paren_parse::ParseError;

/// A fatal error from parsing or evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    /// Unbalanced delimiters, unterminated strings, bad integer literals.
    Parse(ParseError),
    /// Arity, name and type errors raised while running.
    Eval(EvalError),
}

impl Problem {
    pub fn code(&self) -> ErrorCode {
        match self {
            Problem::Parse(err) => err.code(),
            Problem::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Problem::Parse(err) => err.to_diagnostic(),
            Problem::Eval(err) => err.to_diagnostic(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Parse(err) => write!(f, "{err}"),
            Problem::Eval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Problem {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Problem::Parse(err) => Some(err),
            Problem::Eval(err) => Some(err),
        }
    }
}

impl From<ParseError> for Problem {
    fn from(err: ParseError) -> Self {
        Problem::Parse(err)
    }
}

impl From<EvalError> for Problem {
    fn from(err: EvalError) -> Self {
        Problem::Eval(err)
    }
}

/// Render `problem` against its source as uncoloured text.
pub fn render_problem(problem: &Problem, source: &str, path: &str) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
            .with_source(source)
            .with_file_path(path);
        emitter.emit(&problem.to_diagnostic());
        emitter.flush();
    }
    String::from_utf8_lossy(&output).into_owned()
}
