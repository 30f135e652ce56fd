//! Paren - a minimal s-expression interpreter.
//!
//! ```text
//! source text
//!     │
//!     ▼
//! paren_lexer::tokenize ──► Vec<TokenList>
//!     │
//!     ▼
//! paren_parse::parse ──► Program
//!     │
//!     ▼
//! Interpreter::eval_program ──► Value (+ write-line output)
//! ```
//!
//! The whole buffer is tokenized and parsed before anything runs. The first
//! error of any phase becomes a [`Problem`], which renders as a diagnostic.

pub mod commands;
mod problem;

pub use problem::{render_problem, Problem};

use std::sync::Once;

use paren_eval::{Interpreter, SharedPrintHandler, Value};

/// Parse and evaluate `source`, sending `write-line` output to `print`.
///
/// Returns the value of the last top-level form.
pub fn run_source(source: &str, print: SharedPrintHandler) -> Result<Value, Problem> {
    let program = paren_parse::parse(source)?;
    let mut interpreter = Interpreter::new(print);
    Ok(interpreter.eval_program(&program)?)
}

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set. Events go to stderr as an
/// indented tree so they never mix with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true);
            tracing_subscriber::registry().with(tree).with(filter).init();
        }
    });
}
