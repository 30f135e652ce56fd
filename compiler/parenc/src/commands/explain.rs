//! The `explain` command: show documentation for an error code.

use paren_diagnostic::{ErrorCode, ErrorDocs};

use super::{CommandFailed, CommandResult};

/// Print the documentation for `code_str` (e.g. `E2004`).
pub fn explain_error(code_str: &str) -> CommandResult {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        return Err(CommandFailed);
    };

    match ErrorDocs::get(code) {
        Some(doc) => {
            println!("{doc}");
            Ok(())
        }
        None => {
            eprintln!("No documentation available for {code}");
            Err(CommandFailed)
        }
    }
}
