//! Paren interpreter CLI.

use paren_diagnostic::emitter::ColorMode;
use parenc::commands::{explain_error, lex_file, parse_file, run_file, CommandResult};

fn main() {
    parenc::init_tracing();

    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(mode) = arg.strip_prefix("--color=") {
            let Some(parsed) = ColorMode::parse(mode) else {
                eprintln!("error: invalid color mode '{mode}' (expected auto, always, never)");
                std::process::exit(1);
            };
            color = parsed;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    let result: CommandResult = match command.as_str() {
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: paren run <file.lsp>");
                std::process::exit(1);
            };
            run_file(path, color)
        }
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: paren lex <file.lsp>");
                std::process::exit(1);
            };
            lex_file(path, color)
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: paren parse <file.lsp>");
                std::process::exit(1);
            };
            parse_file(path, color)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("Paren {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "--explain" | "explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: paren --explain <ERROR_CODE>");
                eprintln!("Example: paren --explain E2004");
                std::process::exit(1);
            };
            explain_error(code)
        }
        _ => {
            // A bare source path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("lsp"))
            {
                run_file(command, color)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    };

    if result.is_err() {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Paren - a minimal s-expression interpreter");
    println!();
    println!("Usage: paren <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.lsp>       Run a program");
    println!("  lex <file.lsp>       Print the token tree of every form");
    println!("  parse <file.lsp>     Print the AST of every form");
    println!("  --explain <code>     Explain an error code (e.g., E2004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable interpreter logging (e.g., RUST_LOG=paren_eval=trace)");
    println!();
    println!("Examples:");
    println!("  paren run main.lsp");
    println!("  paren main.lsp");
    println!("  paren parse main.lsp");
    println!("  paren --explain E6001");
}
