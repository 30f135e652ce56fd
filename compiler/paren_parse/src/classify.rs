//! Leaf classification.
//!
//! Position 0 of a block is the operator slot: a name-shaped lexeme there
//! becomes a `Keyword`. Everywhere else (and for a position-0 lexeme that
//! looks like a literal) the first byte decides:
//!
//! | Leading | Node |
//! |---|---|
//! | `"` | `Str`, quotes stripped |
//! | digit | `Int`, must parse fully |
//! | exact `true` / `false` | `Bool` |
//! | anything else | `Var` |

use paren_ir::{NodeKind, Span};

use crate::ParseError;

/// Classify one leaf lexeme found at `position` inside its block.
///
/// Returns `Ok(None)` for blank lexemes, which the builder drops.
pub fn classify_leaf(
    lexeme: &str,
    position: usize,
    span: Span,
) -> Result<Option<NodeKind>, ParseError> {
    let trimmed = lexeme.trim_start();
    let Some(first) = trimmed.bytes().next() else {
        return Ok(None);
    };

    if position == 0 && !starts_literal(first) {
        return Ok(Some(NodeKind::Keyword(lexeme.to_string())));
    }

    let kind = match first {
        b'"' => NodeKind::Str(strip_quotes(lexeme).to_string()),
        b'0'..=b'9' => match lexeme.parse::<i64>() {
            Ok(value) => NodeKind::Int(value),
            Err(_) => {
                return Err(ParseError::InvalidInteger {
                    span,
                    lexeme: lexeme.to_string(),
                })
            }
        },
        _ => match lexeme {
            "true" => NodeKind::Bool(true),
            "false" => NodeKind::Bool(false),
            _ => NodeKind::Var(lexeme.to_string()),
        },
    };
    Ok(Some(kind))
}

/// Bytes that stop a position-0 lexeme from being an operator name.
#[inline]
fn starts_literal(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'"' | b'(' | b')')
}

/// Drop one leading and one trailing `"`.
fn strip_quotes(lexeme: &str) -> &str {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    inner.strip_suffix('"').unwrap_or(inner)
}

#[cfg(test)]
mod tests;
