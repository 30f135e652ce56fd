//! AST builder for Paren.
//!
//! Turns the token trees produced by [`paren_lexer::tokenize`] into a
//! [`Program`] of typed [`Block`]s. Each nested token list becomes a nested
//! block; each leaf is classified by its slot and leading byte (see
//! [`classify_leaf`]).
//!
//! The whole buffer is parsed before anything runs, so a syntax error
//! anywhere in a program means no form is evaluated.

mod classify;
mod error;

pub use classify::classify_leaf;
pub use error::ParseError;

use paren_ir::{Block, Node, NodeKind, Program, TokenList, TokenTree};
use paren_stack::ensure_sufficient_stack;

/// Parse every top-level form of `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let lists = paren_lexer::tokenize(source)?;
    let forms = lists
        .iter()
        .map(|list| build_block(source, list))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(forms = forms.len(), "parsed program");
    Ok(Program::new(forms))
}

/// Build one [`Block`] from a token list, recursing into nested lists.
///
/// Element order mirrors source order; blank lexemes are dropped.
pub fn build_block(source: &str, list: &TokenList) -> Result<Block, ParseError> {
    ensure_sufficient_stack(|| {
        let mut nodes = Vec::with_capacity(list.len());
        for token in &list.children {
            let span = token.span();
            let kind = match token {
                TokenTree::List(inner) => NodeKind::Block(build_block(source, inner)?),
                TokenTree::Atom(_) | TokenTree::Str(_) => {
                    let lexeme = span.slice(source);
                    match classify_leaf(lexeme, nodes.len(), span)? {
                        Some(kind) => kind,
                        None => continue,
                    }
                }
            };
            nodes.push(Node::new(kind, span));
        }
        Ok(Block::new(nodes, list.span))
    })
}

#[cfg(test)]
mod tests;
