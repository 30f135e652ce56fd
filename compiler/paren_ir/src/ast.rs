//! AST node types.
//!
//! Every parenthesized expression becomes a [`Block`]. Position 0 of a block
//! holds the operator (`Keyword`) when it is name-shaped; every other slot is
//! a literal, a variable reference, or a nested block.

use std::fmt;

use paren_stack::ensure_sufficient_stack;

use crate::Span;

/// Classified AST node payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Operator name in position 0 of a block.
    Keyword(String),
    /// Integer literal (`42`).
    Int(i64),
    /// String literal with its delimiting quotes stripped.
    Str(String),
    /// `true` / `false`.
    Bool(bool),
    /// Variable reference, resolved against the effective scope.
    Var(String),
    /// Nested parenthesized expression.
    Block(Block),
}

/// AST node with its source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    /// Name carried by a keyword- or variable-shaped node.
    ///
    /// Parameter lists and `set`/`defun` targets accept both shapes.
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Keyword(name) | NodeKind::Var(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match &self.kind {
            NodeKind::Block(block) => Some(block),
            _ => None,
        }
    }
}

/// One parenthesized expression.
#[derive(Debug, PartialEq, Eq, Hash, Default)]
pub struct Block {
    pub nodes: Vec<Node>,
    pub span: Span,
}

impl Block {
    pub fn new(nodes: Vec<Node>, span: Span) -> Self {
        Block { nodes, span }
    }

    /// Operator name if the first element is a `Keyword`.
    pub fn keyword(&self) -> Option<&str> {
        match self.nodes.first().map(|node| &node.kind) {
            Some(NodeKind::Keyword(name)) => Some(name),
            _ => None,
        }
    }

    /// Everything after position 0.
    pub fn operands(&self) -> &[Node] {
        self.nodes.get(1..).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Clone for Block {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Block {
            nodes: self.nodes.clone(),
            span: self.span,
        })
    }
}

impl Drop for Block {
    /// Flattens nested blocks onto a work-list so dropping a deep tree does
    /// not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.nodes);
        while let Some(node) = pending.pop() {
            if let NodeKind::Block(mut inner) = node.kind {
                pending.append(&mut inner.nodes);
            }
        }
    }
}

/// Parsed program: the top-level forms in source order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Program {
    pub forms: Vec<Block>,
}

impl Program {
    pub fn new(forms: Vec<Block>) -> Self {
        Program { forms }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Keyword(name) | NodeKind::Var(name) => write!(f, "{name}"),
            NodeKind::Int(value) => write!(f, "{value}"),
            NodeKind::Str(value) => write!(f, "\"{value}\""),
            NodeKind::Bool(value) => write!(f, "{value}"),
            NodeKind::Block(block) => write!(f, "{block}"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "(")?;
            for (i, node) in self.nodes.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{node}")?;
            }
            write!(f, ")")
        })
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, form) in self.forms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{form}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
