//! Token trees produced by the tokenizer.
//!
//! A token is either a leaf lexeme, a quoted string lexeme (quotes kept), or
//! a nested list holding the tokens of one parenthesized sub-expression.
//! Leaves only store their [`Span`]; the text lives in the source buffer.

use std::fmt;

use paren_stack::ensure_sufficient_stack;

use crate::Span;

/// One token of a parenthesized fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenTree {
    /// Raw leaf lexeme (`add`, `12`, `x`, `true`).
    Atom(Span),
    /// Quoted string lexeme, span covers both delimiting `"`.
    Str(Span),
    /// Nested parenthesized sub-expression.
    List(TokenList),
}

impl TokenTree {
    /// Source range this token covers.
    pub fn span(&self) -> Span {
        match self {
            TokenTree::Atom(span) | TokenTree::Str(span) => *span,
            TokenTree::List(list) => list.span,
        }
    }

    /// Leaf text, or `None` for nested lists.
    pub fn lexeme<'src>(&self, source: &'src str) -> Option<&'src str> {
        match self {
            TokenTree::Atom(span) | TokenTree::Str(span) => Some(span.slice(source)),
            TokenTree::List(_) => None,
        }
    }
}

/// Ordered tokens of one parenthesized expression.
///
/// `span` covers the fragment including its outer `(` and `)`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TokenList {
    pub span: Span,
    pub children: Vec<TokenTree>,
}

impl TokenList {
    pub fn new(span: Span, children: Vec<TokenTree>) -> Self {
        TokenList { span, children }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Render the list against its source for debugging and tests.
    pub fn display<'a>(&'a self, source: &'a str) -> DisplayTokens<'a> {
        DisplayTokens { list: self, source }
    }
}

impl Clone for TokenList {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| TokenList {
            span: self.span,
            children: self.children.clone(),
        })
    }
}

impl Drop for TokenList {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let TokenTree::List(mut inner) = child {
                pending.append(&mut inner.children);
            }
        }
    }
}

/// Display adapter rendering a [`TokenList`] as `["add", "1", ["sub", "2"]]`.
pub struct DisplayTokens<'a> {
    list: &'a TokenList,
    source: &'a str,
}

impl fmt::Display for DisplayTokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            write!(f, "[")?;
            for (i, child) in self.list.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match child {
                    TokenTree::Atom(span) | TokenTree::Str(span) => {
                        write!(f, "{:?}", span.slice(self.source))?;
                    }
                    TokenTree::List(nested) => write!(f, "{}", nested.display(self.source))?,
                }
            }
            write!(f, "]")
        })
    }
}

#[cfg(test)]
mod tests;
