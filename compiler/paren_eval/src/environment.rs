//! Variable and function storage.
//!
//! Two layers are visible to an evaluation:
//! - the global maps held by [`Environment`] (written by `set` and `defun`)
//! - a call-local [`Scope`] threaded in from the caller, whose bindings
//!   shadow globals of the same name
//!
//! Lookups never fail: a name bound in neither layer reads as `nil`.

use std::rc::Rc;

use paren_ir::{Node, Span};
use rustc_hash::FxHashMap;

use crate::Value;

/// A user function registered by `defun`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    /// Stored unevaluated; evaluated per call.
    pub body: Node,
    /// The `defun` form that registered it.
    pub span: Span,
}

impl FunctionDef {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Call-local bindings.
///
/// Created fresh for every user-function call and dropped when the call
/// returns. The top level runs with an empty scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    locals: FxHashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Scope for a call: the caller's locals with `params` bound on top.
    pub fn for_call<'a>(
        caller: &Scope,
        params: impl IntoIterator<Item = (&'a String, Value)>,
    ) -> Self {
        let mut scope = caller.clone();
        for (name, value) in params {
            scope.bind(name.clone(), value);
        }
        scope
    }

    #[inline]
    pub fn bind(&mut self, name: String, value: Value) {
        self.locals.insert(name, value);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.locals.get(name)
    }
}

/// Global variables and the function table.
#[derive(Debug, Default)]
pub struct Environment {
    globals: FxHashMap<String, Value>,
    /// Shared read-only with running calls; a redefinition replaces the
    /// entry without touching calls already in progress.
    functions: FxHashMap<String, Rc<FunctionDef>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Resolve `name` in the effective scope: call-local first, then global.
    pub fn lookup(&self, scope: &Scope, name: &str) -> Value {
        scope
            .get(name)
            .or_else(|| self.globals.get(name))
            .cloned()
            .unwrap_or_default()
    }

    #[inline]
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Write a global binding. `set` always lands here, even inside a call.
    pub fn set_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    #[inline]
    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).map(Rc::clone)
    }

    /// Register `def`, replacing any earlier definition of the same name.
    pub fn define_function(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), Rc::new(def));
    }

    pub fn global_count(&self) -> usize {
        self.globals.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}
