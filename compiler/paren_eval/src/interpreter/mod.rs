//! Tree-walking interpreter.
//!
//! Evaluating a [`Block`] dispatches on its first element:
//!
//! 1. a `Keyword` naming a special form (`if`, `while`, `set`, `defun`)
//!    receives its operands unevaluated, see `special_forms`
//! 2. any other `Keyword` is a call: operands are evaluated left to right,
//!    then a `defun`-registered function is tried before the built-ins
//! 3. a block without a keyword runs its elements in order and yields the
//!    last value
//!
//! All evaluation state lives in the [`Environment`]; the call-local
//! [`Scope`] is passed down by reference and never outlives its call.

mod builtins;
mod special_forms;

pub use builtins::Builtin;

use paren_ir::{Block, Node, NodeKind, Program};
use paren_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::environment::{Environment, FunctionDef, Scope};
use crate::errors::{arity_mismatch, operator_not_found, Arity, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// Evaluated call arguments; most calls take a handful.
pub(crate) type Args = SmallVec<[Value; 4]>;

/// The interpreter: environment plus output destination.
pub struct Interpreter {
    env: Environment,
    print: SharedPrintHandler,
}

impl Interpreter {
    pub fn new(print: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Run every top-level form in order against one environment.
    ///
    /// Returns the value of the last form (`nil` for an empty program).
    /// The first error stops the run.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult {
        let scope = Scope::new();
        let mut last = Value::Nil;
        for form in &program.forms {
            last = self.eval_block(form, &scope)?;
        }
        tracing::debug!(
            forms = program.forms.len(),
            globals = self.env.global_count(),
            functions = self.env.function_count(),
            "program finished"
        );
        Ok(last)
    }

    /// Evaluate one block in the effective scope `scope` ∪ globals.
    pub fn eval_block(&mut self, block: &Block, scope: &Scope) -> EvalResult {
        ensure_sufficient_stack(|| match block.keyword() {
            Some("if") => self.eval_if(block, scope),
            Some("while") => self.eval_while(block, scope),
            Some("set") => self.eval_set(block, scope),
            Some("defun") => self.eval_defun(block),
            Some(name) => self.eval_call(name, block, scope),
            None => self.eval_sequence(&block.nodes, scope),
        })
    }

    /// Evaluate a single node: literals are themselves, names resolve
    /// through the effective scope, blocks recurse.
    pub fn eval_node(&mut self, node: &Node, scope: &Scope) -> EvalResult {
        match &node.kind {
            NodeKind::Int(n) => Ok(Value::Int(*n)),
            NodeKind::Str(s) => Ok(Value::Str(s.clone())),
            NodeKind::Bool(b) => Ok(Value::Bool(*b)),
            NodeKind::Var(name) | NodeKind::Keyword(name) => Ok(self.env.lookup(scope, name)),
            NodeKind::Block(block) => self.eval_block(block, scope),
        }
    }

    fn eval_sequence(&mut self, nodes: &[Node], scope: &Scope) -> EvalResult {
        let mut last = Value::Nil;
        for node in nodes {
            last = self.eval_node(node, scope)?;
        }
        Ok(last)
    }

    fn eval_call(&mut self, name: &str, block: &Block, scope: &Scope) -> EvalResult {
        let operands = block.operands();
        let args = operands
            .iter()
            .map(|node| self.eval_node(node, scope))
            .collect::<Result<Args, _>>()?;

        if let Some(func) = self.env.function(name) {
            return self.call_function(&func, args, block, scope);
        }
        match Builtin::from_name(name) {
            Some(builtin) => builtin.apply(&args, operands, block.span, &self.print),
            None => {
                let span = block.nodes.first().map_or(block.span, |node| node.span);
                Err(operator_not_found(name, span))
            }
        }
    }

    /// Bind `args` to the parameters of `func` on top of the caller's scope
    /// and evaluate the body.
    fn call_function(
        &mut self,
        func: &FunctionDef,
        args: Args,
        call: &Block,
        caller: &Scope,
    ) -> EvalResult {
        if args.len() != func.arity() {
            return Err(arity_mismatch(
                &func.name,
                Arity::Exactly(func.arity()),
                args.len(),
                call.span,
            ));
        }
        tracing::trace!(function = %func.name, args = args.len(), "call");

        let scope = Scope::for_call(caller, func.params.iter().zip(args));
        self.eval_node(&func.body, &scope)
            .map_err(|err| err.in_call(&func.name, call.span))
    }
}
