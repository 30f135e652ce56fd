//! `if`, `while`, `set` and `defun`.
//!
//! Special forms see their operands unevaluated. Each checks its operand
//! count first and produces `nil`.

use paren_ir::Block;

use super::Interpreter;
use crate::environment::{FunctionDef, Scope};
use crate::errors::{malformed, special_form_arity, Arity, EvalResult};
use crate::Value;

const IF_ARITY: Arity = Arity::Between(2, 3);
const WHILE_ARITY: Arity = Arity::AtLeast(2);
const SET_ARITY: Arity = Arity::Exactly(2);
const DEFUN_ARITY: Arity = Arity::Exactly(3);

fn check_arity(form: &str, expected: Arity, block: &Block) -> EvalResult<()> {
    let got = block.operands().len();
    if expected.accepts(got) {
        Ok(())
    } else {
        Err(special_form_arity(form, expected, got, block.span))
    }
}

impl Interpreter {
    /// `(if cond then [else])`
    pub(super) fn eval_if(&mut self, block: &Block, scope: &Scope) -> EvalResult {
        check_arity("if", IF_ARITY, block)?;
        let [cond, then, rest @ ..] = block.operands() else {
            return Ok(Value::Nil);
        };

        if self.eval_node(cond, scope)?.is_truthy() {
            self.eval_node(then, scope)?;
        } else if let Some(otherwise) = rest.first() {
            self.eval_node(otherwise, scope)?;
        }
        Ok(Value::Nil)
    }

    /// `(while cond body...)`
    ///
    /// Runs until `cond` is falsy. There is no iteration limit.
    pub(super) fn eval_while(&mut self, block: &Block, scope: &Scope) -> EvalResult {
        check_arity("while", WHILE_ARITY, block)?;
        let [cond, body @ ..] = block.operands() else {
            return Ok(Value::Nil);
        };

        while self.eval_node(cond, scope)?.is_truthy() {
            for node in body {
                self.eval_node(node, scope)?;
            }
        }
        Ok(Value::Nil)
    }

    /// `(set name value)`: always writes the global map.
    pub(super) fn eval_set(&mut self, block: &Block, scope: &Scope) -> EvalResult {
        check_arity("set", SET_ARITY, block)?;
        let [target, value] = block.operands() else {
            return Ok(Value::Nil);
        };

        let Some(name) = target.as_name() else {
            return Err(malformed(
                "set",
                format!("cannot assign to `{target}`, expected a variable name"),
                target.span,
            ));
        };
        let value = self.eval_node(value, scope)?;
        tracing::trace!(name, %value, "set");
        self.env.set_global(name, value);
        Ok(Value::Nil)
    }

    /// `(defun name (params...) body)`
    pub(super) fn eval_defun(&mut self, block: &Block) -> EvalResult {
        check_arity("defun", DEFUN_ARITY, block)?;
        let [name_node, params_node, body] = block.operands() else {
            return Ok(Value::Nil);
        };

        let Some(name) = name_node.as_name() else {
            return Err(malformed(
                "defun",
                format!("`{name_node}` is not a function name"),
                name_node.span,
            ));
        };
        let Some(param_block) = params_node.as_block() else {
            return Err(malformed(
                "defun",
                "parameters must be a parenthesized list",
                params_node.span,
            ));
        };
        let params = param_block
            .nodes
            .iter()
            .map(|param| {
                param.as_name().map(str::to_string).ok_or_else(|| {
                    malformed(
                        "defun",
                        format!("`{param}` is not a parameter name"),
                        param.span,
                    )
                })
            })
            .collect::<EvalResult<Vec<_>>>()?;

        tracing::debug!(name, params = params.len(), "defined function");
        self.env.define_function(FunctionDef {
            name: name.to_string(),
            params,
            body: body.clone(),
            span: block.span,
        });
        Ok(Value::Nil)
    }
}
