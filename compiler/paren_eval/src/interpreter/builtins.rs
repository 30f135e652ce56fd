//! Built-in operators: `add`, `sub`, `write-line`, `<`, `>`.
//!
//! Built-ins receive already-evaluated arguments. Numeric ones coerce each
//! argument through [`Value::as_int`] and fail on strings and `nil`.
//! Arithmetic is checked.

use paren_ir::{Node, Span};

use crate::errors::{builtin_arity, integer_overflow, type_mismatch, Arity, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// A built-in operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Sub,
    WriteLine,
    Less,
    Greater,
}

impl Builtin {
    pub const ALL: &[Builtin] = &[
        Builtin::Add,
        Builtin::Sub,
        Builtin::WriteLine,
        Builtin::Less,
        Builtin::Greater,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Builtin::Add),
            "sub" => Some(Builtin::Sub),
            "write-line" => Some(Builtin::WriteLine),
            "<" => Some(Builtin::Less),
            ">" => Some(Builtin::Greater),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "add",
            Builtin::Sub => "sub",
            Builtin::WriteLine => "write-line",
            Builtin::Less => "<",
            Builtin::Greater => ">",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Builtin::Add | Builtin::WriteLine => Arity::AtLeast(0),
            Builtin::Sub => Arity::AtLeast(1),
            Builtin::Less | Builtin::Greater => Arity::Exactly(2),
        }
    }

    /// Apply to `args`. `operands` are the unevaluated argument nodes,
    /// used for error spans; `span` covers the whole call.
    pub fn apply(
        self,
        args: &[Value],
        operands: &[Node],
        span: Span,
        print: &SharedPrintHandler,
    ) -> EvalResult {
        let arity = self.arity();
        if !arity.accepts(args.len()) {
            return Err(builtin_arity(self.name(), arity, args.len(), span));
        }

        match self {
            Builtin::Add => {
                let mut sum: i64 = 0;
                for (i, arg) in args.iter().enumerate() {
                    let n = int_arg(arg, operands, i, span)?;
                    sum = sum
                        .checked_add(n)
                        .ok_or_else(|| integer_overflow("add", span))?;
                }
                Ok(Value::Int(sum))
            }
            Builtin::Sub => {
                let mut iter = args.iter().enumerate();
                let Some((_, first)) = iter.next() else {
                    return Err(builtin_arity(self.name(), arity, 0, span));
                };
                let mut acc = int_arg(first, operands, 0, span)?;
                for (i, arg) in iter {
                    let n = int_arg(arg, operands, i, span)?;
                    acc = acc
                        .checked_sub(n)
                        .ok_or_else(|| integer_overflow("sub", span))?;
                }
                Ok(Value::Int(acc))
            }
            Builtin::WriteLine => {
                let line = args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                print.write_line(&line);
                Ok(Value::Nil)
            }
            Builtin::Less | Builtin::Greater => {
                let (Some(lhs), Some(rhs)) = (args.first(), args.get(1)) else {
                    return Err(builtin_arity(self.name(), arity, args.len(), span));
                };
                let lhs = int_arg(lhs, operands, 0, span)?;
                let rhs = int_arg(rhs, operands, 1, span)?;
                let result = if self == Builtin::Less {
                    lhs < rhs
                } else {
                    lhs > rhs
                };
                Ok(Value::Bool(result))
            }
        }
    }
}

/// Integer view of argument `index`, or a type mismatch at its node.
fn int_arg(value: &Value, operands: &[Node], index: usize, call_span: Span) -> EvalResult<i64> {
    value.as_int().ok_or_else(|| {
        let span = operands.get(index).map_or(call_span, |node| node.span);
        type_mismatch("int", value.type_name(), span)
    })
}
