//! Representation and truthiness of the four callable kinds. Calling them
//! is the evaluator's business.

use super::{Representable, Truthiness};
use crate::builtin::Arity;
use crate::value::Value;

pub(super) struct CallableType;

impl Representable for CallableType {
    fn repr(&self, value: &Value) -> String {
        match value {
            Value::Function(f) => format!("<function '{}', params={}>", f.name, f.param_len),
            Value::Method(m) => format!(
                "<method '{}.{}', params={}>",
                m.class.name, m.function.name, m.function.param_len
            ),
            Value::BuiltinFunction(f) => format!("<builtin-function '{}'>", f.name),
            Value::BuiltinMethod(m) => {
                format!("<builtin-method '{}.{}'>", m.owner.name(), m.function.name)
            }
            other => unreachable!("callable protocol applied to {}", other.type_name()),
        }
    }
}

impl Truthiness for CallableType {
    /// A callable is truthy when it accepts at least one argument.
    fn eval_cond(&self, value: &Value) -> bool {
        match value {
            Value::Function(f) => f.param_len > 0,
            Value::Method(m) => m.function.param_len > 0,
            Value::BuiltinFunction(f) => f.arity == Arity::VarArgs,
            Value::BuiltinMethod(m) => m.receiver.is_none() || m.function.arity == Arity::VarArgs,
            other => unreachable!("callable protocol applied to {}", other.type_name()),
        }
    }
}
