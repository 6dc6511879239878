//! Descriptors through which native libraries expose functions and
//! constants to Blue code.

use std::fmt;

use crate::errors::{takes_no_arguments, EvalResult};
use crate::value::{Scope, Value};

/// Native callback: optional receiver, evaluated arguments.
pub type BuiltinFn = fn(Option<&Value>, &[Value]) -> EvalResult;

/// Arity class of a builtin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Any argument is an error.
    NoArgs,
    /// Arguments are checked by the callback, usually via
    /// [`parse_args`](crate::parse_args).
    VarArgs,
}

/// A named native function or method.
pub struct BuiltinFunction {
    pub name: &'static str,
    pub arity: Arity,
    pub func: BuiltinFn,
}

impl BuiltinFunction {
    pub const fn new(name: &'static str, arity: Arity, func: BuiltinFn) -> Self {
        BuiltinFunction { name, arity, func }
    }

    /// Invoke with already-evaluated arguments.
    pub fn call(&self, receiver: Option<&Value>, args: &[Value]) -> EvalResult {
        if self.arity == Arity::NoArgs && !args.is_empty() {
            return Err(takes_no_arguments(self.name));
        }
        (self.func)(receiver, args)
    }
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Raw payload of a named constant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Str(&'static str),
    Bool(bool),
}

/// A named constant registered into a module or type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub value: FieldValue,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, value: FieldValue) -> Self {
        FieldDescriptor { name, value }
    }

    pub fn to_value(&self) -> Value {
        match self.value {
            FieldValue::Int(n) => Value::int(n),
            FieldValue::Float(f) => Value::float(f),
            FieldValue::Str(s) => Value::string(s),
            FieldValue::Bool(b) => Value::bool(b),
        }
    }
}

/// Bulk-register functions and constants into a member table.
pub fn register(
    scope: &Scope,
    functions: &'static [BuiltinFunction],
    fields: &[FieldDescriptor],
) {
    for function in functions {
        scope.set(function.name, Value::BuiltinFunction(function));
    }
    for field in fields {
        scope.set(field.name, field.to_value());
    }
}
