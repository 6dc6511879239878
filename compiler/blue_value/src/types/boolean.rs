//! `bool`.

use std::cmp::Ordering;

use super::{Comparable, Construct, Representable, Truthiness};
use crate::args::parse_args;
use crate::errors::{expected, EvalResult};
use crate::value::Value;

pub(super) struct BoolType;

fn boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        other => unreachable!("bool protocol applied to {}", other.type_name()),
    }
}

impl Comparable for BoolType {
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        Some(boolean(left).cmp(&boolean(right)))
    }
}

impl Representable for BoolType {
    fn repr(&self, value: &Value) -> String {
        boolean(value).to_string()
    }
}

impl Truthiness for BoolType {
    fn eval_cond(&self, value: &Value) -> bool {
        boolean(value)
    }
}

impl Construct for BoolType {
    fn init(&self, args: &[Value]) -> EvalResult {
        let args = parse_args("|o", args)?;
        match args.object(0) {
            None => Ok(Value::bool(false)),
            Some(Value::Bool(b)) => Ok(Value::bool(*b)),
            Some(Value::Int(n)) => Ok(Value::bool(*n != 0)),
            Some(_) => Err(expected("bool or int")),
        }
    }
}
