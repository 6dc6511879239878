//! `string`: immutable text, indexed by character.

use std::cmp::Ordering;

use super::{Comparable, Construct, Representable, Sequence, Slot, Truthiness};
use crate::args::parse_args;
use crate::errors::{
    cannot_concat, non_integer_repeat, string_too_large, subscript_out_of_bounds, EvalResult,
};
use crate::value::Value;
use crate::STRING_MAX;

pub(super) struct StringType;

fn text(value: &Value) -> &str {
    match value {
        Value::Str(s) => s.as_str(),
        other => unreachable!("string protocol applied to {}", other.type_name()),
    }
}

impl Sequence for StringType {
    fn size(&self, seq: &Value) -> Option<usize> {
        Some(text(seq).chars().count())
    }

    fn item(&self, seq: &Value, index: usize) -> Slot {
        Some(
            text(seq)
                .chars()
                .nth(index)
                .map(|c| Value::string(c.to_string()))
                .ok_or_else(subscript_out_of_bounds),
        )
    }

    fn slice(&self, seq: &Value, start: usize, end: usize) -> Slot {
        let sliced: String = text(seq).chars().skip(start).take(end - start).collect();
        Some(Ok(Value::string(sliced)))
    }

    fn concat(&self, left: &Value, right: &Value) -> Slot {
        let Value::Str(tail) = right else {
            return Some(Err(cannot_concat(right.type_name(), "string")));
        };
        let mut joined = String::with_capacity(text(left).len() + tail.len());
        joined.push_str(text(left));
        joined.push_str(tail);
        Some(Ok(Value::string(joined)))
    }

    fn repeat(&self, left: &Value, right: &Value) -> Slot {
        let Value::Int(count) = right else {
            return Some(Err(non_integer_repeat()));
        };
        let count = usize::try_from(*count).unwrap_or(0);
        let unit = text(left);
        match unit.len().checked_mul(count) {
            Some(size) if size <= STRING_MAX => Some(Ok(Value::string(unit.repeat(count)))),
            _ => Some(Err(string_too_large())),
        }
    }
}

impl Comparable for StringType {
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        Some(text(left).cmp(text(right)))
    }
}

impl Representable for StringType {
    fn repr(&self, value: &Value) -> String {
        text(value).to_string()
    }
}

impl Truthiness for StringType {
    fn eval_cond(&self, value: &Value) -> bool {
        !text(value).is_empty()
    }
}

impl Construct for StringType {
    fn init(&self, args: &[Value]) -> EvalResult {
        let args = parse_args("|o", args)?;
        Ok(Value::string(
            args.object(0).map(crate::dispatch::repr).unwrap_or_default(),
        ))
    }
}
