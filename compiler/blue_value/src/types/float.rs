//! `float`: 64-bit floating point. The only type with a coercion: ints
//! meeting a float are promoted.

use std::cmp::Ordering;

use blue_ir::BinaryOp;

use super::{Comparable, Construct, Numeric, Representable, Slot, Truthiness};
use crate::args::parse_args;
use crate::errors::{expected, float_division_by_zero, float_modulo_by_zero, EvalResult};
use crate::value::Value;

pub(super) struct FloatType;

fn float(value: &Value) -> f64 {
    match value {
        Value::Float(f) => *f,
        other => unreachable!("float protocol applied to {}", other.type_name()),
    }
}

#[expect(clippy::cast_precision_loss, reason = "int to float promotion")]
fn promote(n: i64) -> f64 {
    n as f64
}

impl Numeric for FloatType {
    fn negate(&self, operand: &Value) -> Slot {
        Some(Ok(Value::float(-float(operand))))
    }

    fn binary(&self, op: BinaryOp, left: &Value, right: &Value) -> Slot {
        let (a, b) = (float(left), float(right));
        let result = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => {
                if b == 0.0 {
                    return Some(Err(float_division_by_zero()));
                }
                a / b
            }
            BinaryOp::Mod => {
                if b == 0.0 {
                    return Some(Err(float_modulo_by_zero()));
                }
                a % b
            }
            BinaryOp::BitOr | BinaryOp::BitXor | BinaryOp::BitAnd | BinaryOp::Shl | BinaryOp::Shr => {
                return None
            }
        };
        Some(Ok(Value::float(result)))
    }

    fn coerce(&self, other: &Value) -> Option<Value> {
        match other {
            Value::Int(n) => Some(Value::float(promote(*n))),
            _ => None,
        }
    }
}

impl Comparable for FloatType {
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        let (a, b) = (float(left), float(right));
        // NaN orders equal to everything, as a plain less/greater test does.
        Some(a.partial_cmp(&b).unwrap_or(Ordering::Equal))
    }
}

impl Representable for FloatType {
    fn repr(&self, value: &Value) -> String {
        format!("{:.6}", float(value))
    }
}

impl Truthiness for FloatType {
    fn eval_cond(&self, value: &Value) -> bool {
        float(value) > 0.0
    }
}

impl Construct for FloatType {
    fn init(&self, args: &[Value]) -> EvalResult {
        let args = parse_args("o", args)?;
        match args.object(0) {
            Some(Value::Float(f)) => Ok(Value::float(*f)),
            Some(Value::Int(n)) => Ok(Value::float(promote(*n))),
            Some(Value::Str(s)) => blue_ir::parse_float_literal(s.trim())
                .map(Value::float)
                .ok_or_else(|| expected("number")),
            _ => Err(expected("number")),
        }
    }
}
