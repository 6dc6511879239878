//! `int`: 64-bit signed integers with wrapping arithmetic.
//!
//! Ints also answer the item protocol: `n[i]` reads bit `i`, and storing
//! 0 or 1 produces a new int with that bit cleared or set.

use std::cmp::Ordering;

use blue_ir::BinaryOp;

use super::{Assigned, Comparable, Construct, Numeric, Representable, Sequence, Slot, Truthiness};
use crate::args::parse_args;
use crate::errors::{
    bit_value_not_binary, bit_value_not_integer, expected, int_division_by_zero,
    int_modulo_by_zero, subscript_out_of_bounds, EvalResult,
};
use crate::value::Value;

pub(super) struct IntType;

/// Highest addressable bit.
const MAX_BIT: usize = 63;

fn int(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        other => unreachable!("int protocol applied to {}", other.type_name()),
    }
}

/// Shift with Blue semantics: shifting by 64 or more, or by a negative
/// amount, drains every bit.
fn shift(value: i64, amount: i64, left: bool) -> i64 {
    match u32::try_from(amount) {
        Ok(bits) if bits < 64 => {
            if left {
                value.wrapping_shl(bits)
            } else {
                value >> bits
            }
        }
        _ if !left && value < 0 => -1,
        _ => 0,
    }
}

impl Numeric for IntType {
    fn negate(&self, operand: &Value) -> Slot {
        Some(Ok(Value::int(int(operand).wrapping_neg())))
    }

    fn complement(&self, operand: &Value) -> Slot {
        Some(Ok(Value::int(!int(operand))))
    }

    fn binary(&self, op: BinaryOp, left: &Value, right: &Value) -> Slot {
        let (a, b) = (int(left), int(right));
        let result = match op {
            BinaryOp::BitOr => a | b,
            BinaryOp::BitXor => a ^ b,
            BinaryOp::BitAnd => a & b,
            BinaryOp::Shl => shift(a, b, true),
            BinaryOp::Shr => shift(a, b, false),
            BinaryOp::Add => a.wrapping_add(b),
            BinaryOp::Sub => a.wrapping_sub(b),
            BinaryOp::Mul => a.wrapping_mul(b),
            BinaryOp::Div => {
                if b == 0 {
                    return Some(Err(int_division_by_zero()));
                }
                a.wrapping_div(b)
            }
            BinaryOp::Mod => {
                if b == 0 {
                    return Some(Err(int_modulo_by_zero()));
                }
                a.wrapping_rem(b)
            }
        };
        Some(Ok(Value::int(result)))
    }
}

impl Sequence for IntType {
    fn item(&self, seq: &Value, index: usize) -> Slot {
        if index > MAX_BIT {
            return Some(Err(subscript_out_of_bounds()));
        }
        Some(Ok(Value::int((int(seq) >> index) & 1)))
    }

    fn set_item(&self, seq: &Value, index: usize, value: Value) -> Slot<Assigned> {
        if index > MAX_BIT {
            return Some(Err(subscript_out_of_bounds()));
        }
        let Value::Int(bit) = value else {
            return Some(Err(bit_value_not_integer()));
        };
        let mask = 1_i64 << index;
        let updated = match bit {
            1 => int(seq) | mask,
            0 => int(seq) & !mask,
            _ => return Some(Err(bit_value_not_binary())),
        };
        Some(Ok(Assigned::Replaced(Value::int(updated))))
    }
}

impl Comparable for IntType {
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        Some(int(left).cmp(&int(right)))
    }
}

impl Representable for IntType {
    fn repr(&self, value: &Value) -> String {
        int(value).to_string()
    }
}

impl Truthiness for IntType {
    fn eval_cond(&self, value: &Value) -> bool {
        int(value) > 0
    }
}

impl Construct for IntType {
    fn init(&self, args: &[Value]) -> EvalResult {
        let args = parse_args("o", args)?;
        match args.object(0) {
            Some(Value::Int(n)) => Ok(Value::int(*n)),
            #[expect(
                clippy::cast_possible_truncation,
                reason = "float to int conversion truncates toward zero"
            )]
            Some(Value::Float(f)) => Ok(Value::int(*f as i64)),
            Some(Value::Bool(b)) => Ok(Value::int(i64::from(*b))),
            Some(Value::Str(s)) => blue_ir::parse_int_literal(s.trim())
                .map(Value::int)
                .ok_or_else(|| expected("number")),
            _ => Err(expected("number")),
        }
    }
}
