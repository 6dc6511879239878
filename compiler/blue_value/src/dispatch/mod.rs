//! Protocol dispatch helpers.
//!
//! Every operator the evaluator performs on a value goes through one of
//! these functions: they look the capability up on the operand's type and
//! produce the uniform error when it is missing. Nothing here inspects type
//! names.

use std::cmp::Ordering;

use blue_ir::{BinaryOp, CompareOp};

use crate::errors::{
    bad_operand_type, bad_operand_types, cannot_order, cannot_set_members, has_no_len,
    indices_must_be_integers, item_assignment_unsupported, missing_init, no_members,
    not_iterable, not_sliceable, not_subscriptable, subscript_out_of_bounds, EvalError,
    EvalResult,
};
use crate::types::{Assigned, Sequence, TypeObject};
use crate::value::Value;

// Members

pub fn get_member(obj: &Value, name: &str) -> EvalResult {
    let ty = obj.type_object();
    ty.member_access()
        .ok_or_else(|| no_members(ty.name()))?
        .get_member(obj, name)
}

pub fn set_member(obj: &Value, name: &str, value: Value) -> Result<(), EvalError> {
    let ty = obj.type_object();
    ty.member_access()
        .and_then(|access| access.set_member(obj, name, value))
        .unwrap_or_else(|| Err(cannot_set_members(ty.name())))
}

// Items

/// Normalize an integer key against the sequence size. Without a size,
/// negative keys are simply out of bounds.
fn item_index(obj: &Value, seq: &dyn Sequence, key: &Value) -> Result<usize, EvalError> {
    let Value::Int(raw) = key else {
        return Err(indices_must_be_integers(obj.type_name()));
    };
    let size = seq.size(obj);
    let mut index = *raw;
    if index < 0 {
        if let Some(size) = size {
            index = index.saturating_add(i64::try_from(size).unwrap_or(i64::MAX));
        }
    }
    let index = usize::try_from(index).map_err(|_| subscript_out_of_bounds())?;
    if size.is_some_and(|size| index >= size) {
        return Err(subscript_out_of_bounds());
    }
    Ok(index)
}

pub fn get_index(obj: &Value, key: &Value) -> EvalResult {
    let ty = obj.type_object();
    if let Some(mapping) = ty.mapping() {
        return mapping.get(obj, key);
    }
    let seq = ty.sequence().ok_or_else(|| not_subscriptable(ty.name()))?;
    let index = item_index(obj, seq, key)?;
    seq.item(obj, index)
        .unwrap_or_else(|| Err(not_subscriptable(ty.name())))
}

pub fn set_index(obj: &Value, key: &Value, value: Value) -> Result<Assigned, EvalError> {
    let ty = obj.type_object();
    if let Some(mapping) = ty.mapping() {
        mapping.set(obj, key.clone(), value)?;
        return Ok(Assigned::InPlace);
    }
    let seq = ty.sequence().ok_or_else(|| not_subscriptable(ty.name()))?;
    let index = item_index(obj, seq, key)?;
    seq.set_item(obj, index, value)
        .unwrap_or_else(|| Err(item_assignment_unsupported(ty.name())))
}

// Slices

/// Clamp requested slice bounds to a sequence of `size` elements.
///
/// Negative bounds count from the end. The start lands in `[0, size]` and
/// the end in `[start, size]`, so the slice length is never negative.
pub fn clamp_slice(start: i64, end: i64, size: usize) -> (usize, usize) {
    let size_i = i64::try_from(size).unwrap_or(i64::MAX);
    let offset = |bound: i64| {
        if bound < 0 {
            bound.saturating_add(size_i)
        } else {
            bound
        }
    };
    let start = offset(start).clamp(0, size_i);
    let end = offset(end).clamp(start, size_i);
    (
        usize::try_from(start).unwrap_or(0),
        usize::try_from(end).unwrap_or(0),
    )
}

fn slice_bounds(
    obj: &Value,
    seq: &dyn Sequence,
    start: Option<&Value>,
    end: Option<&Value>,
) -> Result<(usize, usize), EvalError> {
    let size = seq.size(obj).ok_or_else(|| not_sliceable(obj.type_name()))?;
    let bound = |value: Option<&Value>, default: i64| match value {
        None => Ok(default),
        Some(Value::Int(n)) => Ok(*n),
        Some(_) => Err(indices_must_be_integers(obj.type_name())),
    };
    let start = bound(start, 0)?;
    let end = bound(end, i64::try_from(size).unwrap_or(i64::MAX))?;
    Ok(clamp_slice(start, end, size))
}

pub fn get_slice(obj: &Value, start: Option<&Value>, end: Option<&Value>) -> EvalResult {
    let ty = obj.type_object();
    let seq = ty.sequence().ok_or_else(|| not_subscriptable(ty.name()))?;
    let (start, end) = slice_bounds(obj, seq, start, end)?;
    seq.slice(obj, start, end)
        .unwrap_or_else(|| Err(not_sliceable(ty.name())))
}

pub fn set_slice(
    obj: &Value,
    start: Option<&Value>,
    end: Option<&Value>,
    value: &Value,
) -> Result<(), EvalError> {
    let ty = obj.type_object();
    let seq = ty.sequence().ok_or_else(|| not_subscriptable(ty.name()))?;
    let (start, end) = slice_bounds(obj, seq, start, end)?;
    seq.set_slice(obj, start, end, value)
        .unwrap_or_else(|| Err(item_assignment_unsupported(ty.name())))
}

// Arithmetic

pub fn negate(operand: &Value) -> EvalResult {
    operand
        .type_object()
        .numbers()
        .and_then(|numbers| numbers.negate(operand))
        .unwrap_or_else(|| Err(bad_operand_type("-")))
}

pub fn complement(operand: &Value) -> EvalResult {
    operand
        .type_object()
        .numbers()
        .and_then(|numbers| numbers.complement(operand))
        .unwrap_or_else(|| Err(bad_operand_type("~")))
}

pub fn binary_op(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    binary_op_as(op, op.as_symbol(), left, right)
}

/// [`binary_op`] reporting failures under `symbol` (`+=` for augmented
/// assignment).
pub fn binary_op_as(op: BinaryOp, symbol: &str, left: &Value, right: &Value) -> EvalResult {
    if let Some(seq) = left.type_object().sequence() {
        let slot = match op {
            BinaryOp::Add => seq.concat(left, right),
            BinaryOp::Mul => seq.repeat(left, right),
            _ => None,
        };
        if let Some(result) = slot {
            return result;
        }
    }
    let Some((left, right)) = coerce(left, right) else {
        return Err(bad_operand_types(symbol));
    };
    left.type_object()
        .numbers()
        .and_then(|numbers| numbers.binary(op, &left, &right))
        .unwrap_or_else(|| Err(bad_operand_types(symbol)))
}

/// Bring two operands to a common type.
///
/// Same-typed operands pass through. Otherwise the left type may convert
/// the right operand, then the right type may convert the left one.
pub fn coerce(left: &Value, right: &Value) -> Option<(Value, Value)> {
    let (lt, rt) = (left.type_object(), right.type_object());
    if std::ptr::eq(lt, rt) {
        return Some((left.clone(), right.clone()));
    }
    if let Some(converted) = lt.numbers().and_then(|numbers| numbers.coerce(right)) {
        return Some((left.clone(), converted));
    }
    if let Some(converted) = rt.numbers().and_then(|numbers| numbers.coerce(left)) {
        return Some((converted, right.clone()));
    }
    None
}

// Comparison and truthiness

/// Three-way comparison; `None` means the values are incomparable.
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    if left.is_same(right) {
        return Some(Ordering::Equal);
    }
    let (left, right) = coerce(left, right)?;
    left.type_object().comparable()?.compare(&left, &right)
}

/// Evaluate a comparison operator to a bool.
///
/// `==` and `!=` treat incomparable values as unequal; ordering operators
/// fail on them.
pub fn compare_op(op: CompareOp, left: &Value, right: &Value) -> EvalResult {
    let ordering = compare(left, right);
    let result = match (op, ordering) {
        (CompareOp::Eq, ordering) => ordering == Some(Ordering::Equal),
        (CompareOp::NotEq, ordering) => ordering != Some(Ordering::Equal),
        (_, None) => return Err(cannot_order(left.type_name(), right.type_name())),
        (CompareOp::Lt, Some(o)) => o == Ordering::Less,
        (CompareOp::LtEq, Some(o)) => o != Ordering::Greater,
        (CompareOp::Gt, Some(o)) => o == Ordering::Greater,
        (CompareOp::GtEq, Some(o)) => o != Ordering::Less,
    };
    Ok(Value::bool(result))
}

/// Truthiness; types without a predicate are always true.
pub fn eval_cond(value: &Value) -> bool {
    value
        .type_object()
        .truthiness()
        .map_or(true, |truth| truth.eval_cond(value))
}

pub fn repr(value: &Value) -> String {
    value.type_object().representable().repr(value)
}

// Containers

/// Element count of a sequence or mapping.
pub fn size(value: &Value) -> Result<usize, EvalError> {
    let ty = value.type_object();
    if let Some(mapping) = ty.mapping() {
        return Ok(mapping.size(value));
    }
    ty.sequence()
        .and_then(|seq| seq.size(value))
        .ok_or_else(|| has_no_len(ty.name()))
}

/// Snapshot of what iterating `value` visits: sequence items in order, or
/// map keys in insertion order.
pub fn elements(value: &Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::List(items) => return Ok(items.read().clone()),
        Value::Map(map) => return Ok(map.read().keys()),
        _ => {}
    }
    let ty = value.type_object();
    let seq = ty.sequence().ok_or_else(|| not_iterable(ty.name()))?;
    let size = seq.size(value).ok_or_else(|| not_iterable(ty.name()))?;
    (0..size)
        .map(|i| {
            seq.item(value, i)
                .unwrap_or_else(|| Err(not_iterable(ty.name())))
        })
        .collect()
}

/// Call a builtin type's constructor.
pub fn construct(ty: &TypeObject, args: &[Value]) -> EvalResult {
    ty.constructor()
        .ok_or_else(|| missing_init(ty.name()))?
        .init(args)
}
