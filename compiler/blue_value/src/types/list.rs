//! `list`: growable, shared, mutable sequence.

use std::cmp::Ordering;

use parking_lot::RwLock;

use super::cycle::Visit;
use super::{Assigned, Comparable, Construct, Representable, Sequence, Slot, Truthiness};
use crate::args::parse_args;
use crate::dispatch;
use crate::errors::{
    cannot_concat, expected, list_too_large, non_integer_repeat, subscript_out_of_bounds,
    EvalResult,
};
use crate::value::{Heap, Value};
use crate::LIST_MAX;

pub(super) struct ListType;

fn items(value: &Value) -> &Heap<RwLock<Vec<Value>>> {
    match value {
        Value::List(items) => items,
        other => unreachable!("list protocol applied to {}", other.type_name()),
    }
}

impl Sequence for ListType {
    fn size(&self, seq: &Value) -> Option<usize> {
        Some(items(seq).read().len())
    }

    fn item(&self, seq: &Value, index: usize) -> Slot {
        Some(
            items(seq)
                .read()
                .get(index)
                .cloned()
                .ok_or_else(subscript_out_of_bounds),
        )
    }

    fn set_item(&self, seq: &Value, index: usize, value: Value) -> Slot<Assigned> {
        let mut list = items(seq).write();
        let Some(slot) = list.get_mut(index) else {
            return Some(Err(subscript_out_of_bounds()));
        };
        *slot = value;
        Some(Ok(Assigned::InPlace))
    }

    fn slice(&self, seq: &Value, start: usize, end: usize) -> Slot {
        Some(Ok(Value::list(items(seq).read()[start..end].to_vec())))
    }

    fn set_slice(&self, seq: &Value, start: usize, end: usize, value: &Value) -> Slot<()> {
        // Snapshot first: `l[0:1] = l` reads and writes the same lock.
        let Some(replacement) = value.list_items() else {
            return Some(Err(expected("list object")));
        };
        items(seq).write().splice(start..end, replacement);
        Some(Ok(()))
    }

    fn concat(&self, left: &Value, right: &Value) -> Slot {
        let Some(tail) = right.list_items() else {
            return Some(Err(cannot_concat(right.type_name(), "list")));
        };
        let mut joined = items(left).read().clone();
        joined.extend(tail);
        Some(Ok(Value::list(joined)))
    }

    fn repeat(&self, left: &Value, right: &Value) -> Slot {
        let Value::Int(count) = right else {
            return Some(Err(non_integer_repeat()));
        };
        let count = usize::try_from(*count).unwrap_or(0);
        let unit = items(left).read().clone();
        match unit.len().checked_mul(count) {
            Some(size) if size <= LIST_MAX => {
                let mut repeated = Vec::with_capacity(size);
                for _ in 0..count {
                    repeated.extend(unit.iter().cloned());
                }
                Some(Ok(Value::list(repeated)))
            }
            _ => Some(Err(list_too_large())),
        }
    }
}

impl Comparable for ListType {
    /// Element-wise, then by length. An incomparable element pair makes the
    /// lists incomparable, as does reaching the same pair again through a
    /// cycle.
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        let (l, r) = (items(left), items(right));
        let _visit = Visit::enter(Heap::as_ptr(l), Heap::as_ptr(r))?;
        let (a, b) = (l.read().clone(), r.read().clone());
        for (x, y) in a.iter().zip(&b) {
            match dispatch::compare(x, y)? {
                Ordering::Equal => {}
                unequal => return Some(unequal),
            }
        }
        Some(a.len().cmp(&b.len()))
    }
}

impl Representable for ListType {
    fn repr(&self, value: &Value) -> String {
        let list = items(value);
        let Some(_visit) = Visit::enter_one(Heap::as_ptr(list)) else {
            return "[...]".to_string();
        };
        let snapshot = list.read().clone();
        let parts: Vec<String> = snapshot.iter().map(dispatch::repr).collect();
        format!("[{}]", parts.join(", "))
    }
}

impl Truthiness for ListType {
    fn eval_cond(&self, value: &Value) -> bool {
        !items(value).read().is_empty()
    }
}

impl Construct for ListType {
    fn init(&self, args: &[Value]) -> EvalResult {
        let args = parse_args("|o", args)?;
        match args.object(0) {
            None => Ok(Value::list(Vec::new())),
            Some(source) => Ok(Value::list(dispatch::elements(source)?)),
        }
    }
}
