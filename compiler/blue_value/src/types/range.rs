//! `range`: the half-open interval produced by `a..b`.

use super::{Construct, Representable, Sequence, Slot};
use crate::args::parse_args;
use crate::errors::{subscript_out_of_bounds, EvalResult};
use crate::value::{RangeValue, Value};

pub(super) struct RangeType;

fn range(value: &Value) -> RangeValue {
    match value {
        Value::Range(r) => *r,
        other => unreachable!("range protocol applied to {}", other.type_name()),
    }
}

impl Sequence for RangeType {
    fn size(&self, seq: &Value) -> Option<usize> {
        Some(range(seq).len())
    }

    fn item(&self, seq: &Value, index: usize) -> Slot {
        let r = range(seq);
        if index >= r.len() {
            return Some(Err(subscript_out_of_bounds()));
        }
        let offset = i64::try_from(index).unwrap_or(i64::MAX);
        Some(Ok(Value::int(r.start.wrapping_add(offset))))
    }
}

impl Representable for RangeType {
    fn repr(&self, value: &Value) -> String {
        let r = range(value);
        format!("{}..{}", r.start, r.end)
    }
}

impl Construct for RangeType {
    fn init(&self, args: &[Value]) -> EvalResult {
        let args = parse_args("ii", args)?;
        Ok(Value::range(
            args.int(0).unwrap_or_default(),
            args.int(1).unwrap_or_default(),
        ))
    }
}
