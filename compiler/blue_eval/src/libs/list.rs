//! Methods of `list` values. All of them mutate the receiver in place.

use parking_lot::RwLock;

use blue_value::errors::{expected, pop_from_empty, position_out_of_bounds};
use blue_value::{parse_args, Arity, BuiltinFunction, EvalError, EvalResult, Heap, Value};

fn items(receiver: Option<&Value>) -> Result<&Heap<RwLock<Vec<Value>>>, EvalError> {
    match receiver {
        Some(Value::List(items)) => Ok(items),
        _ => Err(expected("list object")),
    }
}

fn append(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("o", args)?;
    let list = items(receiver)?;
    if let Some(value) = args.object(0) {
        list.write().push(value.clone());
    }
    Ok(Value::Nil)
}

fn prepend(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("o", args)?;
    let list = items(receiver)?;
    if let Some(value) = args.object(0) {
        list.write().insert(0, value.clone());
    }
    Ok(Value::Nil)
}

/// `insert(o, pos)`: `pos` may be anywhere from 0 to the current length.
fn insert(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("oi", args)?;
    let mut list = items(receiver)?.write();
    let position = args
        .int(1)
        .and_then(|pos| usize::try_from(pos).ok())
        .filter(|pos| *pos <= list.len())
        .ok_or_else(position_out_of_bounds)?;
    if let Some(value) = args.object(0) {
        list.insert(position, value.clone());
    }
    Ok(Value::Nil)
}

fn trunc(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    items(receiver)?.write().clear();
    Ok(Value::Nil)
}

fn reverse(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    items(receiver)?.write().reverse();
    Ok(Value::Nil)
}

fn pop(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    items(receiver)?.write().pop().ok_or_else(pop_from_empty)
}

pub(super) static METHODS: [BuiltinFunction; 6] = [
    BuiltinFunction::new("append", Arity::VarArgs, append),
    BuiltinFunction::new("prepend", Arity::VarArgs, prepend),
    BuiltinFunction::new("insert", Arity::VarArgs, insert),
    BuiltinFunction::new("trunc", Arity::NoArgs, trunc),
    BuiltinFunction::new("reverse", Arity::NoArgs, reverse),
    BuiltinFunction::new("pop", Arity::NoArgs, pop),
];
