//! Methods of `map` values.

use parking_lot::RwLock;

use blue_value::errors::{expected, key_not_found};
use blue_value::{parse_args, Arity, BuiltinFunction, EvalError, EvalResult, Heap, MapStorage, Value};

fn storage(receiver: Option<&Value>) -> Result<&Heap<RwLock<MapStorage>>, EvalError> {
    match receiver {
        Some(Value::Map(map)) => Ok(map),
        _ => Err(expected("map object")),
    }
}

/// Keys in insertion order.
fn keys(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    Ok(Value::list(storage(receiver)?.read().keys()))
}

fn values(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    Ok(Value::list(storage(receiver)?.read().values()))
}

fn has(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("o", args)?;
    let map = storage(receiver)?;
    match args.object(0) {
        Some(key) => Ok(Value::bool(map.read().contains(key)?)),
        None => Ok(Value::bool(false)),
    }
}

/// Remove `key` and return its value.
fn remove(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("o", args)?;
    let map = storage(receiver)?;
    let Some(key) = args.object(0) else {
        return Err(key_not_found());
    };
    let removed = map.write().remove(key)?;
    removed.ok_or_else(key_not_found)
}

pub(super) static METHODS: [BuiltinFunction; 4] = [
    BuiltinFunction::new("keys", Arity::NoArgs, keys),
    BuiltinFunction::new("values", Arity::NoArgs, values),
    BuiltinFunction::new("has", Arity::VarArgs, has),
    BuiltinFunction::new("remove", Arity::VarArgs, remove),
];
