//! Methods of `string` values.

use blue_value::errors::expected;
use blue_value::{parse_args, Arity, BuiltinFunction, EvalError, EvalResult, Value};

fn text(receiver: Option<&Value>) -> Result<&str, EvalError> {
    receiver
        .and_then(Value::as_str)
        .ok_or_else(|| expected("string object"))
}

fn concat(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("s", args)?;
    let mut joined = text(receiver)?.to_string();
    joined.push_str(args.str(0).unwrap_or_default());
    Ok(Value::string(joined))
}

fn toupper(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    Ok(Value::string(text(receiver)?.to_uppercase()))
}

fn tolower(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    Ok(Value::string(text(receiver)?.to_lowercase()))
}

/// Character position of the first occurrence, or -1.
fn find(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("s", args)?;
    let haystack = text(receiver)?;
    let position = haystack
        .find(args.str(0).unwrap_or_default())
        .map_or(-1, |byte| {
            i64::try_from(haystack[..byte].chars().count()).unwrap_or(i64::MAX)
        });
    Ok(Value::int(position))
}

/// Split on `sep`, or on runs of whitespace when no separator is given.
fn split(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("|s", args)?;
    let haystack = text(receiver)?;
    let parts: Vec<Value> = match args.str(0) {
        None => haystack.split_whitespace().map(Value::string).collect(),
        Some("") => return Err(expected("non-empty separator")),
        Some(sep) => haystack.split(sep).map(Value::string).collect(),
    };
    Ok(Value::list(parts))
}

fn strip(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    Ok(Value::string(text(receiver)?.trim()))
}

pub(super) static METHODS: [BuiltinFunction; 6] = [
    BuiltinFunction::new("concat", Arity::VarArgs, concat),
    BuiltinFunction::new("toupper", Arity::NoArgs, toupper),
    BuiltinFunction::new("tolower", Arity::NoArgs, tolower),
    BuiltinFunction::new("find", Arity::VarArgs, find),
    BuiltinFunction::new("split", Arity::VarArgs, split),
    BuiltinFunction::new("strip", Arity::NoArgs, strip),
];
