//! Methods of `file` values.

use blue_value::errors::expected;
use blue_value::{
    parse_args, Arity, BuiltinFunction, EvalError, EvalResult, FileObject, Heap, Value,
};

fn file(receiver: Option<&Value>) -> Result<&Heap<FileObject>, EvalError> {
    match receiver {
        Some(Value::File(file)) => Ok(file),
        _ => Err(expected("file object")),
    }
}

/// `read(n)`: up to `n` bytes; `""` at end of input.
fn read(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("i", args)?;
    let limit = args.int(0).and_then(|n| usize::try_from(n).ok()).unwrap_or(0);
    file(receiver)?.read(limit).map(Value::string)
}

fn readall(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    file(receiver)?.read_all().map(Value::string)
}

/// `write(s)`: the number of bytes written.
fn write(receiver: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("s", args)?;
    let written = file(receiver)?.write(args.str(0).unwrap_or_default())?;
    Ok(Value::int(i64::try_from(written).unwrap_or(i64::MAX)))
}

fn close(receiver: Option<&Value>, _: &[Value]) -> EvalResult {
    file(receiver)?.close()?;
    Ok(Value::Nil)
}

pub(super) static METHODS: [BuiltinFunction; 4] = [
    BuiltinFunction::new("read", Arity::VarArgs, read),
    BuiltinFunction::new("readall", Arity::NoArgs, readall),
    BuiltinFunction::new("write", Arity::VarArgs, write),
    BuiltinFunction::new("close", Arity::NoArgs, close),
];
