//! Functions and type names available everywhere without an import.

use std::io::{BufRead as _, Write as _};

use blue_value::errors::io_error;
use blue_value::types::CONSTRUCTIBLE;
use blue_value::{dispatch, parse_args, register, Arity, BuiltinFunction, EvalResult, Scope, Value};

fn len(_: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("o", args)?;
    let Some(object) = args.object(0) else {
        return Ok(Value::Nil);
    };
    let size = dispatch::size(object)?;
    Ok(Value::int(i64::try_from(size).unwrap_or(i64::MAX)))
}

fn type_of(_: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("o", args)?;
    Ok(args
        .object(0)
        .map_or(Value::Nil, |object| Value::Type(object.type_object())))
}

fn repr(_: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("o", args)?;
    Ok(Value::string(
        args.object(0).map(dispatch::repr).unwrap_or_default(),
    ))
}

/// Read one line from stdin, without its line terminator; `nil` at end of
/// input.
fn input(_: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("|s", args)?;
    if let Some(prompt) = args.str(0) {
        let mut out = std::io::stdout().lock();
        out.write_all(prompt.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|err| io_error(&err))?;
    }
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| io_error(&err))?;
    if read == 0 {
        return Ok(Value::Nil);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Value::string(trimmed))
}

pub(super) static FUNCTIONS: [BuiltinFunction; 4] = [
    BuiltinFunction::new("len", Arity::VarArgs, len),
    BuiltinFunction::new("type", Arity::VarArgs, type_of),
    BuiltinFunction::new("repr", Arity::VarArgs, repr),
    BuiltinFunction::new("input", Arity::VarArgs, input),
];

/// The shared builtins scope: constructible type names plus [`FUNCTIONS`].
pub(crate) fn scope() -> Scope {
    let scope = Scope::new();
    for ty in CONSTRUCTIBLE {
        scope.set(ty.name(), Value::Type(ty));
    }
    register(&scope, &FUNCTIONS, &[]);
    scope
}
