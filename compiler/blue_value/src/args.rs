//! Positional argument checking for builtins.
//!
//! A format string lists one tag per argument:
//!
//! | tag | accepts | yields |
//! |-----|---------|--------|
//! | `i` | int | [`Args::int`] |
//! | `f` | float or int | [`Args::float`] |
//! | `s` | string | [`Args::str`] |
//! | `b` | bool | [`Args::bool`] |
//! | `o` | anything | [`Args::object`] |
//!
//! Tags after a `|` are optional. `parse_args("s|i", args)` accepts one or
//! two arguments.

use crate::errors::{argument_mismatch, expected, EvalError};
use crate::value::Value;

/// Arguments that passed a format check.
#[derive(Debug)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Number of arguments actually supplied.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn int(&self, i: usize) -> Option<i64> {
        self.values.get(i).and_then(Value::as_int)
    }

    pub fn float(&self, i: usize) -> Option<f64> {
        match self.values.get(i)? {
            Value::Float(f) => Some(*f),
            #[expect(clippy::cast_precision_loss, reason = "int to float promotion")]
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn str(&self, i: usize) -> Option<&'a str> {
        self.values.get(i).and_then(Value::as_str)
    }

    pub fn bool(&self, i: usize) -> Option<bool> {
        match self.values.get(i)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn object(&self, i: usize) -> Option<&'a Value> {
        self.values.get(i)
    }
}

/// Check `args` against `format`.
///
/// # Panics
///
/// On an unknown tag in `format`; formats are static strings in native
/// libraries, so this is a bug in the library rather than the script.
pub fn parse_args<'a>(format: &str, args: &'a [Value]) -> Result<Args<'a>, EvalError> {
    let (required, optional) = format.split_once('|').unwrap_or((format, ""));
    let total = required.len() + optional.len();
    if args.len() < required.len() {
        return Err(argument_mismatch(required.len(), args.len()));
    }
    if args.len() > total {
        return Err(argument_mismatch(total, args.len()));
    }

    for (tag, arg) in required.chars().chain(optional.chars()).zip(args) {
        let ok = match tag {
            'i' => matches!(arg, Value::Int(_)),
            'f' => matches!(arg, Value::Float(_) | Value::Int(_)),
            's' => matches!(arg, Value::Str(_)),
            'b' => matches!(arg, Value::Bool(_)),
            'o' => true,
            other => unreachable!("unknown argument tag '{other}' in format {format:?}"),
        };
        if !ok {
            return Err(expected(tag_description(tag)));
        }
    }
    Ok(Args { values: args })
}

fn tag_description(tag: char) -> &'static str {
    match tag {
        'i' => "int object",
        'f' => "float object",
        's' => "string object",
        _ => "bool object",
    }
}
