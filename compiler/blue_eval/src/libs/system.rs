//! The `system` module: process information, standard streams and exit.

use blue_value::errors::exit_requested;
use blue_value::{
    parse_args, register, Arity, BuiltinFunction, EvalResult, FieldDescriptor, FieldValue, Scope,
    Stream, Value,
};

use crate::print_handler::{HandlerWriter, SharedPrintHandler};
use crate::RuntimeConfig;

/// `exit([code])`: stop the whole program with `code` (default 0).
fn exit(_: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("|i", args)?;
    let code = args.int(0).unwrap_or(0);
    Err(exit_requested(i32::try_from(code).unwrap_or(i32::MAX)))
}

static FUNCTIONS: [BuiltinFunction; 1] = [BuiltinFunction::new("exit", Arity::VarArgs, exit)];

static FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::new("version", FieldValue::Str(env!("CARGO_PKG_VERSION"))),
    FieldDescriptor::new("platform", FieldValue::Str(std::env::consts::OS)),
];

/// `stdout` writes through the runtime's print handler, so it interleaves
/// with `print` and is captured with it.
pub(crate) fn module(config: &RuntimeConfig, print: &SharedPrintHandler) -> Value {
    let members = Scope::new();
    register(&members, &FUNCTIONS, &FIELDS);
    members.set(
        "stdin",
        Value::file("/dev/stdin", "r", Stream::Reader(Box::new(std::io::stdin()))),
    );
    members.set(
        "stdout",
        Value::file("/dev/stdout", "w", Stream::Writer(Box::new(HandlerWriter(print.clone())))),
    );
    members.set(
        "stderr",
        Value::file("/dev/stderr", "w", Stream::Writer(Box::new(std::io::stderr()))),
    );
    let path = config
        .search_path
        .iter()
        .map(|root| Value::string(root.display().to_string()))
        .collect();
    members.set("path", Value::list(path));
    let argv = config.argv.iter().map(|arg| Value::string(arg.as_str())).collect();
    members.set("argv", Value::list(argv));
    Value::module("system", "<builtin>", members)
}
