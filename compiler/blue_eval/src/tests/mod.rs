//! End-to-end evaluator tests: Blue source in, printed output or error out.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod call_tests;
mod control_tests;
mod import_tests;
mod operator_tests;

use blue_value::EvalError;

use crate::{buffer_handler, Runtime, RuntimeConfig};

pub(crate) fn runtime_with(config: RuntimeConfig) -> Runtime {
    Runtime::builder()
        .config(config)
        .print_handler(buffer_handler())
        .build()
}

pub(crate) fn runtime() -> Runtime {
    runtime_with(RuntimeConfig::default())
}

/// Run `source` and return everything it printed.
pub(crate) fn run(source: &str) -> String {
    let rt = runtime();
    rt.run_source(source, "<test>").unwrap();
    rt.print_handler().captured()
}

/// Run `source`, which must fail, and return the error.
pub(crate) fn run_err(source: &str) -> EvalError {
    let rt = runtime();
    match rt.run_source(source, "<test>") {
        Ok(_) => panic!("expected an error from:\n{source}"),
        Err(err) => err,
    }
}

/// The message of the error `source` fails with.
pub(crate) fn error_message(source: &str) -> String {
    run_err(source).message
}
