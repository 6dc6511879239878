//! Blue Eval - runtime, evaluator and native libraries for Blue.
//!
//! # Architecture
//!
//! - [`Runtime`]: process-wide state shared by every evaluator (builtins,
//!   native modules, the module cache, print output)
//! - [`Evaluator`]: walks the `blue_ir` tree of one module or REPL session
//! - `libs`: builtin functions, container methods, `system` and `time`
//! - `loader`: search-path resolution and reading of `.bl` modules
//!
//! Values and their protocol dispatch live in `blue_value`; this crate
//! decides what statements mean and in which scope names live.

mod config;
mod evaluator;
mod frame;
mod libs;
mod loader;
mod print_handler;
mod runtime;

pub use config::{RuntimeConfig, DEFAULT_MAX_CALL_DEPTH};
pub use evaluator::{Evaluator, Flow};
pub use frame::{Frame, FrameStack};
pub use loader::{read_module, resolve, LoadError, SCRIPT_EXTENSION};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use runtime::{parse, Runtime, RuntimeBuilder};

pub use blue_value::{EvalError, EvalErrorKind, EvalResult, Scope, Value};

#[cfg(test)]
mod tests;
