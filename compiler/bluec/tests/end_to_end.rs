#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

//! End-to-end tests: source text through lexer, parser and evaluator, with
//! output captured by a buffered print handler.
//!
//! - `programs` - whole scripts run the way `blue FILE` runs them
//! - `repl` - interactive sessions fed line by line
//! - `commands` - exit statuses of the CLI handlers

#[path = "end_to_end/common.rs"]
mod common;

#[path = "end_to_end/programs.rs"]
mod programs;

#[path = "end_to_end/repl.rs"]
mod repl;

#[path = "end_to_end/commands.rs"]
mod commands;
