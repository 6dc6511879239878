//! Command handlers for the `blue` binary.
//!
//! Every handler reports its own errors on stderr and returns the process
//! exit status; `main` only forwards it.

mod debug;
mod run;

use blue_value::EvalError;

pub use debug::{lex_file, parse_file};
pub use run::{run_file, run_script};

/// Read a source file, reporting failure on stderr.
fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            eprintln!("error: cannot read '{path}': {e}");
            None
        }
    }
}

/// Exit status for a failed run. An exit request is silent; anything else
/// prints its trace.
pub fn report(err: &EvalError) -> i32 {
    if let Some(code) = err.exit_code() {
        return code;
    }
    eprintln!("{}", err.render());
    1
}
