//! The `run` command.

use std::path::Path;

use blue_eval::Runtime;

use super::report;
use crate::runtime_config;

/// Run the script at `path`; `args` follow the path in `system.argv`.
pub fn run_file(path: &str, args: &[String]) -> i32 {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(path.to_string());
    argv.extend_from_slice(args);
    let runtime = Runtime::new(runtime_config(argv));
    run_script(&runtime, Path::new(path))
}

/// Run `path` on an existing runtime.
#[tracing::instrument(level = "debug", skip(runtime))]
pub fn run_script(runtime: &Runtime, path: &Path) -> i32 {
    match runtime.run_file(path) {
        Ok(_) => 0,
        Err(err) => report(&err),
    }
}
