//! Blue command-line driver.
//!
//! The `blue` binary is a thin argument match over [`commands`]. The REPL's
//! line handling lives in [`repl`] so it can be driven without a terminal.

pub mod commands;
pub mod repl;
mod tracing_setup;

use blue_eval::RuntimeConfig;

pub use tracing_setup::init_tracing;

/// Settings for one invocation: `argv` becomes `system.argv`, and the roots
/// in `BLUE_PATH` are searched before the defaults.
pub fn runtime_config(argv: Vec<String>) -> RuntimeConfig {
    let mut config = RuntimeConfig::default().with_argv(argv);
    if let Ok(roots) = std::env::var("BLUE_PATH") {
        config.prepend_search_roots(&roots);
    }
    config
}
