//! Runtime configuration.

use std::path::PathBuf;

/// Default call depth limit.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Settings fixed for the lifetime of a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Roots searched, in order, when resolving `import`.
    pub search_path: Vec<PathBuf>,
    /// Script arguments, exposed as `system.argv`; the script path first.
    pub argv: Vec<String>,
    /// Where the REPL appends entered lines.
    pub history_file: Option<PathBuf>,
    /// Script-level call depth limit; `None` for unlimited.
    pub max_call_depth: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            search_path: vec![PathBuf::from("./modules"), PathBuf::from(".")],
            argv: Vec::new(),
            history_file: std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".blue_hist")),
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl RuntimeConfig {
    /// Put the roots of a colon-separated list (the `BLUE_PATH` format) ahead
    /// of the current search path. Empty entries are skipped.
    pub fn prepend_search_roots(&mut self, roots: &str) {
        let extra: Vec<PathBuf> = roots
            .split(':')
            .filter(|root| !root.is_empty())
            .map(PathBuf::from)
            .collect();
        self.search_path.splice(0..0, extra);
    }

    #[must_use]
    pub fn with_argv(mut self, argv: Vec<String>) -> Self {
        self.argv = argv;
        self
    }

    #[must_use]
    pub fn with_search_path(mut self, search_path: Vec<PathBuf>) -> Self {
        self.search_path = search_path;
        self
    }
}
