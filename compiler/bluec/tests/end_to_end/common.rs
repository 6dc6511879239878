//! Shared helpers.

use std::fs;
use std::path::PathBuf;

use blue_eval::{buffer_handler, Runtime, RuntimeConfig};
use tempfile::TempDir;

/// A runtime that captures `print` output, searching `search_path`.
pub fn runtime(search_path: Vec<PathBuf>) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig::default().with_search_path(search_path))
        .print_handler(buffer_handler())
        .build()
}

/// Output of running `source` as a file.
pub fn run(source: &str) -> String {
    let rt = runtime(Vec::new());
    rt.run_source(source, "<test>").unwrap();
    rt.print_handler().captured()
}

/// A temp dir holding `files`.
pub fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, source) in files {
        fs::write(dir.path().join(name), source).unwrap();
    }
    dir
}
