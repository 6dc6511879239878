//! Module import, caching and file execution.

use std::fs;
use std::path::Path;

use super::runtime_with;
use crate::{Runtime, RuntimeConfig};
use blue_value::EvalErrorKind;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// A temp dir holding `files`, and a runtime searching it.
fn project(files: &[(&str, &str)]) -> (TempDir, Runtime) {
    let dir = tempfile::tempdir().unwrap();
    for (name, source) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, source).unwrap();
    }
    let config = RuntimeConfig::default().with_search_path(vec![dir.path().to_path_buf()]);
    let rt = runtime_with(config);
    (dir, rt)
}

#[test]
fn module_body_runs_once() {
    let (_dir, rt) = project(&[(
        "util.bl",
        "print \"loading\"\nvalue = 21\ndef twice(n) return n * 2 end\n",
    )]);
    rt.run_source("import util\nimport util\nprint util.twice(util.value)", "<test>")
        .unwrap();
    rt.run_source("import util\nprint util.value", "<test>").unwrap();
    assert_eq!(rt.print_handler().captured(), "loading\n42\n21\n");
    assert_eq!(rt.loaded_modules(), 1);
}

#[test]
fn imported_module_is_the_same_object() {
    let (_dir, rt) = project(&[("m.bl", "items = []\n")]);
    let src = "
import m
def add() m.items.append(1) end
add()
add()
import m
print m.items
";
    rt.run_source(src, "<test>").unwrap();
    assert_eq!(rt.print_handler().captured(), "[1, 1]\n");
}

#[test]
fn dotted_import_binds_last_component() {
    let (_dir, rt) = project(&[("pkg/geo.bl", "origin = 0\n")]);
    rt.run_source("import pkg.geo\nprint geo.origin", "<test>").unwrap();
    assert_eq!(rt.print_handler().captured(), "0\n");
}

#[test]
fn functions_run_in_their_module_globals() {
    let (_dir, rt) = project(&[(
        "scale.bl",
        "factor = 3\ndef apply(n) return n * factor end\n",
    )]);
    rt.run_source("factor = 100\nimport scale\nprint scale.apply(2)", "<test>")
        .unwrap();
    assert_eq!(rt.print_handler().captured(), "6\n");
}

#[test]
fn several_paths_in_one_import() {
    let (_dir, rt) = project(&[("a.bl", "n = 1\n"), ("b.bl", "n = 2\n")]);
    rt.run_source("import a, b\nprint a.n + b.n", "<test>").unwrap();
    assert_eq!(rt.print_handler().captured(), "3\n");
}

#[test]
fn cyclic_imports_see_partial_modules() {
    let (_dir, rt) = project(&[
        ("a.bl", "import b\nname = \"a\"\n"),
        ("b.bl", "import a\nname = \"b\"\n"),
    ]);
    rt.run_source("import a\nprint a.b.name\nprint a.name", "<test>")
        .unwrap();
    assert_eq!(rt.print_handler().captured(), "b\na\n");
    assert_eq!(rt.loaded_modules(), 2);
}

#[test]
fn missing_module() {
    let (_dir, rt) = project(&[]);
    let err = rt.run_source("import nope", "<test>").unwrap_err();
    assert_eq!(err.message, "failed to load module 'nope'");
    assert_eq!(err.kind, EvalErrorKind::Resolution);
}

#[test]
fn failed_module_is_evicted_and_retried() {
    let (dir, rt) = project(&[("bad.bl", "x = 1\nprint 1 / 0\n")]);
    let err = rt.run_source("import bad", "<test>").unwrap_err();
    assert_eq!(err.message, "int division by zero");
    let lines: Vec<u32> = err.trace.iter().map(|frame| frame.line).collect();
    assert_eq!(lines, vec![2, 1]);
    assert!(err.trace[0].path.ends_with("bad.bl"));
    assert_eq!(rt.loaded_modules(), 0);

    fs::write(dir.path().join("bad.bl"), "x = 1\n").unwrap();
    rt.run_source("import bad\nprint bad.x", "<test>").unwrap();
    assert_eq!(rt.print_handler().captured(), "1\n");
}

#[test]
fn syntax_error_in_module() {
    let (_dir, rt) = project(&[("broken.bl", "def f(\n")]);
    let err = rt.run_source("import broken", "<test>").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::Syntax);
    assert!(err.trace[0].path.ends_with("broken.bl"));
    assert_eq!(&*err.trace[1].path, "<test>");
}

#[test]
fn run_file_returns_globals() {
    let (dir, rt) = project(&[("main.bl", "answer = 6 * 7\n")]);
    let globals = rt.run_file(&dir.path().join("main.bl")).unwrap();
    assert_eq!(globals.get("answer").and_then(|v| v.as_int()), Some(42));
}

#[test]
fn run_file_reports_missing_file() {
    let rt = super::runtime();
    let err = rt.run_file(Path::new("/definitely/not/here.bl")).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::Io);
}

#[test]
fn native_modules_shadow_files() {
    let (_dir, rt) = project(&[("time.bl", "print \"file\"\n")]);
    rt.run_source("import time\nprint time", "<test>").unwrap();
    assert_eq!(
        rt.print_handler().captured(),
        "<module 'time', path='<builtin>'>\n"
    );
}

#[test]
fn import_inside_a_function_binds_a_global() {
    let (_dir, rt) = project(&[("util.bl", "value = 7\n")]);
    let src = "
def load()
  import util
  return util.value
end
print load()
print util.value
";
    rt.run_source(src, "<test>").unwrap();
    assert_eq!(rt.print_handler().captured(), "7\n7\n");
}
