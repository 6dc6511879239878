//! CLI handlers.

use bluec::commands::{lex_file, parse_file, run_file};
use bluec::runtime_config;
use pretty_assertions::assert_eq;

use crate::common::project;

#[test]
fn argv_starts_with_the_script() {
    let config = runtime_config(vec!["main.bl".into(), "--fast".into()]);
    assert_eq!(config.argv, vec!["main.bl".to_string(), "--fast".to_string()]);
}

#[test]
fn run_file_statuses() {
    let dir = project(&[
        ("ok.bl", "x = 1\n"),
        ("bad.bl", "x = undefined_name\n"),
        ("args.bl", "import system\nsystem.exit(len(system.argv))\n"),
    ]);
    let path = |name: &str| dir.path().join(name).display().to_string();
    assert_eq!(run_file(&path("ok.bl"), &[]), 0);
    assert_eq!(run_file(&path("bad.bl"), &[]), 1);
    assert_eq!(run_file(&path("args.bl"), &["a".into(), "b".into()]), 3);
    assert_eq!(run_file(&path("missing.bl"), &[]), 1);
}

#[test]
fn front_end_dumps() {
    let dir = project(&[("ok.bl", "print 1 + 2\n"), ("broken.bl", "def f(\n")]);
    let path = |name: &str| dir.path().join(name).display().to_string();
    assert_eq!(lex_file(&path("ok.bl")), 0);
    assert_eq!(parse_file(&path("ok.bl")), 0);
    assert_eq!(parse_file(&path("broken.bl")), 1);
    assert_eq!(lex_file(&path("missing.bl")), 1);
}
