//! Interactive sessions.

use blue_value::EvalErrorKind;
use bluec::repl::{Feed, Session, CONTINUATION_PROMPT, PROMPT};
use pretty_assertions::assert_eq;

use crate::common::runtime;

#[test]
fn multi_line_definition() {
    let rt = runtime(Vec::new());
    let mut session = Session::new(&rt);
    assert_eq!(session.prompt(), PROMPT);
    assert!(matches!(session.feed("def sq(n)"), Feed::NeedMore));
    assert_eq!(session.prompt(), CONTINUATION_PROMPT);
    assert!(matches!(session.feed("  return n * n"), Feed::NeedMore));
    assert!(matches!(session.feed("end"), Feed::Done));
    assert_eq!(session.prompt(), PROMPT);
    assert_eq!(session.pending(), "");
    assert!(matches!(session.feed("sq(4)"), Feed::Done));
    assert_eq!(rt.print_handler().captured(), "16\n");
}

#[test]
fn nested_blocks_wait_for_every_end() {
    let rt = runtime(Vec::new());
    let mut session = Session::new(&rt);
    assert!(matches!(session.feed("for i in 0..3 do"), Feed::NeedMore));
    assert!(matches!(session.feed("  if i > 0 do"), Feed::NeedMore));
    assert!(matches!(session.feed("    print i"), Feed::NeedMore));
    assert!(matches!(session.feed("  end"), Feed::NeedMore));
    assert!(matches!(session.feed("end"), Feed::Done));
    assert_eq!(rt.print_handler().captured(), "1\n2\n");
}

#[test]
fn errors_keep_the_session_alive() {
    let rt = runtime(Vec::new());
    let mut session = Session::new(&rt);
    assert!(matches!(session.feed("x = 2"), Feed::Done));
    match session.feed("y = x / 0") {
        Feed::Failed(err) => {
            assert_eq!(err.message, "int division by zero");
            assert_eq!(&*err.trace[0].path, "<stdin>");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!session.globals().contains("y"));
    assert!(matches!(session.feed("x"), Feed::Done));
    assert_eq!(rt.print_handler().captured(), "2\n");
}

#[test]
fn syntax_errors_discard_the_entry() {
    let rt = runtime(Vec::new());
    let mut session = Session::new(&rt);
    match session.feed("x = = 1") {
        Feed::Failed(err) => assert_eq!(err.kind, EvalErrorKind::Syntax),
        other => panic!("expected syntax error, got {other:?}"),
    }
    assert_eq!(session.pending(), "");
    assert_eq!(session.prompt(), PROMPT);
}

#[test]
fn exit_ends_the_session() {
    let rt = runtime(Vec::new());
    let mut session = Session::new(&rt);
    assert!(matches!(session.feed("import system"), Feed::Done));
    assert!(matches!(session.feed("system.exit(7)"), Feed::Exit(7)));
}

#[test]
fn blank_lines_and_long_comments() {
    let rt = runtime(Vec::new());
    let mut session = Session::new(&rt);
    assert!(matches!(session.feed(""), Feed::Done));
    assert!(matches!(session.feed("=== notes"), Feed::NeedMore));
    assert!(matches!(session.feed("more notes ==="), Feed::Done));
    assert_eq!(rt.print_handler().captured(), "");
}
