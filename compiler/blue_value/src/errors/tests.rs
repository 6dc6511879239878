use super::*;
use pretty_assertions::assert_eq;

#[test]
fn division_by_zero_has_arithmetic_kind() {
    let err = int_division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::Arithmetic);
    assert_eq!(err.message, "int division by zero");
}

#[test]
fn arity_message_matches_call_convention() {
    let err = argument_mismatch(2, 3);
    assert_eq!(err.kind, EvalErrorKind::Arity);
    assert_eq!(err.message, "argument mismatch. Expected (2), got (3)");
}

#[test]
fn ordering_message_names_both_types() {
    assert_eq!(
        cannot_order("int", "string").message,
        "types cannot be ordered, 'int' and 'string'"
    );
}

#[test]
fn exit_code_only_for_exit_kind() {
    assert_eq!(exit_requested(3).exit_code(), Some(3));
    assert_eq!(key_not_found().exit_code(), None);
}

#[test]
fn render_lists_frames_innermost_first() {
    let err = undefined_variable("x")
        .with_frame(Arc::from("lib.bl"), 4, Arc::from("    return x"))
        .with_frame(Arc::from("main.bl"), 9, Arc::from("f()"));
    assert_eq!(
        err.render(),
        "in lib.bl:4\n   return x\nin main.bl:9\n   f()\nfailed to resolve variable 'x'"
    );
}

#[test]
fn render_without_trace_is_message() {
    assert_eq!(break_outside_loop().render(), "break outside loop");
}

#[test]
fn display_is_message_only() {
    let err = no_such_member("Point", "z").with_frame(Arc::from("a.bl"), 1, Arc::from("p.z"));
    assert_eq!(err.to_string(), "'Point' object has no member 'z'");
}
