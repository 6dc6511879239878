//! Function calls, argument binding and builtin call conventions.

use super::{error_message, run, run_err, runtime_with};
use crate::RuntimeConfig;
use blue_value::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn recursion() {
    let src = "
def fib(n)
  if n < 2 do return n end
  return fib(n - 1) + fib(n - 2)
end
print fib(15)
";
    assert_eq!(run(src), "610\n");
}

#[test]
fn function_without_return_yields_nil() {
    assert_eq!(run("def f() x = 1 end\nprint f()"), "nil\n");
}

#[test]
fn arity_mismatch_is_reported_before_arguments_run() {
    let src = "
def noisy()
  print \"evaluated\"
  return 1
end
def f(a) end
f(1, noisy())
";
    let rt = super::runtime();
    let err = rt.run_source(src, "<test>").unwrap_err();
    assert_eq!(err.message, "argument mismatch. Expected (1), got (2)");
    assert_eq!(err.kind, EvalErrorKind::Arity);
    assert_eq!(rt.print_handler().captured(), "");
}

#[test]
fn star_parameter_collects_surplus() {
    let src = "
def f(a, *rest)
  print a
  return rest
end
print f(1, 2, 3)
print f(1)
";
    assert_eq!(run(src), "1\n[2, 3]\n1\n[]\n");
    assert_eq!(
        error_message("def f(a, b, *rest) end\nf(1)"),
        "argument mismatch. Expected (2), got (1)"
    );
}

#[test]
fn locals_do_not_leak_between_calls() {
    let src = "
x = \"global\"
def f()
  x = \"local\"
  return x
end
print f()
print x
";
    assert_eq!(run(src), "local\nglobal\n");
}

#[test]
fn functions_read_globals_at_call_time() {
    let src = "
def show() print counter end
counter = 1
show()
counter = 2
show()
";
    assert_eq!(run(src), "1\n2\n");
}

#[test]
fn nested_function_is_local() {
    let src = "
def outer()
  def inner() return 5 end
  return inner()
end
print outer()
print inner
";
    let rt = super::runtime();
    let err = rt.run_source(src, "<test>").unwrap_err();
    assert_eq!(rt.print_handler().captured(), "5\n");
    assert_eq!(err.message, "failed to resolve variable 'inner'");
}

#[test]
fn functions_are_values() {
    let src = "
def twice(f, x) return f(f(x)) end
def inc(n) return n + 1 end
g = inc
print twice(g, 1)
print inc
";
    assert_eq!(run(src), "3\n<function 'inc', params=1>\n");
}

#[test]
fn calling_a_non_callable() {
    assert_eq!(error_message("x = 3\nx()"), "'int' object is not callable");
}

#[test]
fn recursion_limit() {
    let mut config = RuntimeConfig::default();
    config.max_call_depth = Some(50);
    let rt = runtime_with(config);
    let err = rt
        .run_source("def down(n) return down(n + 1) end\ndown(0)", "<test>")
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::Limit);
    assert_eq!(err.message, "maximum recursion depth exceeded (50)");
}

#[test]
fn builtin_functions() {
    let src = "
print len([1, 2, 3])
print len(\"abc\")
print len({1 => 2})
print len(0..10)
print type(1)
print type([])
print repr(1.5)
";
    assert_eq!(run(src), "3\n3\n1\n10\n<class 'int'>\n<class 'list'>\n1.500000\n");
}

#[test]
fn len_of_unsized_value() {
    assert_eq!(error_message("len(1)"), "object of type 'int' has no len()");
}

#[test]
fn no_args_builtin_rejects_arguments() {
    assert_eq!(error_message("\"a\".toupper(1)"), "toupper() takes no arguments");
}

#[test]
fn bound_builtin_method() {
    assert_eq!(run("f = \"abc\".toupper\nprint f()"), "ABC\n");
}

#[test]
fn unbound_builtin_method_takes_receiver_first() {
    assert_eq!(run("print string.toupper(\"abc\")"), "ABC\n");
    assert_eq!(
        error_message("string.toupper(1)"),
        "method 'toupper' requires a 'string' object as receiver"
    );
    assert_eq!(
        error_message("list.append()"),
        "method 'append' requires a 'list' object as receiver"
    );
}

#[test]
fn type_values_construct() {
    let src = "
print int(\"42\") + 1
print float(2)
print string(12)
print list(0..3)
print bool(false)
print new list(1..3)
";
    assert_eq!(run(src), "43\n2.000000\n12\n[0, 1, 2]\nfalse\n[1, 2]\n");
}

#[test]
fn instantiating_a_non_class() {
    assert_eq!(
        error_message("x = 1\ny = new x()"),
        "cannot create an instance from the 'int' object"
    );
}

#[test]
fn exit_carries_status_without_trace() {
    let src = "import system\ndef f() system.exit(3) end\nf()\nprint \"unreachable\"";
    let err = run_err(src);
    assert_eq!(err.exit_code(), Some(3));
    assert!(err.trace.is_empty());
}
