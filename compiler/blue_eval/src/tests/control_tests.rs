//! Statements and control flow.

use super::{error_message, run, run_err};
use blue_value::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn if_elif_else_picks_first_true_branch() {
    let src = "
def pick(n)
  if n < 0 do
    return \"neg\"
  elif n == 0 then
    return \"zero\"
  else
    return \"pos\"
  end
end
print pick(-3)
print pick(0)
print pick(9)
";
    assert_eq!(run(src), "neg\nzero\npos\n");
}

#[test]
fn zero_and_negative_numbers_are_false() {
    let src = "
if 0 do print \"a\" else print \"b\" end
if -1 do print \"a\" else print \"b\" end
if 0.5 do print \"a\" else print \"b\" end
if \"\" do print \"a\" else print \"b\" end
if [] do print \"a\" else print \"b\" end
if nil do print \"a\" else print \"b\" end
";
    assert_eq!(run(src), "b\nb\na\nb\nb\nb\n");
}

#[test]
fn while_with_break_and_continue() {
    let src = "
i = 0
total = 0
while true do
  i += 1
  if i > 10 do break end
  if i % 2 == 0 do continue end
  total += i
end
print total
";
    assert_eq!(run(src), "25\n");
}

#[test]
fn for_over_range_excludes_end() {
    assert_eq!(run("s = 0\nfor i in 0..5 do s += i end\nprint s"), "10\n");
}

#[test]
fn for_over_empty_range_never_runs() {
    assert_eq!(run("for i in 5..2 do print i end\nprint \"done\""), "done\n");
}

#[test]
fn for_with_two_names_binds_index_and_item() {
    let src = "for i, c in \"ab\" do print i; print c end";
    assert_eq!(run(src), "0\na\n1\nb\n");
}

#[test]
fn for_over_map_binds_key_and_value_in_insertion_order() {
    let src = "
m = {\"z\" => 1, \"a\" => 2}
for k, v in m do print k; print v end
for k in m do print k end
";
    assert_eq!(run(src), "z\n1\na\n2\nz\na\n");
}

#[test]
fn for_iterates_a_snapshot() {
    let src = "
xs = [1, 2]
for x in xs do xs.append(x) end
print xs
";
    assert_eq!(run(src), "[1, 2, 1, 2]\n");
}

#[test]
fn break_inside_nested_loop_only_leaves_inner() {
    let src = "
for i in 0..3 do
  for j in 0..3 do
    if j == 1 do break end
    print i
  end
end
";
    assert_eq!(run(src), "0\n1\n2\n");
}

#[test]
fn return_leaves_loops() {
    let src = "
def first_even(xs)
  for x in xs do
    if x % 2 == 0 do return x end
  end
  return nil
end
print first_even([3, 5, 8, 10])
print first_even([1])
";
    assert_eq!(run(src), "8\nnil\n");
}

#[test]
fn control_statements_outside_their_construct() {
    assert_eq!(error_message("return 1"), "return outside function");
    assert_eq!(error_message("break"), "break outside loop");
    assert_eq!(error_message("continue"), "continue outside loop");
    assert_eq!(run_err("break").kind, EvalErrorKind::ControlFlow);
}

#[test]
fn loops_do_not_leak_into_called_functions() {
    let src = "
def f()
  break
end
while true do f() end
";
    assert_eq!(error_message(src), "break outside loop");
}

#[test]
fn undefined_variable() {
    assert_eq!(error_message("print y"), "failed to resolve variable 'y'");
}

#[test]
fn error_trace_lists_innermost_frame_first() {
    let src = "x = 1\ndef f()\n  return 1 / 0\nend\nprint f()\n";
    let err = run_err(src);
    assert_eq!(err.message, "int division by zero");
    let lines: Vec<u32> = err.trace.iter().map(|frame| frame.line).collect();
    assert_eq!(lines, vec![3, 5]);
    assert_eq!(&*err.trace[0].source_line, "  return 1 / 0");
    assert_eq!(
        err.render(),
        "in <test>:3\n   return 1 / 0\nin <test>:5\n   print f()\nint division by zero"
    );
}

#[test]
fn loop_condition_errors_report_the_loop_line() {
    let src = "i = 0\nwhile i < 2 do\n  i += 1\n  if i == 2 do i = \"s\" end\nend\n";
    let err = run_err(src);
    assert_eq!(err.message, "types cannot be ordered, 'string' and 'int'");
    assert_eq!(err.trace[0].line, 2);
}

#[test]
fn print_uses_repr() {
    let src = "
print 3
print 2.5
print true
print nil
print [1, \"a\", [2]]
print {1 => \"x\"}
print 1..4
";
    assert_eq!(run(src), "3\n2.500000\ntrue\nnil\n[1, a, [2]]\n{1=>x}\n1..4\n");
}

proptest::proptest! {
    #[test]
    fn for_over_range_visits_each_integer_once(lo in -20_i64..20, hi in -20_i64..20) {
        let src = format!("n = 0\nlast = nil\nfor i in {lo}..{hi} do\n  n += 1\n  last = i\nend\nprint n\nprint last");
        let expected_last = if hi > lo { (hi - 1).to_string() } else { "nil".to_string() };
        proptest::prop_assert_eq!(run(&src), format!("{}\n{expected_last}\n", (hi - lo).max(0)));
    }
}
