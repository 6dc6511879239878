//! Operators, indexing, slicing and assignment targets.

use super::{error_message, run};
use pretty_assertions::assert_eq;

#[test]
fn mixed_arithmetic_coerces_to_float() {
    assert_eq!(run("print 1 + 2.5\nprint 7 / 2\nprint 7.0 / 2"), "3.500000\n3\n3.500000\n");
}

#[test]
fn bools_are_not_numbers() {
    assert_eq!(error_message("print true + 1"), "bad operand types for '+'");
}

#[test]
fn division_by_zero() {
    assert_eq!(error_message("print 1 / 0"), "int division by zero");
    assert_eq!(error_message("print 1 % 0"), "int modulo by zero");
    assert_eq!(error_message("print 1.0 / 0"), "float division by zero");
}

#[test]
fn bitwise_and_shifts() {
    assert_eq!(run("print 6 & 3\nprint 6 | 3\nprint 6 ^ 3\nprint 1 << 4\nprint ~0"), "2\n7\n5\n16\n-1\n");
}

#[test]
fn sequence_concat_and_repeat() {
    let src = "
print \"ab\" + \"cd\"
print \"ab\" * 3
print [1] + [2, 3]
print [0] * 3
";
    assert_eq!(run(src), "abcd\nababab\n[1, 2, 3]\n[0, 0, 0]\n");
}

#[test]
fn repeat_copies_the_list() {
    let src = "
a = [1]
b = a * 1
b.append(2)
print a
";
    assert_eq!(run(src), "[1]\n");
}

#[test]
fn incompatible_operands() {
    assert_eq!(error_message("print nil + 1"), "bad operand types for '+'");
    assert_eq!(error_message("x = nil\nx -= 1"), "bad operand types for '-='");
    assert_eq!(error_message("print -\"a\""), "bad operand type for '-'");
}

#[test]
fn logical_operators_short_circuit() {
    assert_eq!(run("print 0 && undefined\nprint 1 || undefined"), "false\ntrue\n");
    assert_eq!(run("print 2 && \"x\"\nprint !nil"), "true\ntrue\n");
}

#[test]
fn equality_tolerates_unrelated_types() {
    assert_eq!(run("print 1 == \"1\"\nprint 1 != nil\nprint 1 == 1.0"), "false\ntrue\ntrue\n");
}

#[test]
fn ordering_unrelated_types_fails() {
    assert_eq!(
        error_message("print [1] < 2"),
        "types cannot be ordered, 'list' and 'int'"
    );
}

#[test]
fn range_bounds_must_be_integers() {
    assert_eq!(
        error_message("r = 1.5..3"),
        "types of the range construct must be integers"
    );
}

#[test]
fn list_indexing() {
    assert_eq!(run("xs = [1, 2, 3]\nprint xs[0]\nprint xs[-1]"), "1\n3\n");
    assert_eq!(error_message("print [1, 2, 3][3]"), "subscript position out of bounds");
    assert_eq!(error_message("xs = [1, 2, 3]\nxs[3] = 0"), "subscript position out of bounds");
    assert_eq!(error_message("print [1][\"a\"]"), "'list' indices must be integers");
}

#[test]
fn item_assignment_mutates_shared_list() {
    let src = "
a = [1, 2, 3]
b = a
b[1] = 9
print a
";
    assert_eq!(run(src), "[1, 9, 3]\n");
}

#[test]
fn string_indexing_counts_chars() {
    assert_eq!(run("s = \"h\u{e9}llo\"\nprint s[1]\nprint s[-1]"), "\u{e9}\no\n");
}

#[test]
fn int_bits_read_and_write() {
    let src = "
x = 0
x[1] = 1
x[3] = 1
print x
print x[3]
x[1] = 0
print x
";
    assert_eq!(run(src), "10\n1\n8\n");
    assert_eq!(error_message("x = 0\nx[0] = 2"), "value must be either 1 or 0");
}

#[test]
fn int_bits_are_stored_back_through_members_and_items() {
    let src = "
flags = [0]
flags[0][2] = 1
print flags
";
    assert_eq!(run(src), "[4]\n");
}

#[test]
fn map_items() {
    let src = "
m = {\"a\" => 1}
m[\"b\"] = 2
m[\"a\"] += 10
print m
print m[\"b\"]
";
    assert_eq!(run(src), "{a=>11, b=>2}\n2\n");
    assert_eq!(error_message("m = {}\nprint m[1]"), "key not found");
}

#[test]
fn slicing() {
    let src = "
xs = [0, 1, 2, 3, 4]
print xs[1:3]
print xs[:2]
print xs[3:]
print xs[-2:]
print xs[4:1]
print \"hello\"[1:4]
";
    assert_eq!(run(src), "[1, 2]\n[0, 1]\n[3, 4]\n[3, 4]\n[]\nell\n");
}

#[test]
fn slice_assignment_replaces_the_range() {
    let src = "
xs = [0, 1, 2, 3]
xs[1:3] = [9]
print xs
";
    assert_eq!(run(src), "[0, 9, 3]\n");
}

#[test]
fn values_without_items() {
    assert_eq!(error_message("x = nil\nprint x[0]"), "'nil' object is not subscriptable");
    assert_eq!(
        error_message("s = \"abc\"\ns[0] = \"x\""),
        "'string' object does not support item assignment"
    );
}

#[test]
fn augmented_assignment_on_members() {
    let src = "
class Counter
  def __init__(self) self.n = 0 end
end
c = new Counter()
c.n += 5
c.n *= 2
print c.n
";
    assert_eq!(run(src), "10\n");
}

#[test]
fn integer_literal_overflow() {
    assert_eq!(error_message("print 99999999999999999999"), "number overflow");
}

#[test]
fn self_containing_containers_print_an_ellipsis() {
    let src = "
l = [1]
l.append(l)
print l
m = {}
m[\"self\"] = m
print m
x = []
y = [x]
x.append(y)
print x
";
    assert_eq!(run(src), "[1, [...]]\n{self=>{...}}\n[[[...]]]\n");
}

#[test]
fn self_containing_lists_compare_without_recursing_forever() {
    let src = "
a = [1]
a.append(a)
b = [1]
b.append(b)
print a == b
print a != b
print a == a
";
    assert_eq!(run(src), "false\ntrue\ntrue\n");
    let ordering = "a = [1]\na.append(a)\nb = [1]\nb.append(b)\nprint a < b";
    assert_eq!(
        error_message(ordering),
        "types cannot be ordered, 'list' and 'list'"
    );
}
