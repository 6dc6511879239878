use super::{dump, error};
use pretty_assertions::assert_eq;

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        dump("1 + 2 * 3"),
        "BINARY +\n  INTEGER \"1\"\n  BINARY *\n    INTEGER \"2\"\n    INTEGER \"3\"\n"
    );
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(
        dump("8 - 4 - 2"),
        "BINARY -\n  BINARY -\n    INTEGER \"8\"\n    INTEGER \"4\"\n  INTEGER \"2\"\n"
    );
}

#[test]
fn comparison_below_bitwise() {
    assert_eq!(
        dump("a | 1 == 3"),
        "COMPARE ==\n  BINARY |\n    NAME \"a\"\n    INTEGER \"1\"\n  INTEGER \"3\"\n"
    );
}

#[test]
fn logical_operators() {
    assert_eq!(
        dump("a || b && !c"),
        "LOGICAL_OR\n  NAME \"a\"\n  LOGICAL_AND\n    NAME \"b\"\n    NOT \"!\"\n      NAME \"c\"\n"
    );
}

#[test]
fn range_is_lowest() {
    assert_eq!(
        dump("0..n + 1"),
        "RANGE\n  INTEGER \"0\"\n  BINARY +\n    NAME \"n\"\n    INTEGER \"1\"\n"
    );
}

#[test]
fn trailers_chain() {
    assert_eq!(
        dump("a.b(1)[2]"),
        concat!(
            "SUBSCRIPT\n",
            "  CALL\n",
            "    MEMBER \"b\"\n",
            "      NAME \"a\"\n",
            "      NAME \"b\"\n",
            "    ARGUMENTS\n",
            "      INTEGER \"1\"\n",
            "  INTEGER \"2\"\n",
        )
    );
}

#[test]
fn slices_record_present_bounds() {
    assert_eq!(dump("l[1:]"), "SLICE +SLICE_START\n  NAME \"l\"\n  INTEGER \"1\"\n");
    assert_eq!(dump("l[:2]"), "SLICE +SLICE_END\n  NAME \"l\"\n  INTEGER \"2\"\n");
    assert_eq!(dump("l[0:2]").lines().next(), Some("SLICE +SLICE_START +SLICE_END"));
    assert_eq!(dump("l[:]"), "SLICE\n  NAME \"l\"\n");
}

#[test]
fn literals() {
    assert_eq!(
        dump("[1, 'a', nil]"),
        "LIST\n  INTEGER \"1\"\n  STRING \"a\"\n  NIL \"nil\"\n"
    );
    assert_eq!(
        dump("{1 => true}"),
        "HASH\n  HASH_PAIR\n    INTEGER \"1\"\n    TRUE \"true\"\n"
    );
    assert_eq!(dump("{}"), "HASH\n");
}

#[test]
fn new_instance() {
    assert_eq!(
        dump("new Point(1, 2)"),
        "MAKE_INSTANCE \"Point\"\n  NAME \"Point\"\n  ARGUMENTS\n    INTEGER \"1\"\n    INTEGER \"2\"\n"
    );
}

#[test]
fn lists_may_span_lines() {
    assert_eq!(dump("[1,\n 2]"), "LIST\n  INTEGER \"1\"\n  INTEGER \"2\"\n");
}

#[test]
fn missing_operand() {
    assert_eq!(error("1 +"), "expected expression");
    assert_eq!(error("f(1"), "expected ')' to close call");
}
