use super::{dump, error};
use crate::{parse, ParseMode};
use blue_ir::NodeKind;
use pretty_assertions::assert_eq;

#[test]
fn if_children_alternate_condition_and_block() {
    let out = dump("if a do x elif b do y else z end");
    assert_eq!(
        out,
        concat!(
            "IF\n",
            "  NAME \"a\"\n",
            "  BLOCK\n",
            "    NAME \"x\"\n",
            "  NAME \"b\"\n",
            "  BLOCK\n",
            "    NAME \"y\"\n",
            "  BLOCK\n",
            "    NAME \"z\"\n",
        )
    );
}

#[test]
fn single_line_if_else() {
    let root = parse("if 0 do print \"a\" else print \"b\" end", ParseMode::File).unwrap();
    let if_node = &root.children[0];
    assert_eq!(if_node.kind, NodeKind::If);
    assert_eq!(if_node.children.len(), 3);
}

#[test]
fn function_definition() {
    assert_eq!(
        dump("def f(a, *rest)\n  return a\nend"),
        concat!(
            "MAKE_FUNC\n",
            "  NAME \"f\"\n",
            "  PARAMETERS +STAR_PARAM\n",
            "    NAME \"a\"\n",
            "    NAME \"rest\"\n",
            "  BLOCK\n",
            "    RETURN\n",
            "      NAME \"a\"\n",
        )
    );
}

#[test]
fn star_parameter_must_be_last() {
    assert_eq!(error("def f(*a, b) end"), "star parameter must be the last param");
}

#[test]
fn class_with_base() {
    assert_eq!(
        dump("class B : A\n  def m(self) end\nend"),
        concat!(
            "MAKE_CLASS\n",
            "  NAME \"B\"\n",
            "  EXTENDS\n",
            "    NAME \"A\"\n",
            "  CLASS_BLOCK\n",
            "    MAKE_FUNC\n",
            "      NAME \"m\"\n",
            "      PARAMETERS\n",
            "        NAME \"self\"\n",
            "      BLOCK\n",
        )
    );
    assert_eq!(dump("class A extends B end"), dump("class A : B\nend"));
}

#[test]
fn loops() {
    assert_eq!(
        dump("while i < 3 do i += 1 end"),
        concat!(
            "WHILE\n",
            "  COMPARE <\n",
            "    NAME \"i\"\n",
            "    INTEGER \"3\"\n",
            "  BLOCK\n",
            "    AUGASSIGN +\n",
            "      NAME \"i\"\n",
            "      INTEGER \"1\"\n",
        )
    );
    assert_eq!(
        dump("for i, x in l do break end"),
        "FOR\n  ARGUMENTS\n    NAME \"i\"\n    NAME \"x\"\n  NAME \"l\"\n  BLOCK\n    BREAK\n"
    );
}

#[test]
fn import_paths() {
    assert_eq!(
        dump("import a.b, c"),
        "IMPORT\n  PATH\n    NAME \"a\"\n    NAME \"b\"\n  PATH\n    NAME \"c\"\n"
    );
}

#[test]
fn bare_return_before_end() {
    assert_eq!(
        dump("def f() return end"),
        "MAKE_FUNC\n  NAME \"f\"\n  PARAMETERS\n  BLOCK\n    RETURN\n"
    );
}

#[test]
fn assignment_targets() {
    assert_eq!(
        dump("a.b[0] = 1"),
        concat!(
            "ASSIGN\n",
            "  SUBSCRIPT\n",
            "    MEMBER \"b\"\n",
            "      NAME \"a\"\n",
            "      NAME \"b\"\n",
            "    INTEGER \"0\"\n",
            "  INTEGER \"1\"\n",
        )
    );
    assert_eq!(error("f() = 1"), "cannot assign to function call");
    assert_eq!(error("1 = 2"), "cannot assign to literal");
    assert_eq!(error("a + b = 2"), "cannot assign to operator");
    assert_eq!(error("l[1:2] += [3]"), "cannot assign to slice");
}

#[test]
fn statements_need_separators() {
    assert_eq!(error("a b"), "expected newline or ';' after statement");
    assert_eq!(dump("a; b").lines().count(), 2);
}

#[test]
fn missing_end_is_incomplete() {
    let err = parse("while true do\n  x = 1\n", ParseMode::Interactive).unwrap_err();
    assert!(err.is_incomplete());
    assert_eq!(err.message(), "expected 'end' to close block");
    let err = parse("x = )", ParseMode::Interactive).unwrap_err();
    assert!(!err.is_incomplete());
}

#[test]
fn reserved_keywords_are_rejected() {
    assert_eq!(error("switch x"), "'switch' is reserved");
}

#[test]
fn interactive_root() {
    let root = parse("1 + 1", ParseMode::Interactive).unwrap();
    assert_eq!(root.kind, NodeKind::Interactive);
    assert_eq!(root.children[0].line, 1);
}
