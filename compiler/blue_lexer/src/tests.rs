#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    tokenize(source).unwrap().into_iter().map(|t| t.text).collect()
}

#[test]
fn assignment_statement() {
    use TokenKind::*;
    assert_eq!(kinds("x = 1 + 2.5"), vec![Name, Assign, Int, Plus, Float, Newline, Eof]);
}

#[test]
fn keywords_and_names() {
    use TokenKind::*;
    assert_eq!(
        kinds("def f(a, *b) end"),
        vec![Def, Name, LParen, Name, Comma, Star, Name, RParen, End, Newline, Eof]
    );
    assert_eq!(kinds("class A : B"), vec![Class, Name, Colon, Name, Newline, Eof]);
}

#[test]
fn longest_operator_wins() {
    use TokenKind::*;
    assert_eq!(
        kinds("a <<= 1 >> 2 <= 3 .. 4 => !="),
        vec![Name, ShlEq, Int, Shr, Int, LtEq, Int, DotDot, Int, FatArrow, NotEq, Newline, Eof]
    );
}

#[test]
fn integer_range_is_not_a_float() {
    use TokenKind::*;
    assert_eq!(kinds("1..5"), vec![Int, DotDot, Int, Newline, Eof]);
    assert_eq!(texts("1..5")[..3], ["1", "..", "5"]);
}

#[test]
fn number_forms() {
    assert_eq!(texts("0xff 1e3 .5 1.25")[..4], ["0xff", "1e3", ".5", "1.25"]);
    let err = tokenize("12abc").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::MalformedNumber("12abc".to_string()));
}

#[test]
fn separators_collapse() {
    use TokenKind::*;
    assert_eq!(kinds("\n\na\n\n;b;\n"), vec![Name, Newline, Name, Newline, Eof]);
}

#[test]
fn newlines_inside_brackets_are_dropped() {
    use TokenKind::*;
    assert_eq!(
        kinds("f(1,\n 2)\n[3,\n4]"),
        vec![Name, LParen, Int, Comma, Int, RParen, Newline, LBracket, Int, Comma, Int, RBracket, Newline, Eof]
    );
}

#[test]
fn comments_are_skipped() {
    use TokenKind::*;
    assert_eq!(kinds("a # trailing\n=== long\ncomment === b"), vec![Name, Newline, Name, Newline, Eof]);
    let toks = tokenize("=== one\ntwo ===\nx").unwrap();
    assert_eq!(toks[0].line, 3);
}

#[test]
fn line_continuation_joins_lines() {
    use TokenKind::*;
    assert_eq!(kinds("a = 1 + \\\n 2"), vec![Name, Assign, Int, Plus, Int, Newline, Eof]);
}

#[test]
fn string_escapes() {
    let toks = tokenize(r#"'it\'s' "a\tb\n" "\x41" r"raw\n""#).unwrap();
    let strs: Vec<_> = toks.iter().filter(|t| t.kind == TokenKind::Str).map(|t| t.text.as_str()).collect();
    assert_eq!(strs, vec!["it's", "a\tb\n", "A", "raw\\n"]);
}

#[test]
fn string_errors() {
    assert_eq!(tokenize("'abc").unwrap_err().kind, LexErrorKind::UnterminatedString);
    assert_eq!(tokenize(r#""\q""#).unwrap_err().kind, LexErrorKind::InvalidEscape('q'));
    assert_eq!(tokenize(r#""\xZZ""#).unwrap_err().kind, LexErrorKind::InvalidHexEscape);
}

#[test]
fn tokens_carry_line_and_text() {
    let toks = tokenize("a = 1\nprint a").unwrap();
    let print = toks.iter().find(|t| t.kind == TokenKind::Print).unwrap();
    assert_eq!(print.line, 2);
    assert_eq!(&*print.line_text, "print a");
}

#[test]
fn unexpected_character() {
    let err = tokenize("a = $").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('$'));
    assert_eq!(err.to_string(), "line 1: unexpected character '$'");
}
