//! Keyword table.

use crate::TokenKind;

pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "nil" => TokenKind::Nil,
        "def" => TokenKind::Def,
        "if" => TokenKind::If,
        "elif" => TokenKind::Elif,
        "else" => TokenKind::Else,
        "do" => TokenKind::Do,
        "then" => TokenKind::Then,
        "end" => TokenKind::End,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "in" => TokenKind::In,
        "return" => TokenKind::Return,
        "print" => TokenKind::Print,
        "continue" => TokenKind::Continue,
        "break" => TokenKind::Break,
        "import" => TokenKind::Import,
        "from" => TokenKind::From,
        "class" => TokenKind::Class,
        "extends" => TokenKind::Extends,
        "new" => TokenKind::New,
        "switch" => TokenKind::Switch,
        "case" => TokenKind::Case,
        "default" => TokenKind::Default,
        _ => return None,
    };
    Some(kind)
}
