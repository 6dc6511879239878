//! Token definitions.

use std::fmt;
use std::sync::Arc;

/// Token kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals and names
    Name,
    Int,
    Float,
    Str,

    // Keywords
    True,
    False,
    Nil,
    Def,
    If,
    Elif,
    Else,
    Do,
    Then,
    End,
    For,
    While,
    In,
    Return,
    Print,
    Continue,
    Break,
    Import,
    From,
    Class,
    Extends,
    New,
    Switch,
    Case,
    Default,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,
    Shl,
    Shr,
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    NotEq,
    AndAnd,
    OrOr,
    Assign,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    DotDot,
    FatArrow,

    // Punctuation
    Dot,
    Comma,
    Colon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Structure
    Newline,
    Eof,
}

impl TokenKind {
    /// Human-readable description for parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Name => "name",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::Str => "string",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end-of-file",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Nil => "'nil'",
            TokenKind::Def => "'def'",
            TokenKind::If => "'if'",
            TokenKind::Elif => "'elif'",
            TokenKind::Else => "'else'",
            TokenKind::Do => "'do'",
            TokenKind::Then => "'then'",
            TokenKind::End => "'end'",
            TokenKind::For => "'for'",
            TokenKind::While => "'while'",
            TokenKind::In => "'in'",
            TokenKind::Return => "'return'",
            TokenKind::Print => "'print'",
            TokenKind::Continue => "'continue'",
            TokenKind::Break => "'break'",
            TokenKind::Import => "'import'",
            TokenKind::From => "'from'",
            TokenKind::Class => "'class'",
            TokenKind::Extends => "'extends'",
            TokenKind::New => "'new'",
            TokenKind::Switch => "'switch'",
            TokenKind::Case => "'case'",
            TokenKind::Default => "'default'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Amp => "'&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Caret => "'^'",
            TokenKind::Tilde => "'~'",
            TokenKind::Bang => "'!'",
            TokenKind::Shl => "'<<'",
            TokenKind::Shr => "'>>'",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::AndAnd => "'&&'",
            TokenKind::OrOr => "'||'",
            TokenKind::Assign => "'='",
            TokenKind::PlusEq => "'+='",
            TokenKind::MinusEq => "'-='",
            TokenKind::StarEq => "'*='",
            TokenKind::SlashEq => "'/='",
            TokenKind::PercentEq => "'%='",
            TokenKind::AmpEq => "'&='",
            TokenKind::PipeEq => "'|='",
            TokenKind::CaretEq => "'^='",
            TokenKind::ShlEq => "'<<='",
            TokenKind::ShrEq => "'>>='",
            TokenKind::DotDot => "'..'",
            TokenKind::FatArrow => "'=>'",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
        }
    }

    /// Tokens that open a block closed by `end`.
    pub fn opens_block(self) -> bool {
        matches!(
            self,
            TokenKind::Def | TokenKind::If | TokenKind::While | TokenKind::For | TokenKind::Class
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Names and number literals as written; string literals unescaped.
    pub text: String,
    pub line: u32,
    pub line_text: Arc<str>,
}
