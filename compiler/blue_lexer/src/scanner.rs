//! The scanning loop.

use std::sync::Arc;

use crate::cursor::Cursor;
use crate::escape::decode_escape;
use crate::{keywords, LexError, LexErrorKind, Token, TokenKind};

pub(crate) struct Scanner {
    cursor: Cursor,
    lines: Vec<Arc<str>>,
    line: u32,
    /// Open `(`, `[` and `{` count; separators inside are dropped.
    depth: u32,
    tokens: Vec<Token>,
}

/// Multi-character operators, longest first so the first match wins.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("<<=", TokenKind::ShlEq),
    (">>=", TokenKind::ShrEq),
    ("<<", TokenKind::Shl),
    (">>", TokenKind::Shr),
    ("<=", TokenKind::LtEq),
    (">=", TokenKind::GtEq),
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    ("+=", TokenKind::PlusEq),
    ("-=", TokenKind::MinusEq),
    ("*=", TokenKind::StarEq),
    ("/=", TokenKind::SlashEq),
    ("%=", TokenKind::PercentEq),
    ("&=", TokenKind::AmpEq),
    ("|=", TokenKind::PipeEq),
    ("^=", TokenKind::CaretEq),
    ("..", TokenKind::DotDot),
    ("=>", TokenKind::FatArrow),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("&", TokenKind::Amp),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("~", TokenKind::Tilde),
    ("!", TokenKind::Bang),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("=", TokenKind::Assign),
    (".", TokenKind::Dot),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
];

impl Scanner {
    pub(crate) fn new(source: &str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            lines: source.split('\n').map(|l| Arc::from(l.trim_end_matches('\r'))).collect(),
            line: 1,
            depth: 0,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.cursor.bump();
                }
                '\n' => {
                    self.cursor.bump();
                    self.separator();
                    self.line += 1;
                }
                ';' => {
                    self.cursor.bump();
                    self.separator();
                }
                '#' => {
                    self.cursor.take_while(|c| c != '\n');
                }
                '\\' if self.continues_line() => {}
                '=' if self.cursor.starts_with("===") => self.long_comment()?,
                '"' | '\'' => self.string(false)?,
                'r' if matches!(self.cursor.peek_nth(1), Some('"' | '\'')) => {
                    self.cursor.bump();
                    self.string(true)?;
                }
                c if c.is_ascii_digit() => self.number()?,
                '.' if self.cursor.peek_nth(1).is_some_and(|d| d.is_ascii_digit()) => self.number()?,
                c if c.is_alphabetic() || c == '_' => self.name(),
                _ => self.operator()?,
            }
        }
        self.separator_forced();
        self.push(TokenKind::Eof, String::new());
        Ok(self.tokens)
    }

    fn line_text(&self) -> Arc<str> {
        self.lines
            .get(self.line as usize - 1)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            line: self.line,
            source_line: self.line_text(),
        }
    }

    fn push(&mut self, kind: TokenKind, text: String) {
        let line_text = self.line_text();
        self.tokens.push(Token {
            kind,
            text,
            line: self.line,
            line_text,
        });
    }

    /// Emit a statement separator unless redundant.
    fn separator(&mut self) {
        if self.depth > 0 {
            return;
        }
        self.separator_forced();
    }

    fn separator_forced(&mut self) {
        match self.tokens.last() {
            None => {}
            Some(tok) if tok.kind == TokenKind::Newline => {}
            Some(_) => self.push(TokenKind::Newline, String::new()),
        }
    }

    /// `\` directly before a newline joins the two lines.
    fn continues_line(&mut self) -> bool {
        let joined = match (self.cursor.peek_nth(1), self.cursor.peek_nth(2)) {
            (Some('\n'), _) => 2,
            (Some('\r'), Some('\n')) => 3,
            _ => return false,
        };
        for _ in 0..joined {
            self.cursor.bump();
        }
        self.line += 1;
        true
    }

    fn long_comment(&mut self) -> Result<(), LexError> {
        let start_line = self.line;
        for _ in 0..3 {
            self.cursor.bump();
        }
        loop {
            if self.cursor.starts_with("===") {
                for _ in 0..3 {
                    self.cursor.bump();
                }
                return Ok(());
            }
            match self.cursor.bump() {
                Some('\n') => self.line += 1,
                Some(_) => {}
                None => {
                    self.line = start_line;
                    return Err(self.error(LexErrorKind::UnterminatedComment));
                }
            }
        }
    }

    fn string(&mut self, raw: bool) -> Result<(), LexError> {
        let start_line = self.line;
        let Some(quote) = self.cursor.bump() else {
            return Err(self.error(LexErrorKind::UnterminatedString));
        };
        let mut text = String::new();
        loop {
            match self.cursor.bump() {
                None => {
                    self.line = start_line;
                    return Err(self.error(LexErrorKind::UnterminatedString));
                }
                Some(c) if c == quote => break,
                Some('\\') if !raw => {
                    let decoded = decode_escape(&mut self.cursor).map_err(|kind| self.error(kind))?;
                    text.push(decoded);
                }
                Some('\n') => {
                    self.line += 1;
                    text.push('\n');
                }
                Some(c) => text.push(c),
            }
        }
        let line = self.line;
        self.line = start_line;
        self.push(TokenKind::Str, text);
        self.line = line;
        Ok(())
    }

    fn number(&mut self) -> Result<(), LexError> {
        if self.cursor.starts_with("0x") || self.cursor.starts_with("0X") {
            let mut text: String = [self.cursor.bump(), self.cursor.bump()].into_iter().flatten().collect();
            let digits = self.cursor.take_while(|c| c.is_ascii_hexdigit() || c == '_');
            text.push_str(&digits);
            if digits.is_empty() {
                return Err(self.error(LexErrorKind::MalformedNumber(text)));
            }
            self.push(TokenKind::Int, text);
            return Ok(());
        }

        let mut text = self.cursor.take_while(|c| c.is_ascii_digit() || c == '_');
        let mut kind = TokenKind::Int;
        // `1..5` is a range, not the float `1.` followed by `.5`.
        if self.cursor.peek() == Some('.') && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.bump();
            text.push('.');
            text.push_str(&self.cursor.take_while(|c| c.is_ascii_digit() || c == '_'));
            kind = TokenKind::Float;
        }
        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            let sign = usize::from(matches!(self.cursor.peek_nth(1), Some('+' | '-')));
            if self.cursor.peek_nth(1 + sign).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..=sign {
                    if let Some(c) = self.cursor.bump() {
                        text.push(c);
                    }
                }
                text.push_str(&self.cursor.take_while(|c| c.is_ascii_digit()));
                kind = TokenKind::Float;
            }
        }
        if self.cursor.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
            text.push_str(&self.cursor.take_while(|c| c.is_alphanumeric() || c == '_'));
            return Err(self.error(LexErrorKind::MalformedNumber(text)));
        }
        self.push(kind, text);
        Ok(())
    }

    fn name(&mut self) {
        let text = self.cursor.take_while(|c| c.is_alphanumeric() || c == '_');
        let kind = keywords::lookup(&text).unwrap_or(TokenKind::Name);
        self.push(kind, text);
    }

    fn operator(&mut self) -> Result<(), LexError> {
        let Some(&(symbol, kind)) = OPERATORS.iter().find(|(sym, _)| self.cursor.starts_with(sym)) else {
            let c = self.cursor.peek().unwrap_or('\0');
            return Err(self.error(LexErrorKind::UnexpectedChar(c)));
        };
        for _ in 0..symbol.len() {
            self.cursor.bump();
        }
        match kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => self.depth += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                self.depth = self.depth.saturating_sub(1);
            }
            _ => {}
        }
        self.push(kind, symbol.to_string());
        Ok(())
    }
}
