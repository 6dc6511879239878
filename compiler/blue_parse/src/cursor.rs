//! Token cursor.

use std::sync::Arc;

use blue_ir::{Node, NodeKind};
use blue_lexer::{Token, TokenKind};
use tracing::trace;

use crate::ParseError;

pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// `tokens` must end with `Eof`, which `blue_lexer::tokenize` guarantees.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    #[inline]
    pub(crate) fn peek(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        trace!(kind = ?tok.kind, line = tok.line, "advance");
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    /// Consume `kind` if it is next.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.eat(TokenKind::Newline) {}
    }

    /// A syntax error at the current token.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        let tok = self.current();
        ParseError::Syntax {
            message: message.into(),
            line: tok.line,
            source_line: Arc::clone(&tok.line_text),
            found: tok.kind,
        }
    }

    /// A node positioned at the current token.
    pub(crate) fn node(&self, kind: NodeKind, text: impl Into<String>) -> Node {
        node_at(self.current(), kind, text)
    }
}

/// A node positioned at `tok`.
pub(crate) fn node_at(tok: &Token, kind: NodeKind, text: impl Into<String>) -> Node {
    Node::new(kind, text, tok.line, Arc::clone(&tok.line_text))
}
