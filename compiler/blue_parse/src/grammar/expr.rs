//! Expression grammar, lowest precedence first:
//! `..`, `||`, `&&`, `== !=`, `< <= > >=`, `|`, `^`, `&`, `<< >>`, `+ -`,
//! `* / %`, unary `- ! ~`, then call/subscript/member trailers.

use blue_ir::{BinaryOp, CompareOp, NodeFlags, NodeKind, NodeRef};
use blue_lexer::TokenKind;
use blue_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Parser;
use crate::cursor::node_at;
use crate::ParseError;

pub(super) fn aug_assign_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::PipeEq => BinaryOp::BitOr,
        TokenKind::CaretEq => BinaryOp::BitXor,
        TokenKind::AmpEq => BinaryOp::BitAnd,
        TokenKind::ShlEq => BinaryOp::Shl,
        TokenKind::ShrEq => BinaryOp::Shr,
        TokenKind::PlusEq => BinaryOp::Add,
        TokenKind::MinusEq => BinaryOp::Sub,
        TokenKind::StarEq => BinaryOp::Mul,
        TokenKind::SlashEq => BinaryOp::Div,
        TokenKind::PercentEq => BinaryOp::Mod,
        _ => return None,
    };
    Some(op)
}

/// Binary operator levels above comparison, lowest precedence first.
const BINARY_LEVELS: &[&[(TokenKind, BinaryOp)]] = &[
    &[(TokenKind::Pipe, BinaryOp::BitOr)],
    &[(TokenKind::Caret, BinaryOp::BitXor)],
    &[(TokenKind::Amp, BinaryOp::BitAnd)],
    &[(TokenKind::Shl, BinaryOp::Shl), (TokenKind::Shr, BinaryOp::Shr)],
    &[(TokenKind::Plus, BinaryOp::Add), (TokenKind::Minus, BinaryOp::Sub)],
    &[
        (TokenKind::Star, BinaryOp::Mul),
        (TokenKind::Slash, BinaryOp::Div),
        (TokenKind::Percent, BinaryOp::Mod),
    ],
];

impl Parser {
    pub(super) fn expr(&mut self) -> Result<NodeRef, ParseError> {
        ensure_sufficient_stack(|| self.range_expr())
    }

    fn range_expr(&mut self) -> Result<NodeRef, ParseError> {
        let lo = self.or_expr()?;
        if self.cursor.check(TokenKind::DotDot) {
            let tok = self.cursor.advance();
            let hi = self.or_expr()?;
            return Ok(NodeRef::new(node_at(&tok, NodeKind::Range, "").with_child(lo).with_child(hi)));
        }
        Ok(lo)
    }

    fn or_expr(&mut self) -> Result<NodeRef, ParseError> {
        let mut lhs = self.and_expr()?;
        while self.cursor.check(TokenKind::OrOr) {
            let tok = self.cursor.advance();
            let rhs = self.and_expr()?;
            lhs = NodeRef::new(node_at(&tok, NodeKind::LogicalOr, "").with_child(lhs).with_child(rhs));
        }
        Ok(lhs)
    }

    fn and_expr(&mut self) -> Result<NodeRef, ParseError> {
        let mut lhs = self.equality_expr()?;
        while self.cursor.check(TokenKind::AndAnd) {
            let tok = self.cursor.advance();
            let rhs = self.equality_expr()?;
            lhs = NodeRef::new(node_at(&tok, NodeKind::LogicalAnd, "").with_child(lhs).with_child(rhs));
        }
        Ok(lhs)
    }

    fn equality_expr(&mut self) -> Result<NodeRef, ParseError> {
        let mut lhs = self.relational_expr()?;
        loop {
            let op = match self.cursor.peek() {
                TokenKind::EqEq => CompareOp::Eq,
                TokenKind::NotEq => CompareOp::NotEq,
                _ => return Ok(lhs),
            };
            let tok = self.cursor.advance();
            let rhs = self.relational_expr()?;
            lhs = NodeRef::new(node_at(&tok, NodeKind::Compare(op), "").with_child(lhs).with_child(rhs));
        }
    }

    fn relational_expr(&mut self) -> Result<NodeRef, ParseError> {
        let mut lhs = self.binary_expr(0)?;
        loop {
            let op = match self.cursor.peek() {
                TokenKind::Lt => CompareOp::Lt,
                TokenKind::LtEq => CompareOp::LtEq,
                TokenKind::Gt => CompareOp::Gt,
                TokenKind::GtEq => CompareOp::GtEq,
                _ => return Ok(lhs),
            };
            let tok = self.cursor.advance();
            let rhs = self.binary_expr(0)?;
            lhs = NodeRef::new(node_at(&tok, NodeKind::Compare(op), "").with_child(lhs).with_child(rhs));
        }
    }

    /// Left-associative binary operators at `BINARY_LEVELS[level]` and above.
    fn binary_expr(&mut self, level: usize) -> Result<NodeRef, ParseError> {
        let Some(ops) = BINARY_LEVELS.get(level) else {
            return self.unary_expr();
        };
        let mut lhs = self.binary_expr(level + 1)?;
        loop {
            let next = self.cursor.peek();
            let Some(&(_, op)) = ops.iter().find(|(kind, _)| *kind == next) else {
                return Ok(lhs);
            };
            let tok = self.cursor.advance();
            let rhs = self.binary_expr(level + 1)?;
            lhs = NodeRef::new(node_at(&tok, NodeKind::Binary(op), "").with_child(lhs).with_child(rhs));
        }
    }

    fn unary_expr(&mut self) -> Result<NodeRef, ParseError> {
        let kind = match self.cursor.peek() {
            TokenKind::Minus => NodeKind::Negate,
            TokenKind::Bang => NodeKind::Not,
            TokenKind::Tilde => NodeKind::Complement,
            _ => return self.postfix_expr(),
        };
        let tok = self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.unary_expr())?;
        Ok(NodeRef::new(node_at(&tok, kind, &tok.text).with_child(operand)))
    }

    fn postfix_expr(&mut self) -> Result<NodeRef, ParseError> {
        let mut expr = self.atom()?;
        loop {
            expr = match self.cursor.peek() {
                TokenKind::LParen => {
                    let tok = self.cursor.advance();
                    let args = self.arguments(TokenKind::RParen, "expected ')' to close call")?;
                    NodeRef::new(node_at(&tok, NodeKind::Call, "").with_child(expr).with_child(args))
                }
                TokenKind::LBracket => self.subscript(expr)?,
                TokenKind::Dot => {
                    let tok = self.cursor.advance();
                    let name = self.cursor.expect(TokenKind::Name, "expected name after '.'")?;
                    NodeRef::new(
                        node_at(&tok, NodeKind::Member, name.text.clone())
                            .with_child(expr)
                            .with_child(node_at(&name, NodeKind::Name, name.text.clone())),
                    )
                }
                _ => return Ok(expr),
            };
        }
    }

    /// `[key]` or `[start?:end?]`.
    fn subscript(&mut self, object: NodeRef) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let start = if self.cursor.check(TokenKind::Colon) {
            None
        } else {
            Some(self.expr()?)
        };
        if !self.cursor.eat(TokenKind::Colon) {
            self.cursor.expect(TokenKind::RBracket, "expected ']' to close subscript")?;
            let mut node = node_at(&tok, NodeKind::Subscript, "").with_child(object);
            if let Some(key) = start {
                node.push(key);
            }
            return Ok(NodeRef::new(node));
        }

        let mut node = node_at(&tok, NodeKind::Slice, "").with_child(object);
        if let Some(start) = start {
            node.flags |= NodeFlags::SLICE_START;
            node.push(start);
        }
        if !self.cursor.check(TokenKind::RBracket) {
            node.flags |= NodeFlags::SLICE_END;
            node.push(self.expr()?);
        }
        self.cursor.expect(TokenKind::RBracket, "expected ']' to close slice")?;
        Ok(NodeRef::new(node))
    }

    /// Comma-separated expressions up to `close`, collected under `Arguments`.
    fn arguments(&mut self, close: TokenKind, message: &str) -> Result<NodeRef, ParseError> {
        let mut args = self.cursor.node(NodeKind::Arguments, "");
        self.expression_list(&mut args, close)?;
        self.cursor.expect(close, message)?;
        Ok(NodeRef::new(args))
    }

    fn expression_list(&mut self, into: &mut blue_ir::Node, close: TokenKind) -> Result<(), ParseError> {
        while !self.cursor.check(close) {
            into.push(self.expr()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(())
    }

    fn atom(&mut self) -> Result<NodeRef, ParseError> {
        let kind = match self.cursor.peek() {
            TokenKind::Int => NodeKind::Integer,
            TokenKind::Float => NodeKind::Float,
            TokenKind::Str => NodeKind::String,
            TokenKind::True => NodeKind::True,
            TokenKind::False => NodeKind::False,
            TokenKind::Nil => NodeKind::Nil,
            TokenKind::Name => NodeKind::Name,
            TokenKind::LBracket => {
                let tok = self.cursor.advance();
                let mut list = node_at(&tok, NodeKind::List, "");
                self.expression_list(&mut list, TokenKind::RBracket)?;
                self.cursor.expect(TokenKind::RBracket, "expected ']' to close list literal")?;
                return Ok(NodeRef::new(list));
            }
            TokenKind::LBrace => return self.hash_literal(),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expr()?;
                self.cursor.expect(TokenKind::RParen, "expected ')' to close group")?;
                return Ok(inner);
            }
            TokenKind::New => return self.new_expr(),
            _ => return Err(self.cursor.error("expected expression")),
        };
        let tok = self.cursor.advance();
        trace!(?kind, text = %tok.text, "atom");
        Ok(NodeRef::new(node_at(&tok, kind, tok.text.clone())))
    }

    fn hash_literal(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let mut hash = node_at(&tok, NodeKind::Hash, "");
        while !self.cursor.check(TokenKind::RBrace) {
            let pair_tok = self.cursor.current().clone();
            let key = self.expr()?;
            self.cursor.expect(TokenKind::FatArrow, "expected '=>' between key and value")?;
            let value = self.expr()?;
            hash.push(node_at(&pair_tok, NodeKind::HashPair, "").with_child(key).with_child(value));
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace, "expected '}' to close hash literal")?;
        Ok(NodeRef::new(hash))
    }

    fn new_expr(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let name = self.cursor.expect(TokenKind::Name, "expected name after 'new'")?;
        self.cursor.expect(TokenKind::LParen, "expected '(' after class name")?;
        let args = self.arguments(TokenKind::RParen, "expected ')' to close argument list")?;
        Ok(NodeRef::new(
            node_at(&tok, NodeKind::MakeInstance, name.text.clone())
                .with_child(node_at(&name, NodeKind::Name, name.text.clone()))
                .with_child(args),
        ))
    }
}
