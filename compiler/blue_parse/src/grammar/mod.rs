//! Statement grammar.

mod expr;

use blue_ir::{NodeFlags, NodeKind, NodeRef};
use blue_lexer::{Token, TokenKind};
use blue_stack::ensure_sufficient_stack;

use crate::cursor::{node_at, Cursor};
use crate::ParseError;

pub(crate) struct Parser {
    cursor: Cursor,
}

/// Tokens that end a statement list without being part of it.
fn block_follows(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::End | TokenKind::Elif | TokenKind::Else | TokenKind::Eof)
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    pub(crate) fn program(mut self, root: NodeKind) -> Result<NodeRef, ParseError> {
        let mut node = self.cursor.node(root, "");
        self.cursor.skip_newlines();
        while !self.cursor.check(TokenKind::Eof) {
            node.push(self.statement()?);
            if !self.cursor.check(TokenKind::Eof) {
                self.cursor.expect(TokenKind::Newline, "expected newline or ';' after statement")?;
                self.cursor.skip_newlines();
            }
        }
        Ok(NodeRef::new(node))
    }

    /// Statements up to (not including) `end`, `elif`, `else` or end of input.
    fn statements(&mut self, kind: NodeKind) -> Result<NodeRef, ParseError> {
        let mut block = self.cursor.node(kind, "");
        self.cursor.skip_newlines();
        while !block_follows(self.cursor.peek()) {
            block.push(self.statement()?);
            if !block_follows(self.cursor.peek()) {
                self.cursor.expect(TokenKind::Newline, "expected newline or ';' after statement")?;
                self.cursor.skip_newlines();
            }
        }
        Ok(NodeRef::new(block))
    }

    fn block(&mut self) -> Result<NodeRef, ParseError> {
        self.statements(NodeKind::Block)
    }

    fn statement(&mut self) -> Result<NodeRef, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.peek() {
            TokenKind::Class => self.class_stmt(),
            TokenKind::Def => self.def_stmt(),
            TokenKind::While => self.while_stmt(),
            TokenKind::For => self.for_stmt(),
            TokenKind::If => self.if_stmt(),
            TokenKind::Return => self.return_stmt(),
            TokenKind::Import => self.import_stmt(),
            TokenKind::Break => Ok(NodeRef::new(node_at(&self.cursor.advance(), NodeKind::Break, ""))),
            TokenKind::Continue => Ok(NodeRef::new(node_at(&self.cursor.advance(), NodeKind::Continue, ""))),
            TokenKind::Print => {
                let tok = self.cursor.advance();
                let value = self.expr()?;
                Ok(NodeRef::new(node_at(&tok, NodeKind::Print, "").with_child(value)))
            }
            TokenKind::Switch | TokenKind::Case | TokenKind::Default | TokenKind::From => {
                Err(self.cursor.error(format!("{} is reserved", self.cursor.peek())))
            }
            _ => self.expr_stmt(),
        })
    }

    fn class_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let mut class = node_at(&tok, NodeKind::MakeClass, "");
        let name = self.cursor.expect(TokenKind::Name, "expected name after 'class'")?;
        class.push(node_at(&name, NodeKind::Name, name.text.clone()));

        let mut extends = self.cursor.node(NodeKind::Extends, "");
        if self.cursor.eat(TokenKind::Colon) || self.cursor.eat(TokenKind::Extends) {
            let base = self.cursor.expect(TokenKind::Name, "expected base class name")?;
            extends.push(node_at(&base, NodeKind::Name, base.text.clone()));
        }
        class.push(extends);
        class.push(self.statements(NodeKind::ClassBlock)?);
        self.cursor.expect(TokenKind::End, "expected 'end' to close class")?;
        Ok(NodeRef::new(class))
    }

    fn def_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let mut func = node_at(&tok, NodeKind::MakeFunc, "");
        let name = self.cursor.expect(TokenKind::Name, "expected name after 'def'")?;
        func.push(node_at(&name, NodeKind::Name, name.text.clone()));

        self.cursor.expect(TokenKind::LParen, "expected '(' to open parameter list")?;
        let mut params = self.cursor.node(NodeKind::Parameters, "");
        while !self.cursor.check(TokenKind::RParen) {
            if params.has_flag(NodeFlags::STAR_PARAM) {
                return Err(self.cursor.error("star parameter must be the last param"));
            }
            if self.cursor.eat(TokenKind::Star) {
                params.flags |= NodeFlags::STAR_PARAM;
            }
            let param = self.cursor.expect(TokenKind::Name, "expected name as parameter")?;
            params.push(node_at(&param, NodeKind::Name, param.text.clone()));
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen, "expected ')' to close parameter list")?;
        func.push(params);

        self.cursor.eat(TokenKind::Do);
        func.push(self.block()?);
        self.cursor.expect(TokenKind::End, "expected 'end' to close function")?;
        Ok(NodeRef::new(func))
    }

    fn while_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let cond = self.expr()?;
        self.cursor.expect(TokenKind::Do, "expected 'do' to open block")?;
        let body = self.block()?;
        self.cursor.expect(TokenKind::End, "expected 'end' to close block")?;
        Ok(NodeRef::new(node_at(&tok, NodeKind::While, "").with_child(cond).with_child(body)))
    }

    fn for_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let mut names = self.cursor.node(NodeKind::Arguments, "");
        for _ in 0..2 {
            let name = self.cursor.expect(TokenKind::Name, "expected name")?;
            names.push(node_at(&name, NodeKind::Name, name.text.clone()));
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::In, "expected 'in'")?;
        let iterable = self.expr()?;
        self.cursor.expect(TokenKind::Do, "expected 'do' to open block")?;
        let body = self.block()?;
        self.cursor.expect(TokenKind::End, "expected 'end' to close block")?;
        Ok(NodeRef::new(
            node_at(&tok, NodeKind::For, "")
                .with_child(names)
                .with_child(iterable)
                .with_child(body),
        ))
    }

    fn open_branch(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::Do) || self.cursor.eat(TokenKind::Then) {
            Ok(())
        } else {
            Err(self.cursor.error("expected 'do' to open block"))
        }
    }

    fn if_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let mut node = node_at(&tok, NodeKind::If, "");
        node.push(self.expr()?);
        self.open_branch()?;
        node.push(self.block()?);
        while self.cursor.eat(TokenKind::Elif) {
            node.push(self.expr()?);
            self.open_branch()?;
            node.push(self.block()?);
        }
        if self.cursor.eat(TokenKind::Else) {
            node.push(self.block()?);
        }
        self.cursor.expect(TokenKind::End, "expected 'end' to close block")?;
        Ok(NodeRef::new(node))
    }

    fn return_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let mut node = node_at(&tok, NodeKind::Return, "");
        let kind = self.cursor.peek();
        if kind != TokenKind::Newline && !block_follows(kind) {
            node.push(self.expr()?);
        }
        Ok(NodeRef::new(node))
    }

    fn import_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let tok = self.cursor.advance();
        let mut node = node_at(&tok, NodeKind::Import, "");
        loop {
            let mut path = self.cursor.node(NodeKind::Path, "");
            loop {
                let part = self.cursor.expect(TokenKind::Name, "expected name")?;
                path.push(node_at(&part, NodeKind::Name, part.text.clone()));
                if !self.cursor.eat(TokenKind::Dot) {
                    break;
                }
            }
            node.push(path);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(NodeRef::new(node))
    }

    fn expr_stmt(&mut self) -> Result<NodeRef, ParseError> {
        let start = self.cursor.current().clone();
        let target = self.expr()?;
        let kind = match self.cursor.peek() {
            TokenKind::Assign => NodeKind::Assign,
            other => match expr::aug_assign_op(other) {
                Some(op) => NodeKind::AugAssign(op),
                None => return Ok(target),
            },
        };
        self.check_target(&target, kind)?;
        self.cursor.advance();
        let value = self.expr()?;
        Ok(NodeRef::new(node_at(&start, kind, "").with_child(target).with_child(value)))
    }

    fn check_target(&self, target: &NodeRef, kind: NodeKind) -> Result<(), ParseError> {
        let what = match target.kind {
            NodeKind::Name | NodeKind::Member | NodeKind::Subscript => return Ok(()),
            NodeKind::Slice if kind == NodeKind::Assign => return Ok(()),
            NodeKind::Slice => "slice",
            NodeKind::List => "list",
            NodeKind::Hash => "hash",
            NodeKind::Call => "function call",
            NodeKind::MakeInstance => "constructor",
            NodeKind::String
            | NodeKind::Integer
            | NodeKind::Float
            | NodeKind::True
            | NodeKind::False
            | NodeKind::Nil => "literal",
            _ => "operator",
        };
        Err(self.cursor.error(format!("cannot assign to {what}")))
    }
}
