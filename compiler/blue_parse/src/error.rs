//! Parse errors.

use std::sync::Arc;

use blue_lexer::{LexError, TokenKind};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("line {line}: {message}")]
    Syntax {
        message: String,
        line: u32,
        source_line: Arc<str>,
        /// The token the parser stopped at.
        found: TokenKind,
    },
}

impl ParseError {
    pub fn line(&self) -> u32 {
        match self {
            ParseError::Lex(err) => err.line,
            ParseError::Syntax { line, .. } => *line,
        }
    }

    pub fn source_line(&self) -> &str {
        match self {
            ParseError::Lex(err) => &err.source_line,
            ParseError::Syntax { source_line, .. } => source_line,
        }
    }

    /// The message without the line prefix.
    pub fn message(&self) -> String {
        match self {
            ParseError::Lex(err) => err.kind.to_string(),
            ParseError::Syntax { message, .. } => message.clone(),
        }
    }

    /// Whether more input could complete the unit (the parser ran off the end).
    pub fn is_incomplete(&self) -> bool {
        match self {
            ParseError::Lex(err) => matches!(
                err.kind,
                blue_lexer::LexErrorKind::UnterminatedString | blue_lexer::LexErrorKind::UnterminatedComment
            ),
            ParseError::Syntax { found, .. } => *found == TokenKind::Eof,
        }
    }
}
