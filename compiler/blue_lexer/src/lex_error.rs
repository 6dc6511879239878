//! Lexer errors.

use std::sync::Arc;

use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("expected two hex digits after '\\x'")]
    InvalidHexEscape,
    #[error("unterminated long comment")]
    UnterminatedComment,
    #[error("malformed number '{0}'")]
    MalformedNumber(String),
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

/// A scan error with the line it occurred on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub source_line: Arc<str>,
}
