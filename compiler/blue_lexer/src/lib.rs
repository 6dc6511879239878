//! Blue Lexer - turns source text into a flat token list.
//!
//! Newlines and `;` are significant (they separate statements) and come out
//! as [`TokenKind::Newline`]. Runs of separators collapse into one, and
//! separators inside `()`, `[]` and `{}` are dropped so that argument lists
//! and literals may span lines. The stream always ends with a `Newline`
//! followed by [`TokenKind::Eof`].

mod cursor;
mod escape;
mod keywords;
mod lex_error;
mod scanner;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind};

/// Tokenize a complete source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    scanner::Scanner::new(source).run()
}

#[cfg(test)]
mod tests;
