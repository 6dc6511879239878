//! Blue Parse - recursive-descent parser producing the `blue_ir` tree.
//!
//! The parser owns the child-position contract the evaluator relies on
//! (see the variant docs on [`blue_ir::NodeKind`]). Parsing stops at the
//! first error; there is no recovery, since both the file runner and the
//! REPL reject the whole unit anyway.

mod cursor;
mod error;
mod grammar;

use blue_ir::{NodeKind, NodeRef};

pub use error::ParseError;

/// What kind of unit is being parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// A whole file; root is `FileInput`.
    File,
    /// One REPL entry; root is `Interactive`.
    Interactive,
}

impl ParseMode {
    fn root_kind(self) -> NodeKind {
        match self {
            ParseMode::File => NodeKind::FileInput,
            ParseMode::Interactive => NodeKind::Interactive,
        }
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str, mode: ParseMode) -> Result<NodeRef, ParseError> {
    let tokens = blue_lexer::tokenize(source)?;
    tracing::trace!(tokens = tokens.len(), ?mode, "parsing");
    grammar::Parser::new(tokens).program(mode.root_kind())
}

#[cfg(test)]
mod tests;
