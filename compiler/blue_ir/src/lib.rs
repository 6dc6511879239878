//! Blue IR - the syntax tree handed from the parser to the evaluator.
//!
//! The tree is deliberately uniform: every node is a [`Node`] with a kind
//! tag, a text payload, its source line, and an ordered child list. The
//! meaning of each child position is fixed per [`NodeKind`] and documented
//! on the variant; the parser produces exactly that shape and the evaluator
//! indexes children by position.

mod literal;
mod node;
mod operators;

pub use literal::{parse_float_literal, parse_int_literal};
pub use node::{Node, NodeFlags, NodeKind, NodeRef};
pub use operators::{BinaryOp, CompareOp};
