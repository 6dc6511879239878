//! The uniform syntax tree node.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use bitflags::bitflags;

use crate::{BinaryOp, CompareOp};

/// Shared handle to a node.
///
/// Function objects keep their body alive after the parse tree that produced
/// them is dropped (e.g. a function defined in one REPL line and called in
/// the next), so subtrees are reference counted.
pub type NodeRef = Arc<Node>;

bitflags! {
    /// Per-node flags refining a kind without adding children.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// On `Parameters`: the last name collects extra arguments.
        const STAR_PARAM = 1 << 0;
        /// On `Slice`: a start bound child is present.
        const SLICE_START = 1 << 1;
        /// On `Slice`: an end bound child is present.
        const SLICE_END = 1 << 2;
    }
}

/// Node kind. The doc on each variant is the child-position contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Units of work
    /// Whole file: statements.
    FileInput,
    /// One REPL entry: statements; bare expression values are printed.
    Interactive,
    /// Statement list of a function, loop or branch.
    Block,
    /// Statement list of a class body.
    ClassBlock,

    // Declarations
    /// `[Name, Extends, ClassBlock]`.
    MakeClass,
    /// `[Name?]`: the base class, if any.
    Extends,
    /// `[Name, Parameters, Block]`.
    MakeFunc,
    /// `Name*`; with `STAR_PARAM` the last name is variadic.
    Parameters,
    /// `Path*`.
    Import,
    /// `Name+`: one dotted import path.
    Path,

    // Statements
    /// `[cond, Block]*` followed by an optional else `Block`.
    If,
    /// `[cond, Block]`.
    While,
    /// `[Arguments(Name, Name?), iterable, Block]`.
    For,
    /// `[value?]`.
    Return,
    Break,
    Continue,
    /// `[value]`.
    Print,
    /// `[target, value]`; target is `Name`, `Member` or `Subscript`.
    Assign,
    /// `[target, value]`.
    AugAssign(BinaryOp),

    // Expressions
    /// `[lhs, rhs]`; yields a Bool.
    LogicalAnd,
    /// `[lhs, rhs]`; yields a Bool.
    LogicalOr,
    /// `[operand]`.
    Not,
    /// `[operand]`.
    Negate,
    /// `[operand]`.
    Complement,
    /// `[lhs, rhs]`.
    Binary(BinaryOp),
    /// `[lhs, rhs]`.
    Compare(CompareOp),
    /// `[lo, hi]`.
    Range,
    /// Identifier; `text` is the name.
    Name,
    /// `[object, Name]`.
    Member,
    /// `[object, key]`.
    Subscript,
    /// `[object, start?, end?]`, presence given by `SLICE_START`/`SLICE_END`.
    Slice,
    /// `[callee, Arguments]`.
    Call,
    /// `[Name, Arguments]`: `new Name(args)`.
    MakeInstance,
    /// Argument expressions, or loop variable names under `For`.
    Arguments,
    /// Element expressions.
    List,
    /// `HashPair*`.
    Hash,
    /// `[key, value]`.
    HashPair,

    // Literals; `text` holds the literal as written (strings already unescaped)
    String,
    Integer,
    Float,
    True,
    False,
    Nil,
}

impl NodeKind {
    /// Short upper-case label used by [`Node::dump`].
    pub fn label(self) -> String {
        match self {
            NodeKind::AugAssign(op) => format!("AUGASSIGN {op}"),
            NodeKind::Binary(op) => format!("BINARY {op}"),
            NodeKind::Compare(op) => format!("COMPARE {op}"),
            other => {
                let mut out = String::new();
                for (i, ch) in format!("{other:?}").chars().enumerate() {
                    if ch.is_ascii_uppercase() && i > 0 {
                        out.push('_');
                    }
                    out.push(ch.to_ascii_uppercase());
                }
                out
            }
        }
    }
}

/// A syntax tree node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Name or literal payload; empty for structural nodes.
    pub text: String,
    /// 1-based source line.
    pub line: u32,
    /// The full text of that source line, for traces.
    pub source_line: Arc<str>,
    pub flags: NodeFlags,
    pub children: Vec<NodeRef>,
}

impl Node {
    pub fn new(kind: NodeKind, text: impl Into<String>, line: u32, source_line: Arc<str>) -> Self {
        Node {
            kind,
            text: text.into(),
            line,
            source_line,
            flags: NodeFlags::empty(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<NodeRef>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push(&mut self, child: impl Into<NodeRef>) {
        self.children.push(child.into());
    }

    /// Child at `index`.
    ///
    /// # Panics
    ///
    /// Panics when the node does not have the child its kind promises. The
    /// parser guarantees the shape, so this only fires on malformed trees
    /// built by hand.
    #[inline]
    pub fn child(&self, index: usize) -> &NodeRef {
        &self.children[index]
    }

    pub fn has_flag(&self, flag: NodeFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Indented dump of the tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let _ = write!(out, "{:indent$}{}", "", self.kind.label(), indent = depth * 2);
        if !self.text.is_empty() {
            let _ = write!(out, " {:?}", self.text);
        }
        for (name, _) in self.flags.iter_names() {
            let _ = write!(out, " +{name}");
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(out, depth + 1);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
