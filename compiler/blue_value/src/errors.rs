//! Error types for evaluation.
//!
//! Every failure a Blue program can cause travels as the `Err` arm of
//! [`EvalResult`]. Factory functions (e.g. [`int_division_by_zero`]) are the
//! public API: they pick the [`EvalErrorKind`] and produce the exact message
//! text users see. The evaluator adds one [`TraceFrame`] per frame the error
//! crosses on its way out, so the rendered error reads innermost first.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Result of evaluating an expression or calling a builtin.
pub type EvalResult = Result<Value, EvalError>;

/// Category of an evaluation error.
///
/// `Exit` is not a failure of the program: it carries the status requested
/// through `system.exit` out to the process entry point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Operation unsupported by the operand's type, or wrong concrete type.
    Type,
    /// Wrong argument or parameter count.
    Arity,
    /// Index, slice or key outside the container.
    Range,
    /// Unknown variable, member or module.
    Resolution,
    /// `return`/`break`/`continue` outside their construct.
    ControlFlow,
    /// Division or modulo by zero, literal overflow.
    Arithmetic,
    /// A container would exceed its size limit.
    Limit,
    /// Source text rejected by the lexer or parser.
    Syntax,
    /// Host I/O failed.
    Io,
    /// Script asked the process to exit with this status.
    Exit(i32),
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type error"),
            Self::Arity => write!(f, "arity error"),
            Self::Range => write!(f, "range error"),
            Self::Resolution => write!(f, "resolution error"),
            Self::ControlFlow => write!(f, "control flow error"),
            Self::Arithmetic => write!(f, "arithmetic error"),
            Self::Limit => write!(f, "size limit error"),
            Self::Syntax => write!(f, "syntax error"),
            Self::Io => write!(f, "i/o error"),
            Self::Exit(code) => write!(f, "exit({code})"),
        }
    }
}

/// One frame of the trace printed with an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceFrame {
    pub path: Arc<str>,
    pub line: u32,
    pub source_line: Arc<str>,
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in {}:{}\n   {}",
            self.path,
            self.line,
            self.source_line.trim()
        )
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message, exactly as shown to the user.
    pub message: String,
    /// Frames the error unwound through, innermost first.
    pub trace: Vec<TraceFrame>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            message: message.into(),
            trace: Vec::new(),
        }
    }

    /// Record that the error left the frame executing `line` of `path`.
    #[must_use]
    pub fn with_frame(mut self, path: Arc<str>, line: u32, source_line: Arc<str>) -> Self {
        self.trace.push(TraceFrame {
            path,
            line,
            source_line,
        });
        self
    }

    /// Exit status requested by the script, if this is an exit request.
    pub fn exit_code(&self) -> Option<i32> {
        match self.kind {
            EvalErrorKind::Exit(code) => Some(code),
            _ => None,
        }
    }

    /// The trace followed by the message, as printed by the CLI and REPL.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for frame in &self.trace {
            out.push_str(&frame.to_string());
            out.push('\n');
        }
        out.push_str(&self.message);
        out
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Member access

#[cold]
pub fn no_members(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("cannot retrieve members from the '{type_name}' object"),
    )
}

#[cold]
pub fn cannot_set_members(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("cannot set members on the '{type_name}' object"),
    )
}

/// `owner` is a type name, a class name, or `module`.
#[cold]
pub fn no_such_member(owner: &str, name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Resolution,
        format!("'{owner}' object has no member '{name}'"),
    )
}

#[cold]
pub fn init_must_be_function() -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        "'__init__' must be a blue function or blue method",
    )
}

// Indexing

#[cold]
pub fn not_subscriptable(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' object is not subscriptable"),
    )
}

#[cold]
pub fn item_assignment_unsupported(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' object does not support item assignment"),
    )
}

#[cold]
pub fn not_sliceable(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' object does not support slicing"),
    )
}

#[cold]
pub fn indices_must_be_integers(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' indices must be integers"),
    )
}

#[cold]
pub fn subscript_out_of_bounds() -> EvalError {
    EvalError::new(EvalErrorKind::Range, "subscript position out of bounds")
}

#[cold]
pub fn position_out_of_bounds() -> EvalError {
    EvalError::new(EvalErrorKind::Range, "position out of bounds")
}

#[cold]
pub fn key_not_found() -> EvalError {
    EvalError::new(EvalErrorKind::Range, "key not found")
}

#[cold]
pub fn unhashable_key(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' object cannot be used as a key"),
    )
}

#[cold]
pub fn bit_value_not_binary() -> EvalError {
    EvalError::new(EvalErrorKind::Type, "value must be either 1 or 0")
}

#[cold]
pub fn bit_value_not_integer() -> EvalError {
    EvalError::new(EvalErrorKind::Type, "value must be an integer")
}

// Operators

#[cold]
pub fn bad_operand_type(op: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("bad operand type for '{op}'"),
    )
}

#[cold]
pub fn bad_operand_types(op: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("bad operand types for '{op}'"),
    )
}

#[cold]
pub fn cannot_order(left: &str, right: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("types cannot be ordered, '{left}' and '{right}'"),
    )
}

#[cold]
pub fn int_division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::Arithmetic, "int division by zero")
}

#[cold]
pub fn int_modulo_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::Arithmetic, "int modulo by zero")
}

#[cold]
pub fn float_division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::Arithmetic, "float division by zero")
}

#[cold]
pub fn float_modulo_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::Arithmetic, "float modulo by zero")
}

#[cold]
pub fn number_overflow() -> EvalError {
    EvalError::new(EvalErrorKind::Arithmetic, "number overflow")
}

#[cold]
pub fn range_requires_integers() -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        "types of the range construct must be integers",
    )
}

// Sequences

#[cold]
pub fn non_integer_repeat() -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        "cant multiply sequence with non-integer",
    )
}

/// `target` is the sequence type being extended (`string` or `list`).
#[cold]
pub fn cannot_concat(type_name: &str, target: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("cannot add '{type_name}' to {target}"),
    )
}

#[cold]
pub fn list_too_large() -> EvalError {
    EvalError::new(EvalErrorKind::Limit, "repeated list became too large")
}

#[cold]
pub fn string_too_large() -> EvalError {
    EvalError::new(EvalErrorKind::Limit, "repeated string became too large")
}

#[cold]
pub fn not_iterable(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' object is not iterable"),
    )
}

#[cold]
pub fn has_no_len(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("object of type '{type_name}' has no len()"),
    )
}

#[cold]
pub fn pop_from_empty() -> EvalError {
    EvalError::new(EvalErrorKind::Range, "pop from empty list")
}

// Calls

#[cold]
pub fn argument_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::Arity,
        format!("argument mismatch. Expected ({expected}), got ({got})"),
    )
}

#[cold]
pub fn takes_no_arguments(name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Arity,
        format!("{name}() takes no arguments"),
    )
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' object is not callable"),
    )
}

#[cold]
pub fn receiver_required(method: &str, type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("method '{method}' requires a '{type_name}' object as receiver"),
    )
}

#[cold]
pub fn missing_init(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("'{type_name}' object is missing init function"),
    )
}

#[cold]
pub fn cannot_instantiate(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("cannot create an instance from the '{type_name}' object"),
    )
}

#[cold]
pub fn invalid_base(type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Type,
        format!("cannot extend the '{type_name}' object"),
    )
}

/// Argument had the wrong type; `expected` names it (`int object`, `number`, ...).
#[cold]
pub fn expected(what: &str) -> EvalError {
    EvalError::new(EvalErrorKind::Type, format!("expected {what}"))
}

// Names and control flow

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Resolution,
        format!("failed to resolve variable '{name}'"),
    )
}

#[cold]
pub fn module_not_found(dotted: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Resolution,
        format!("failed to load module '{dotted}'"),
    )
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::new(EvalErrorKind::ControlFlow, "return outside function")
}

#[cold]
pub fn break_outside_loop() -> EvalError {
    EvalError::new(EvalErrorKind::ControlFlow, "break outside loop")
}

#[cold]
pub fn continue_outside_loop() -> EvalError {
    EvalError::new(EvalErrorKind::ControlFlow, "continue outside loop")
}

#[cold]
pub fn exit_requested(code: i32) -> EvalError {
    EvalError::new(EvalErrorKind::Exit(code), format!("exit({code})"))
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::Limit,
        format!("maximum recursion depth exceeded ({limit})"),
    )
}

#[cold]
pub fn syntax_error(message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::Syntax, message)
}

#[cold]
pub fn file_closed() -> EvalError {
    EvalError::new(EvalErrorKind::Io, "operation on closed file")
}

#[cold]
pub fn unknown_file_mode(c: char) -> EvalError {
    EvalError::new(EvalErrorKind::Type, format!("unrecognized file mode char '{c}'"))
}

#[cold]
pub fn io_error(err: &std::io::Error) -> EvalError {
    EvalError::new(EvalErrorKind::Io, err.to_string())
}

#[cfg(test)]
mod tests;
