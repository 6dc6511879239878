//! Blue Value - value model and protocol dispatch for the Blue interpreter.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime value enum; heap payloads are built only through
//!   `Value::` factories
//! - [`TypeObject`]: one static descriptor per type, offering capabilities
//!   (numbers, sequence, mapping, member access, ...) as protocol traits
//! - [`dispatch`]: the helpers the evaluator calls; they turn a missing
//!   capability into the user-facing error
//! - [`BuiltinFunction`] and [`parse_args`]: the native call convention

mod args;
mod builtin;
pub mod dispatch;
pub mod errors;
pub mod types;
mod value;

pub use args::{parse_args, Args};
pub use builtin::{register, Arity, BuiltinFn, BuiltinFunction, FieldDescriptor, FieldValue};
pub use errors::{EvalError, EvalErrorKind, EvalResult, TraceFrame};
pub use types::{lookup_in_class, Assigned, TypeKind, TypeObject, INIT};
pub use value::{
    BuiltinMethodObject, ClassBase, ClassObject, FileMode, FileObject, FunctionObject, Heap,
    InstanceObject, MapKey, MapStorage, MethodObject, ModuleObject, RangeValue, Scope, Stream,
    Value,
};

/// Largest string, in bytes, that repetition may produce.
pub const STRING_MAX: usize = 0x00ff_ffff;

/// Largest list, in elements, that repetition may produce.
pub const LIST_MAX: usize = 0x00ff_ffff;
