//! Runtime values of the Blue interpreter.
//!
//! # Arc Enforcement Architecture
//!
//! Heap payloads are wrapped in [`Heap<T>`], whose constructor is private
//! to this module; everything else builds values through the `Value::`
//! factory methods:
//!
//! ```text
//! let s = Value::string("hello");             // OK
//! let l = Value::list(vec![Value::int(1)]);   // OK
//! let s = Value::Str(Heap::new(...));         // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Thread Safety
//!
//! Mutable payloads (lists, maps, member tables) sit behind `parking_lot`
//! locks, so values are `Send + Sync` and a loaded module can be shared by
//! evaluators on different threads.

mod file;
mod heap;
mod map;
mod objects;
mod scope;

use std::fmt;

use parking_lot::RwLock;

pub use file::{FileMode, FileObject, Stream};
pub use heap::Heap;
pub use map::{MapKey, MapStorage};
pub use objects::{
    BuiltinMethodObject, ClassBase, ClassObject, FunctionObject, InstanceObject, MethodObject,
    ModuleObject,
};
pub use scope::Scope;

use crate::builtin::BuiltinFunction;
use crate::types::{self, TypeObject};

/// Half-open integer range `start..end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeValue {
    pub start: i64,
    pub end: i64,
}

impl RangeValue {
    /// Number of integers in the range; empty when `end <= start`.
    pub fn len(self) -> usize {
        usize::try_from(self.end.saturating_sub(self.start)).unwrap_or(0)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Scalars
    Int(i64),
    Float(f64),
    Bool(bool),
    Nil,
    Range(RangeValue),

    // Containers
    Str(Heap<String>),
    List(Heap<RwLock<Vec<Value>>>),
    Map(Heap<RwLock<MapStorage>>),

    // Namespaces
    Module(Heap<ModuleObject>),
    Class(Heap<ClassObject>),
    Instance(Heap<InstanceObject>),

    File(Heap<FileObject>),

    // Callables
    Function(Heap<FunctionObject>),
    Method(Heap<MethodObject>),
    BuiltinFunction(&'static BuiltinFunction),
    BuiltinMethod(Heap<BuiltinMethodObject>),

    /// A builtin type descriptor used as a value (`int`, `list`, ...).
    Type(&'static TypeObject),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn range(start: i64, end: i64) -> Self {
        Value::Range(RangeValue { start, end })
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(RwLock::new(items)))
    }

    #[inline]
    pub fn map(storage: MapStorage) -> Self {
        Value::Map(Heap::new(RwLock::new(storage)))
    }

    pub fn module(name: impl Into<String>, path: impl Into<String>, members: Scope) -> Self {
        Value::Module(Heap::new(ModuleObject {
            name: name.into(),
            path: path.into(),
            members,
        }))
    }

    pub fn class(name: impl Into<String>, base: Option<ClassBase>) -> Self {
        Value::Class(Heap::new(ClassObject {
            name: name.into(),
            base,
            members: Scope::new(),
        }))
    }

    /// A fresh instance of `class` with no members.
    pub fn instance(class: Heap<ClassObject>) -> Self {
        Value::Instance(Heap::new(InstanceObject {
            class,
            members: Scope::new(),
        }))
    }

    pub fn file(name: impl Into<String>, mode: impl Into<String>, stream: Stream) -> Self {
        Value::File(Heap::new(FileObject::new(name.into(), mode.into(), stream)))
    }

    pub fn function(function: FunctionObject) -> Self {
        Value::Function(Heap::new(function))
    }

    pub fn method(
        function: Heap<FunctionObject>,
        class: Heap<ClassObject>,
        receiver: Option<Heap<InstanceObject>>,
    ) -> Self {
        Value::Method(Heap::new(MethodObject {
            function,
            class,
            receiver,
        }))
    }

    pub fn builtin_method(
        function: &'static BuiltinFunction,
        owner: &'static TypeObject,
        receiver: Option<Value>,
    ) -> Self {
        Value::BuiltinMethod(Heap::new(BuiltinMethodObject {
            function,
            owner,
            receiver,
        }))
    }
}

impl Value {
    /// The type descriptor every value carries.
    pub fn type_object(&self) -> &'static TypeObject {
        match self {
            Value::Int(_) => &types::INT,
            Value::Float(_) => &types::FLOAT,
            Value::Bool(_) => &types::BOOL,
            Value::Nil => &types::NIL,
            Value::Range(_) => &types::RANGE,
            Value::Str(_) => &types::STRING,
            Value::List(_) => &types::LIST,
            Value::Map(_) => &types::MAP,
            Value::Module(_) => &types::MODULE,
            Value::Class(_) => &types::CLASS,
            Value::Instance(_) => &types::INSTANCE,
            Value::File(_) => &types::FILE,
            Value::Function(_) => &types::FUNCTION,
            Value::Method(_) => &types::METHOD,
            Value::BuiltinFunction(_) => &types::BUILTIN_FUNCTION,
            Value::BuiltinMethod(_) => &types::BUILTIN_METHOD,
            Value::Type(_) => &types::TYPE,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_object().name()
    }

    /// Reference identity: the same heap object, the same static, or an
    /// equal scalar.
    pub fn is_same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Range(a), Value::Range(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => Heap::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Heap::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Heap::ptr_eq(a, b),
            (Value::Module(a), Value::Module(b)) => Heap::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Heap::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Heap::ptr_eq(a, b),
            (Value::File(a), Value::File(b)) => Heap::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Method(a), Value::Method(b)) => Heap::ptr_eq(a, b),
            (Value::BuiltinFunction(a), Value::BuiltinFunction(b)) => std::ptr::eq(*a, *b),
            (Value::BuiltinMethod(a), Value::BuiltinMethod(b)) => Heap::ptr_eq(a, b),
            (Value::Type(a), Value::Type(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Snapshot of a list's elements.
    pub fn list_items(&self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items.read().clone()),
            _ => None,
        }
    }

    /// Member table of a namespace value.
    pub fn members(&self) -> Option<&Scope> {
        match self {
            Value::Module(m) => Some(&m.members),
            Value::Class(c) => Some(&c.members),
            Value::Instance(i) => Some(&i.members),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// The user-visible representation, as `print` shows it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::dispatch::repr(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Nil => write!(f, "Nil"),
            Value::Range(r) => write!(f, "Range({}..{})", r.start, r.end),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::List(items) => write!(f, "List(len={})", items.read().len()),
            Value::Map(map) => write!(f, "Map(len={})", map.read().len()),
            Value::Module(m) => write!(f, "Module({})", m.name),
            Value::Class(c) => write!(f, "Class({})", c.name),
            Value::Instance(i) => write!(f, "Instance({})", i.class.name),
            Value::File(file) => write!(f, "File({})", file.name),
            Value::Function(func) => write!(f, "Function({})", func.name),
            Value::Method(m) => write!(f, "Method({}.{})", m.class.name, m.function.name),
            Value::BuiltinFunction(b) => write!(f, "BuiltinFunction({})", b.name),
            Value::BuiltinMethod(m) => {
                write!(f, "BuiltinMethod({}.{})", m.owner.name(), m.function.name)
            }
            Value::Type(t) => write!(f, "Type({})", t.name()),
        }
    }
}

#[cfg(test)]
mod tests;
