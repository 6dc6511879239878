//! Type descriptors and the per-capability protocol traits.
//!
//! Every value has exactly one [`TypeObject`], a process-wide static. A type
//! offers a capability by returning an implementation from the matching
//! accessor (`numbers`, `sequence`, ...); `None` means the type does not
//! support that family of operations at all. Within a protocol, a single
//! operation the type lacks returns `None` from its default trait method
//! (see [`Slot`]).
//!
//! The dispatch helpers in [`crate::dispatch`] are the only intended callers
//! of these traits; they turn a missing capability into the user-facing
//! error message.

mod boolean;
mod callable;
mod class;
mod cycle;
mod file;
mod float;
mod int;
mod list;
mod map;
mod module;
mod nil;
mod range;
mod string;
mod type_type;

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use blue_ir::BinaryOp;
use rustc_hash::FxHashMap;

use crate::builtin::{BuiltinFunction, FieldDescriptor};
use crate::errors::{EvalError, EvalResult};
use crate::value::Value;

pub use class::{lookup_in_class, INIT};

/// Outcome of an optional protocol operation: `None` when the type does not
/// implement it.
pub type Slot<T = Value> = Option<Result<T, EvalError>>;

/// Result of an item or slice store.
#[derive(Clone, Debug)]
pub enum Assigned {
    /// The container was mutated.
    InPlace,
    /// The container is a value type; the target must be rebound to this.
    Replaced(Value),
}

/// Unary and binary arithmetic.
pub trait Numeric: Sync {
    fn negate(&self, _operand: &Value) -> Slot {
        None
    }

    fn complement(&self, _operand: &Value) -> Slot {
        None
    }

    /// Both operands have this type (after coercion).
    fn binary(&self, op: BinaryOp, left: &Value, right: &Value) -> Slot;

    /// Convert `other` into this type, if this type knows how.
    fn coerce(&self, _other: &Value) -> Option<Value> {
        None
    }
}

/// Indexed containers. Indices reaching the slots are already normalized;
/// the slot still enforces its own upper bound.
pub trait Sequence: Sync {
    /// Element count; `None` for types with no meaningful length (negative
    /// indices are then not wrapped).
    fn size(&self, _seq: &Value) -> Option<usize> {
        None
    }

    fn item(&self, _seq: &Value, _index: usize) -> Slot {
        None
    }

    fn set_item(&self, _seq: &Value, _index: usize, _value: Value) -> Slot<Assigned> {
        None
    }

    fn slice(&self, _seq: &Value, _start: usize, _end: usize) -> Slot {
        None
    }

    fn set_slice(&self, _seq: &Value, _start: usize, _end: usize, _value: &Value) -> Slot<()> {
        None
    }

    /// `left + right` where `left` has this type.
    fn concat(&self, _left: &Value, _right: &Value) -> Slot {
        None
    }

    /// `left * right` where `left` has this type.
    fn repeat(&self, _left: &Value, _right: &Value) -> Slot {
        None
    }
}

/// Keyed containers.
pub trait Mapping: Sync {
    fn size(&self, map: &Value) -> usize;
    fn get(&self, map: &Value, key: &Value) -> EvalResult;
    fn set(&self, map: &Value, key: Value, value: Value) -> Result<(), EvalError>;
}

/// Attribute access (`obj.name`).
pub trait MemberAccess: Sync {
    fn get_member(&self, obj: &Value, name: &str) -> EvalResult;

    fn set_member(&self, _obj: &Value, _name: &str, _value: Value) -> Slot<()> {
        None
    }
}

/// Three-way ordering between two values of this type; `None` when the
/// particular pair cannot be ordered.
pub trait Comparable: Sync {
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering>;
}

pub trait Representable: Sync {
    fn repr(&self, value: &Value) -> String;
}

pub trait Truthiness: Sync {
    fn eval_cond(&self, value: &Value) -> bool;
}

/// Construction from evaluated arguments: `int(x)`, `new list(r)`.
pub trait Construct: Sync {
    fn init(&self, args: &[Value]) -> EvalResult;
}

/// Which concrete value variant a descriptor describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Int,
    Float,
    Bool,
    Nil,
    Range,
    Str,
    List,
    Map,
    Module,
    Class,
    Instance,
    File,
    Function,
    Method,
    BuiltinFunction,
    BuiltinMethod,
    Type,
}

/// Process-wide type descriptor.
///
/// Built as a `static`; the only later mutation is attaching the builtin
/// method table once at runtime start-up ([`TypeObject::attach`]).
pub struct TypeObject {
    name: &'static str,
    kind: TypeKind,
    members: OnceLock<FxHashMap<String, Value>>,
}

impl TypeObject {
    const fn new(name: &'static str, kind: TypeKind) -> Self {
        TypeObject {
            name,
            kind,
            members: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Merge builtin methods and constants into the member table.
    ///
    /// Returns `false` if a table was already attached; the first table wins.
    pub fn attach(&self, methods: &'static [BuiltinFunction], fields: &[FieldDescriptor]) -> bool {
        let mut attached = false;
        self.members.get_or_init(|| {
            attached = true;
            let mut members = FxHashMap::default();
            for method in methods {
                members.insert(method.name.to_string(), Value::BuiltinFunction(method));
            }
            for field in fields {
                members.insert(field.name.to_string(), field.to_value());
            }
            tracing::debug!(type_name = self.name, members = members.len(), "attached type members");
            members
        });
        attached
    }

    /// Find a builtin member of this type.
    pub fn locate(&self, name: &str) -> Option<Value> {
        self.members.get().and_then(|members| members.get(name)).cloned()
    }

    /// Member names, sorted.
    pub fn member_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .members
            .get()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    pub fn numbers(&self) -> Option<&'static dyn Numeric> {
        match self.kind {
            TypeKind::Int => Some(&int::IntType),
            TypeKind::Float => Some(&float::FloatType),
            _ => None,
        }
    }

    pub fn sequence(&self) -> Option<&'static dyn Sequence> {
        match self.kind {
            TypeKind::Int => Some(&int::IntType),
            TypeKind::Str => Some(&string::StringType),
            TypeKind::List => Some(&list::ListType),
            TypeKind::Range => Some(&range::RangeType),
            _ => None,
        }
    }

    pub fn mapping(&self) -> Option<&'static dyn Mapping> {
        match self.kind {
            TypeKind::Map => Some(&map::MapType),
            _ => None,
        }
    }

    pub fn member_access(&self) -> Option<&'static dyn MemberAccess> {
        match self.kind {
            TypeKind::Str | TypeKind::List | TypeKind::Map | TypeKind::File => {
                Some(&type_type::MethodTable)
            }
            TypeKind::Type => Some(&type_type::TypeType),
            TypeKind::Module => Some(&module::ModuleType),
            TypeKind::Class => Some(&class::ClassType),
            TypeKind::Instance => Some(&class::InstanceType),
            _ => None,
        }
    }

    pub fn comparable(&self) -> Option<&'static dyn Comparable> {
        match self.kind {
            TypeKind::Int => Some(&int::IntType),
            TypeKind::Float => Some(&float::FloatType),
            TypeKind::Bool => Some(&boolean::BoolType),
            TypeKind::Str => Some(&string::StringType),
            TypeKind::List => Some(&list::ListType),
            _ => None,
        }
    }

    pub fn representable(&self) -> &'static dyn Representable {
        match self.kind {
            TypeKind::Int => &int::IntType,
            TypeKind::Float => &float::FloatType,
            TypeKind::Bool => &boolean::BoolType,
            TypeKind::Nil => &nil::NilType,
            TypeKind::Range => &range::RangeType,
            TypeKind::Str => &string::StringType,
            TypeKind::List => &list::ListType,
            TypeKind::Map => &map::MapType,
            TypeKind::Module => &module::ModuleType,
            TypeKind::Class => &class::ClassType,
            TypeKind::Instance => &class::InstanceType,
            TypeKind::File => &file::FileType,
            TypeKind::Function
            | TypeKind::Method
            | TypeKind::BuiltinFunction
            | TypeKind::BuiltinMethod => &callable::CallableType,
            TypeKind::Type => &type_type::TypeType,
        }
    }

    pub fn truthiness(&self) -> Option<&'static dyn Truthiness> {
        match self.kind {
            TypeKind::Int => Some(&int::IntType),
            TypeKind::Float => Some(&float::FloatType),
            TypeKind::Bool => Some(&boolean::BoolType),
            TypeKind::Nil => Some(&nil::NilType),
            TypeKind::Str => Some(&string::StringType),
            TypeKind::List => Some(&list::ListType),
            TypeKind::Map => Some(&map::MapType),
            TypeKind::Class => Some(&class::ClassType),
            TypeKind::Instance => Some(&class::InstanceType),
            TypeKind::Function
            | TypeKind::Method
            | TypeKind::BuiltinFunction
            | TypeKind::BuiltinMethod => Some(&callable::CallableType),
            TypeKind::Range | TypeKind::Module | TypeKind::File | TypeKind::Type => None,
        }
    }

    pub fn constructor(&self) -> Option<&'static dyn Construct> {
        match self.kind {
            TypeKind::Int => Some(&int::IntType),
            TypeKind::Float => Some(&float::FloatType),
            TypeKind::Bool => Some(&boolean::BoolType),
            TypeKind::Nil => Some(&nil::NilType),
            TypeKind::Range => Some(&range::RangeType),
            TypeKind::Str => Some(&string::StringType),
            TypeKind::List => Some(&list::ListType),
            TypeKind::Map => Some(&map::MapType),
            TypeKind::File => Some(&file::FileType),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeObject")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

pub static INT: TypeObject = TypeObject::new("int", TypeKind::Int);
pub static FLOAT: TypeObject = TypeObject::new("float", TypeKind::Float);
pub static BOOL: TypeObject = TypeObject::new("bool", TypeKind::Bool);
pub static NIL: TypeObject = TypeObject::new("nil", TypeKind::Nil);
pub static RANGE: TypeObject = TypeObject::new("range", TypeKind::Range);
pub static STRING: TypeObject = TypeObject::new("string", TypeKind::Str);
pub static LIST: TypeObject = TypeObject::new("list", TypeKind::List);
pub static MAP: TypeObject = TypeObject::new("map", TypeKind::Map);
pub static MODULE: TypeObject = TypeObject::new("module", TypeKind::Module);
pub static CLASS: TypeObject = TypeObject::new("class", TypeKind::Class);
pub static INSTANCE: TypeObject = TypeObject::new("instance", TypeKind::Instance);
pub static FILE: TypeObject = TypeObject::new("file", TypeKind::File);
pub static FUNCTION: TypeObject = TypeObject::new("function", TypeKind::Function);
pub static METHOD: TypeObject = TypeObject::new("method", TypeKind::Method);
pub static BUILTIN_FUNCTION: TypeObject =
    TypeObject::new("builtin-function", TypeKind::BuiltinFunction);
pub static BUILTIN_METHOD: TypeObject = TypeObject::new("builtin-method", TypeKind::BuiltinMethod);
pub static TYPE: TypeObject = TypeObject::new("type", TypeKind::Type);

/// Types that scripts can name and construct, in builtin-scope order.
pub static CONSTRUCTIBLE: [&TypeObject; 9] =
    [&INT, &FLOAT, &STRING, &LIST, &BOOL, &NIL, &RANGE, &MAP, &FILE];
