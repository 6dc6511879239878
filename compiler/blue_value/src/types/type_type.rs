//! Member access backed by a builtin type's attached method table.
//!
//! `"abc".toupper` binds the string as receiver; `string.toupper` (through
//! the type value) yields an unbound method whose first argument becomes
//! the receiver at call time.

use super::{MemberAccess, Representable, TypeObject};
use crate::errors::{no_such_member, EvalResult};
use crate::value::Value;

/// Access on values of `string`, `list` and `map`.
pub(super) struct MethodTable;

/// Access on type values themselves.
pub(super) struct TypeType;

/// Look `name` up on `ty`, binding builtin functions to `receiver`.
pub(super) fn bind_type_member(
    ty: &'static TypeObject,
    name: &str,
    receiver: Option<Value>,
) -> Option<Value> {
    Some(match ty.locate(name)? {
        Value::BuiltinFunction(function) => Value::builtin_method(function, ty, receiver),
        other => other,
    })
}

impl MemberAccess for MethodTable {
    fn get_member(&self, obj: &Value, name: &str) -> EvalResult {
        let ty = obj.type_object();
        bind_type_member(ty, name, Some(obj.clone())).ok_or_else(|| no_such_member(ty.name(), name))
    }
}

fn type_object(value: &Value) -> &'static TypeObject {
    match value {
        Value::Type(ty) => ty,
        other => unreachable!("type protocol applied to {}", other.type_name()),
    }
}

impl MemberAccess for TypeType {
    fn get_member(&self, obj: &Value, name: &str) -> EvalResult {
        let ty = type_object(obj);
        bind_type_member(ty, name, None).ok_or_else(|| no_such_member(ty.name(), name))
    }
}

impl Representable for TypeType {
    fn repr(&self, value: &Value) -> String {
        format!("<class '{}'>", type_object(value).name())
    }
}
