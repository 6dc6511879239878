//! User classes and their instances.
//!
//! Attribute lookup walks own members, then the base chain. The chain is
//! finite and acyclic: a class can only extend a class or builtin type that
//! existed before the class statement ran. Functions found on the way come
//! back as freshly bound methods; instance access binds the instance as the
//! receiver.

use super::type_type::bind_type_member;
use super::{MemberAccess, Representable, Slot, Truthiness};
use crate::errors::{init_must_be_function, no_such_member, EvalResult};
use crate::value::{ClassBase, ClassObject, Heap, InstanceObject, Value};

/// Constructor method name.
pub const INIT: &str = "__init__";

pub(super) struct ClassType;
pub(super) struct InstanceType;

fn class(value: &Value) -> &Heap<ClassObject> {
    match value {
        Value::Class(c) => c,
        other => unreachable!("class protocol applied to {}", other.type_name()),
    }
}

fn instance(value: &Value) -> &Heap<InstanceObject> {
    match value {
        Value::Instance(i) => i,
        other => unreachable!("instance protocol applied to {}", other.type_name()),
    }
}

/// Resolve `name` on `class` or its bases, as class-level access sees it:
/// functions become methods with no receiver, bound to the class that
/// defines them.
pub fn lookup_in_class(class: &Heap<ClassObject>, name: &str) -> Option<Value> {
    let mut current = class.clone();
    loop {
        if let Some(found) = current.members.get(name) {
            return Some(match found {
                Value::Function(function) => Value::method(function, current.clone(), None),
                other => other,
            });
        }
        let next = match &current.base {
            Some(ClassBase::Class(base)) => base.clone(),
            Some(ClassBase::Type(ty)) => return bind_type_member(ty, name, None),
            None => return None,
        };
        current = next;
    }
}

impl MemberAccess for ClassType {
    fn get_member(&self, obj: &Value, name: &str) -> EvalResult {
        let class = class(obj);
        lookup_in_class(class, name).ok_or_else(|| no_such_member(&class.name, name))
    }

    fn set_member(&self, obj: &Value, name: &str, value: Value) -> Slot<()> {
        if name == INIT && !matches!(value, Value::Function(_) | Value::Method(_)) {
            return Some(Err(init_must_be_function()));
        }
        class(obj).members.set(name, value);
        Some(Ok(()))
    }
}

impl Representable for ClassType {
    fn repr(&self, value: &Value) -> String {
        format!("<class '{}'>", class(value).name)
    }
}

impl Truthiness for ClassType {
    fn eval_cond(&self, value: &Value) -> bool {
        !class(value).members.is_empty()
    }
}

impl MemberAccess for InstanceType {
    fn get_member(&self, obj: &Value, name: &str) -> EvalResult {
        let inst = instance(obj);
        if let Some(own) = inst.members.get(name) {
            return Ok(match own {
                Value::Function(function) => {
                    Value::method(function, inst.class.clone(), Some(inst.clone()))
                }
                other => other,
            });
        }
        let found = lookup_in_class(&inst.class, name)
            .ok_or_else(|| no_such_member(&inst.class.name, name))?;
        Ok(match found {
            Value::Method(method) => Value::method(
                method.function.clone(),
                method.class.clone(),
                Some(inst.clone()),
            ),
            other => other,
        })
    }

    fn set_member(&self, obj: &Value, name: &str, value: Value) -> Slot<()> {
        instance(obj).members.set(name, value);
        Some(Ok(()))
    }
}

impl Representable for InstanceType {
    fn repr(&self, value: &Value) -> String {
        format!("<class '{}' instance>", instance(value).class.name)
    }
}

impl Truthiness for InstanceType {
    fn eval_cond(&self, value: &Value) -> bool {
        !instance(value).members.is_empty()
    }
}
