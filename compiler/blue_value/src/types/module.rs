//! `module`: a loaded file or native library; members are its globals.

use super::{MemberAccess, Representable, Slot};
use crate::errors::{no_such_member, EvalResult};
use crate::value::{Heap, ModuleObject, Value};

pub(super) struct ModuleType;

fn module(value: &Value) -> &Heap<ModuleObject> {
    match value {
        Value::Module(m) => m,
        other => unreachable!("module protocol applied to {}", other.type_name()),
    }
}

impl MemberAccess for ModuleType {
    fn get_member(&self, obj: &Value, name: &str) -> EvalResult {
        module(obj)
            .members
            .get(name)
            .ok_or_else(|| no_such_member("module", name))
    }

    fn set_member(&self, obj: &Value, name: &str, value: Value) -> Slot<()> {
        module(obj).members.set(name, value);
        Some(Ok(()))
    }
}

impl Representable for ModuleType {
    fn repr(&self, value: &Value) -> String {
        let m = module(value);
        format!("<module '{}', path='{}'>", m.name, m.path)
    }
}
