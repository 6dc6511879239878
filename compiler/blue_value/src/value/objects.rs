//! Payloads of the reference-typed values: modules, classes, instances,
//! functions and bound methods.

use std::sync::Arc;

use blue_ir::NodeRef;

use super::heap::Heap;
use super::scope::Scope;
use super::Value;
use crate::builtin::BuiltinFunction;
use crate::types::TypeObject;

/// A loaded module; its member table is the module's global scope.
#[derive(Debug)]
pub struct ModuleObject {
    pub name: String,
    pub path: String,
    pub members: Scope,
}

/// Base of a user class.
#[derive(Clone, Debug)]
pub enum ClassBase {
    Class(Heap<ClassObject>),
    Type(&'static TypeObject),
}

/// A user class. Members hold functions and class-level values.
#[derive(Debug)]
pub struct ClassObject {
    pub name: String,
    pub base: Option<ClassBase>,
    pub members: Scope,
}

/// An instance of a user class, with its own member table.
#[derive(Debug)]
pub struct InstanceObject {
    pub class: Heap<ClassObject>,
    pub members: Scope,
}

/// A user-defined function.
///
/// `params` holds every parameter name; when `star_param` is set the last
/// one collects surplus arguments and is not counted in `param_len`.
pub struct FunctionObject {
    pub name: String,
    pub params: Vec<String>,
    pub param_len: usize,
    pub star_param: bool,
    pub body: NodeRef,
    /// Global scope of the defining module.
    pub globals: Scope,
    /// Source path of the defining module, for traces.
    pub path: Arc<str>,
}

impl FunctionObject {
    pub fn new(
        name: impl Into<String>,
        params: Vec<String>,
        star_param: bool,
        body: NodeRef,
        globals: Scope,
        path: Arc<str>,
    ) -> Self {
        let param_len = params.len() - usize::from(star_param && !params.is_empty());
        FunctionObject {
            name: name.into(),
            params,
            param_len,
            star_param,
            body,
            globals,
            path,
        }
    }

    /// Name of the collecting parameter, if any.
    pub fn star_name(&self) -> Option<&str> {
        if self.star_param {
            self.params.last().map(String::as_str)
        } else {
            None
        }
    }

    /// A function whose receiver lands in its variadic list rather than a
    /// named parameter: `def f(*args)` used as a method.
    pub fn absorbs_receiver(&self) -> bool {
        self.star_param && self.param_len == 0
    }
}

impl std::fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionObject")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("star_param", &self.star_param)
            .finish_non_exhaustive()
    }
}

/// A user function resolved through a class, optionally bound to an instance.
#[derive(Debug)]
pub struct MethodObject {
    pub function: Heap<FunctionObject>,
    /// The class the function was found on.
    pub class: Heap<ClassObject>,
    pub receiver: Option<Heap<InstanceObject>>,
}

/// A builtin function resolved through a type, optionally bound to a value.
#[derive(Debug)]
pub struct BuiltinMethodObject {
    pub function: &'static BuiltinFunction,
    pub owner: &'static TypeObject,
    pub receiver: Option<Value>,
}
