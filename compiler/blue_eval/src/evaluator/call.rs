//! Calls: argument binding, function invocation, builtins, classes and
//! instance creation.

use blue_ir::{Node, NodeRef};
use blue_stack::ensure_sufficient_stack;
use blue_value::dispatch;
use blue_value::errors::{
    argument_mismatch, cannot_instantiate, init_must_be_function, not_callable,
    receiver_required, takes_no_arguments,
};
use blue_value::types::{lookup_in_class, INIT};
use blue_value::{
    Arity, BuiltinMethodObject, ClassObject, EvalError, EvalResult, FunctionObject, Heap, Scope,
    Value,
};

use super::{Evaluator, Flow};
use crate::frame::Frame;

impl Evaluator<'_> {
    /// Call `callee` with unevaluated argument expressions.
    pub(crate) fn call_value(&mut self, callee: &Value, args: &[NodeRef]) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(function, None, args),
            Value::Method(method) => {
                let receiver = method.receiver.clone().map(Value::Instance);
                self.call_function(&method.function, receiver, args)
            }
            Value::BuiltinFunction(builtin) => {
                if builtin.arity == Arity::NoArgs && !args.is_empty() {
                    return Err(takes_no_arguments(builtin.name));
                }
                let values = self.eval_all(args)?;
                builtin.call(None, &values)
            }
            Value::BuiltinMethod(method) => {
                let values = self.eval_all(args)?;
                call_builtin_method(method, &values)
            }
            Value::Class(class) => self.new_instance(class, args),
            Value::Type(ty) => {
                let values = self.eval_all(args)?;
                dispatch::construct(ty, &values)
            }
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Bind arguments and run `function`, with `receiver` as its first
    /// argument when present.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %function.name))]
    pub(crate) fn call_function(
        &mut self,
        function: &Heap<FunctionObject>,
        receiver: Option<Value>,
        args: &[NodeRef],
    ) -> EvalResult {
        let locals = self.bind_arguments(function, receiver, args)?;
        self.invoke(function, locals)
    }

    /// Build the local scope of a call.
    ///
    /// Arity is checked before anything is evaluated or bound. A receiver
    /// counts as one argument unless the function collects it into its star
    /// parameter; with a star parameter surplus arguments are accepted.
    fn bind_arguments(
        &mut self,
        function: &FunctionObject,
        receiver: Option<Value>,
        args: &[NodeRef],
    ) -> Result<Scope, EvalError> {
        let absorbs = function.absorbs_receiver();
        let mut given = args.len() + usize::from(receiver.is_some() && !absorbs);
        if function.star_param && given > function.param_len {
            given = function.param_len;
        }
        if given != function.param_len {
            return Err(argument_mismatch(function.param_len, given));
        }

        let locals = Scope::new();
        let mut names = function.params[..function.param_len].iter();
        let mut rest = Vec::new();
        match receiver {
            Some(receiver) if absorbs => rest.push(receiver),
            Some(receiver) => {
                if let Some(name) = names.next() {
                    locals.set(name.as_str(), receiver);
                }
            }
            None => {}
        }

        let mut args = args.iter();
        for (name, arg) in names.zip(args.by_ref()) {
            let value = self.eval(arg)?;
            locals.set(name.as_str(), value);
        }
        if let Some(star) = function.star_name() {
            for arg in args {
                rest.push(self.eval(arg)?);
            }
            locals.set(star, Value::list(rest));
        }
        Ok(locals)
    }

    /// Run a function body in its own frame and its defining module's
    /// globals. The caller's context is restored on every path.
    fn invoke(&mut self, function: &FunctionObject, locals: Scope) -> EvalResult {
        self.frames.push(Frame {
            function: function.name.clone(),
            locals,
        })?;
        let saved = self.save();
        self.globals = function.globals.clone();
        self.path = function.path.clone();
        self.class = None;
        self.loop_depth = 0;
        self.in_function = true;
        self.current = None;

        let result = ensure_sufficient_stack(|| self.exec_block(&function.body))
            .map_err(|err| self.traced(err));
        self.restore(saved);
        self.frames.pop();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal | Flow::Break | Flow::Continue => Ok(Value::Nil),
        }
    }

    /// Create an instance of `class` and run its `__init__`, if any, with
    /// the instance as receiver. Without `__init__` the arguments are ignored.
    pub(crate) fn new_instance(&mut self, class: &Heap<ClassObject>, args: &[NodeRef]) -> EvalResult {
        let instance = Value::instance(class.clone());
        match lookup_in_class(class, INIT) {
            Some(Value::Method(init)) => {
                self.call_function(&init.function, Some(instance.clone()), args)?;
            }
            Some(_) => return Err(init_must_be_function()),
            None => {}
        }
        tracing::trace!(class = %class.name, "created instance");
        Ok(instance)
    }

    /// `new Name(args)`.
    pub(crate) fn make_instance(&mut self, node: &Node) -> EvalResult {
        let args = &node.child(1).children;
        match self.lookup(&node.child(0).text)? {
            Value::Class(class) => self.new_instance(&class, args),
            Value::Type(ty) => {
                let values = self.eval_all(args)?;
                dispatch::construct(ty, &values)
            }
            other => Err(cannot_instantiate(other.type_name())),
        }
    }
}

/// A bound builtin method receives its receiver; an unbound one takes the
/// first argument as receiver, which must be of the owning type.
fn call_builtin_method(method: &BuiltinMethodObject, args: &[Value]) -> EvalResult {
    if let Some(receiver) = &method.receiver {
        return method.function.call(Some(receiver), args);
    }
    match args.split_first() {
        Some((receiver, rest)) if std::ptr::eq(receiver.type_object(), method.owner) => {
            method.function.call(Some(receiver), rest)
        }
        _ => Err(receiver_required(method.function.name, method.owner.name())),
    }
}
