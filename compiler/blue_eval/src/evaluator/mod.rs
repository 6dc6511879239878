//! Tree-walking evaluator.
//!
//! One [`Evaluator`] runs the statements of one module (or one REPL
//! session) against a shared [`Runtime`]. Statements yield a [`Flow`]
//! that carries `return`, `break` and `continue` out to the construct that
//! consumes them; expressions yield values.
//!
//! # Context switching
//!
//! A function body runs in the globals of the module that defined it, with
//! no class context, no enclosing loops and its own frame. Everything the
//! switch touches is captured in a `SavedContext` and put back when the
//! call returns, whether or not it failed, so an error never leaves the
//! evaluator inside a callee. This is what keeps REPL globals usable after
//! a failed entry.
//!
//! - `expr.rs` - expressions and assignment targets
//! - `call.rs` - calls, argument binding, classes and instances

mod call;
mod expr;

use std::sync::Arc;

use blue_ir::{Node, NodeFlags, NodeKind, NodeRef};
use blue_stack::ensure_sufficient_stack;
use blue_value::dispatch::{self, eval_cond};
use blue_value::errors::{
    break_outside_loop, continue_outside_loop, invalid_base, return_outside_function,
    undefined_variable,
};
use blue_value::types::lookup_in_class;
use blue_value::{
    ClassBase, ClassObject, EvalError, EvalErrorKind, EvalResult, FunctionObject, Heap, Scope,
    Value,
};

use crate::frame::FrameStack;
use crate::Runtime;

/// How a statement finished.
#[derive(Clone, Debug)]
pub enum Flow {
    Normal,
    Return(Value),
    Break,
    Continue,
}

/// Evaluator state that a call or class body replaces for its duration.
struct SavedContext {
    globals: Scope,
    path: Arc<str>,
    class: Option<Heap<ClassObject>>,
    loop_depth: usize,
    in_function: bool,
    current: Option<NodeRef>,
}

pub struct Evaluator<'rt> {
    runtime: &'rt Runtime,
    globals: Scope,
    /// Source path of the code being run, for traces.
    path: Arc<str>,
    frames: FrameStack,
    /// Class whose body is executing, if any.
    class: Option<Heap<ClassObject>>,
    loop_depth: usize,
    in_function: bool,
    /// Statement being executed; its line goes into error traces.
    current: Option<NodeRef>,
}

impl<'rt> Evaluator<'rt> {
    pub fn new(runtime: &'rt Runtime, globals: Scope, path: impl Into<Arc<str>>) -> Self {
        Evaluator {
            runtime,
            globals,
            path: path.into(),
            frames: FrameStack::new(runtime.config().max_call_depth),
            class: None,
            loop_depth: 0,
            in_function: false,
            current: None,
        }
    }

    pub fn runtime(&self) -> &'rt Runtime {
        self.runtime
    }

    pub fn globals(&self) -> &Scope {
        &self.globals
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of active script-level calls.
    pub fn depth(&self) -> usize {
        self.frames.depth()
    }

    /// Run the statements of a `FileInput` or `Interactive` root.
    ///
    /// Under `Interactive`, each top-level expression statement prints its
    /// value unless it is `nil`. The first error stops the run and is
    /// returned with the failing top-level line appended to its trace.
    pub fn run(&mut self, root: &Node) -> Result<(), EvalError> {
        let interactive = root.kind == NodeKind::Interactive;
        tracing::trace!(path = %self.path, statements = root.children.len(), "run");
        for stmt in &root.children {
            let result = if interactive && !is_statement(stmt.kind) {
                self.current = Some(stmt.clone());
                self.eval(stmt).map(|value| {
                    if !value.is_nil() {
                        self.runtime.print_handler().println(&dispatch::repr(&value));
                    }
                })
            } else {
                self.exec_stmt(stmt).map(|_| ())
            };
            result.map_err(|err| self.traced(err))?;
        }
        Ok(())
    }

    /// Append the current statement's location to `err`.
    fn traced(&self, err: EvalError) -> EvalError {
        if matches!(err.kind, EvalErrorKind::Exit(_)) {
            return err;
        }
        match &self.current {
            Some(node) => err.with_frame(self.path.clone(), node.line, node.source_line.clone()),
            None => err,
        }
    }

    fn save(&self) -> SavedContext {
        SavedContext {
            globals: self.globals.clone(),
            path: self.path.clone(),
            class: self.class.clone(),
            loop_depth: self.loop_depth,
            in_function: self.in_function,
            current: self.current.clone(),
        }
    }

    fn restore(&mut self, saved: SavedContext) {
        self.globals = saved.globals;
        self.path = saved.path;
        self.class = saved.class;
        self.loop_depth = saved.loop_depth;
        self.in_function = saved.in_function;
        self.current = saved.current;
    }

    // Names

    /// Resolve `name`: class body, then locals, globals and builtins.
    /// While a class body is open its members replace the frame locals.
    pub(crate) fn lookup(&self, name: &str) -> EvalResult {
        if let Some(class) = &self.class {
            if let Some(found) = lookup_in_class(class, name) {
                return Ok(found);
            }
        } else if let Some(found) = self.frames.locals().and_then(|locals| locals.get(name)) {
            return Ok(found);
        }
        if let Some(found) = self.globals.get(name) {
            return Ok(found);
        }
        self.runtime
            .builtins()
            .get(name)
            .ok_or_else(|| undefined_variable(name))
    }

    /// Bind `name` in the innermost scope: the class being defined, the
    /// current frame, or the module globals.
    pub(crate) fn set_name(&self, name: &str, value: Value) -> Result<(), EvalError> {
        if let Some(class) = &self.class {
            return dispatch::set_member(&Value::Class(class.clone()), name, value);
        }
        match self.frames.locals() {
            Some(locals) => locals.set(name, value),
            None => self.globals.set(name, value),
        }
        Ok(())
    }

    // Statements

    /// Run a statement list. `current` is reset to the enclosing statement
    /// afterwards so later failures of that statement (a loop condition,
    /// say) report its own line.
    pub(crate) fn exec_block(&mut self, block: &Node) -> Result<Flow, EvalError> {
        let owner = self.current.clone();
        for stmt in &block.children {
            match self.exec_stmt(stmt)? {
                Flow::Normal => {}
                other => {
                    self.current = owner;
                    return Ok(other);
                }
            }
        }
        self.current = owner;
        Ok(Flow::Normal)
    }

    fn exec_stmt(&mut self, node: &NodeRef) -> Result<Flow, EvalError> {
        self.current = Some(node.clone());
        ensure_sufficient_stack(|| match node.kind {
            NodeKind::MakeClass => self.make_class(node).map(|()| Flow::Normal),
            NodeKind::MakeFunc => self.make_function(node).map(|()| Flow::Normal),
            NodeKind::Import => self.import(node).map(|()| Flow::Normal),
            NodeKind::If => self.exec_if(node),
            NodeKind::While => self.exec_loop(|this| this.run_while(node)),
            NodeKind::For => self.exec_loop(|this| this.run_for(node)),
            NodeKind::Return => {
                if !self.in_function {
                    return Err(return_outside_function());
                }
                let value = match node.children.first() {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            }
            NodeKind::Break if self.loop_depth == 0 => Err(break_outside_loop()),
            NodeKind::Break => Ok(Flow::Break),
            NodeKind::Continue if self.loop_depth == 0 => Err(continue_outside_loop()),
            NodeKind::Continue => Ok(Flow::Continue),
            NodeKind::Print => {
                let value = self.eval(node.child(0))?;
                self.runtime.print_handler().println(&dispatch::repr(&value));
                Ok(Flow::Normal)
            }
            NodeKind::Assign => {
                let value = self.eval(node.child(1))?;
                self.assign(node.child(0), value).map(|()| Flow::Normal)
            }
            NodeKind::AugAssign(op) => self.aug_assign(op, node).map(|()| Flow::Normal),
            _ => self.eval(node).map(|_| Flow::Normal),
        })
    }

    fn exec_if(&mut self, node: &Node) -> Result<Flow, EvalError> {
        for branch in node.children.chunks(2) {
            match branch {
                [cond, block] => {
                    let cond = self.eval(cond)?;
                    if eval_cond(&cond) {
                        return self.exec_block(block);
                    }
                }
                [otherwise] => return self.exec_block(otherwise),
                _ => {}
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_loop(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<Flow, EvalError>,
    ) -> Result<Flow, EvalError> {
        self.loop_depth += 1;
        let result = body(self);
        self.loop_depth -= 1;
        result
    }

    fn run_while(&mut self, node: &Node) -> Result<Flow, EvalError> {
        loop {
            let cond = self.eval(node.child(0))?;
            if !eval_cond(&cond) {
                return Ok(Flow::Normal);
            }
            match self.exec_block(node.child(1))? {
                Flow::Break => return Ok(Flow::Normal),
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal | Flow::Continue => {}
            }
        }
    }

    /// `for x in seq` binds each element. `for i, x in seq` binds index and
    /// element, or key and value when `seq` is a map. The elements are
    /// snapshotted before the first iteration.
    fn run_for(&mut self, node: &Node) -> Result<Flow, EvalError> {
        let names = node.child(0);
        let iterable = self.eval(node.child(1))?;
        let pairs: Vec<(Value, Value)> = match (&iterable, names.children.len()) {
            (Value::Map(map), 2) => map
                .read()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            (_, 2) => dispatch::elements(&iterable)?
                .into_iter()
                .enumerate()
                .map(|(index, item)| (Value::int(i64::try_from(index).unwrap_or(i64::MAX)), item))
                .collect(),
            _ => dispatch::elements(&iterable)?
                .into_iter()
                .map(|item| (item, Value::Nil))
                .collect(),
        };

        for (first, second) in pairs {
            self.set_name(&names.child(0).text, first)?;
            if let Some(name) = names.children.get(1) {
                self.set_name(&name.text, second)?;
            }
            match self.exec_block(node.child(2))? {
                Flow::Break => break,
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Normal | Flow::Continue => {}
            }
        }
        Ok(Flow::Normal)
    }

    fn import(&mut self, node: &Node) -> Result<(), EvalError> {
        for path in &node.children {
            let parts: Vec<&str> = path.children.iter().map(|part| part.text.as_str()).collect();
            let module = self.runtime.import(&parts.join("."))?;
            if let Some(last) = parts.last() {
                self.globals.set(*last, module);
            }
        }
        Ok(())
    }

    fn make_function(&mut self, node: &Node) -> Result<(), EvalError> {
        let name = &node.child(0).text;
        let params = node.child(1);
        let function = FunctionObject::new(
            name.as_str(),
            params.children.iter().map(|param| param.text.clone()).collect(),
            params.has_flag(NodeFlags::STAR_PARAM),
            node.child(2).clone(),
            self.globals.clone(),
            self.path.clone(),
        );
        self.set_name(name, Value::function(function))
    }

    /// Create the class, run its body with the class as innermost scope,
    /// then bind its name.
    fn make_class(&mut self, node: &Node) -> Result<(), EvalError> {
        let name = &node.child(0).text;
        let base = match node.child(1).children.first() {
            None => None,
            Some(base) => match self.lookup(&base.text)? {
                Value::Class(class) => Some(ClassBase::Class(class)),
                Value::Type(ty) => Some(ClassBase::Type(ty)),
                other => return Err(invalid_base(other.type_name())),
            },
        };
        let class = Value::class(name.as_str(), base);
        if let Value::Class(object) = &class {
            let saved = self.save();
            self.class = Some(object.clone());
            self.loop_depth = 0;
            self.in_function = false;
            let result = self.exec_block(node.child(2));
            self.restore(saved);
            result?;
        }
        tracing::trace!(class = %name, "defined class");
        self.set_name(name, class)
    }
}

/// Node kinds that are statements rather than expressions.
fn is_statement(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::MakeClass
            | NodeKind::MakeFunc
            | NodeKind::Import
            | NodeKind::If
            | NodeKind::While
            | NodeKind::For
            | NodeKind::Return
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Print
            | NodeKind::Assign
            | NodeKind::AugAssign(_)
    )
}
