//! Expressions and assignment targets.

use blue_ir::{
    parse_float_literal, parse_int_literal, BinaryOp, Node, NodeFlags, NodeKind, NodeRef,
};
use blue_stack::ensure_sufficient_stack;
use blue_value::dispatch::{self, eval_cond};
use blue_value::errors::{expected, number_overflow, range_requires_integers};
use blue_value::{Assigned, EvalError, EvalResult, MapStorage, Value};

use super::Evaluator;

impl Evaluator<'_> {
    pub(crate) fn eval(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node))
    }

    fn eval_inner(&mut self, node: &Node) -> EvalResult {
        match node.kind {
            NodeKind::Integer => parse_int_literal(&node.text)
                .map(Value::int)
                .ok_or_else(number_overflow),
            NodeKind::Float => parse_float_literal(&node.text)
                .map(Value::float)
                .ok_or_else(number_overflow),
            NodeKind::String => Ok(Value::string(node.text.as_str())),
            NodeKind::True => Ok(Value::bool(true)),
            NodeKind::False => Ok(Value::bool(false)),
            NodeKind::Nil => Ok(Value::Nil),
            NodeKind::Name => self.lookup(&node.text),

            NodeKind::List => Ok(Value::list(self.eval_all(&node.children)?)),
            NodeKind::Hash => {
                let mut storage = MapStorage::new();
                for pair in &node.children {
                    let key = self.eval(pair.child(0))?;
                    let value = self.eval(pair.child(1))?;
                    storage.insert(key, value)?;
                }
                Ok(Value::map(storage))
            }
            NodeKind::Range => {
                let lo = self.eval(node.child(0))?;
                let hi = self.eval(node.child(1))?;
                match (lo, hi) {
                    (Value::Int(lo), Value::Int(hi)) => Ok(Value::range(lo, hi)),
                    _ => Err(range_requires_integers()),
                }
            }

            NodeKind::LogicalAnd => {
                let lhs = self.eval(node.child(0))?;
                if !eval_cond(&lhs) {
                    return Ok(Value::bool(false));
                }
                let rhs = self.eval(node.child(1))?;
                Ok(Value::bool(eval_cond(&rhs)))
            }
            NodeKind::LogicalOr => {
                let lhs = self.eval(node.child(0))?;
                if eval_cond(&lhs) {
                    return Ok(Value::bool(true));
                }
                let rhs = self.eval(node.child(1))?;
                Ok(Value::bool(eval_cond(&rhs)))
            }
            NodeKind::Not => {
                let operand = self.eval(node.child(0))?;
                Ok(Value::bool(!eval_cond(&operand)))
            }
            NodeKind::Negate => dispatch::negate(&self.eval(node.child(0))?),
            NodeKind::Complement => dispatch::complement(&self.eval(node.child(0))?),
            NodeKind::Binary(op) => {
                let lhs = self.eval(node.child(0))?;
                let rhs = self.eval(node.child(1))?;
                dispatch::binary_op(op, &lhs, &rhs)
            }
            NodeKind::Compare(op) => {
                let lhs = self.eval(node.child(0))?;
                let rhs = self.eval(node.child(1))?;
                dispatch::compare_op(op, &lhs, &rhs)
            }

            NodeKind::Member => {
                let object = self.eval(node.child(0))?;
                dispatch::get_member(&object, &node.text)
            }
            NodeKind::Subscript => {
                let object = self.eval(node.child(0))?;
                let key = self.eval(node.child(1))?;
                dispatch::get_index(&object, &key)
            }
            NodeKind::Slice => {
                let object = self.eval(node.child(0))?;
                let (start, end) = self.slice_bounds(node)?;
                dispatch::get_slice(&object, start.as_ref(), end.as_ref())
            }
            NodeKind::Call => {
                let callee = self.eval(node.child(0))?;
                self.call_value(&callee, &node.child(1).children)
            }
            NodeKind::MakeInstance => self.make_instance(node),

            _ => Err(expected("expression")),
        }
    }

    pub(crate) fn eval_all(&mut self, nodes: &[NodeRef]) -> Result<Vec<Value>, EvalError> {
        nodes.iter().map(|node| self.eval(node)).collect()
    }

    /// Evaluate the bounds of a `Slice` node that are present.
    fn slice_bounds(&mut self, node: &Node) -> Result<(Option<Value>, Option<Value>), EvalError> {
        let mut next = 1;
        let mut bound = |this: &mut Self, flag| -> Result<Option<Value>, EvalError> {
            if !node.has_flag(flag) {
                return Ok(None);
            }
            let value = this.eval(node.child(next))?;
            next += 1;
            Ok(Some(value))
        };
        let start = bound(self, NodeFlags::SLICE_START)?;
        let end = bound(self, NodeFlags::SLICE_END)?;
        Ok((start, end))
    }

    /// Store `value` into an assignment target.
    ///
    /// An item store into a value-typed container (an int's bits) produces a
    /// new container, which is stored back into the container's own target.
    pub(crate) fn assign(&mut self, target: &Node, value: Value) -> Result<(), EvalError> {
        match target.kind {
            NodeKind::Name => self.set_name(&target.text, value),
            NodeKind::Member => {
                let object = self.eval(target.child(0))?;
                dispatch::set_member(&object, &target.text, value)
            }
            NodeKind::Subscript => {
                let container = target.child(0);
                let object = self.eval(container)?;
                let key = self.eval(target.child(1))?;
                match dispatch::set_index(&object, &key, value)? {
                    Assigned::InPlace => Ok(()),
                    Assigned::Replaced(updated)
                        if matches!(
                            container.kind,
                            NodeKind::Name | NodeKind::Member | NodeKind::Subscript
                        ) =>
                    {
                        self.assign(container, updated)
                    }
                    Assigned::Replaced(_) => Ok(()),
                }
            }
            NodeKind::Slice => {
                let object = self.eval(target.child(0))?;
                let (start, end) = self.slice_bounds(target)?;
                dispatch::set_slice(&object, start.as_ref(), end.as_ref(), &value)
            }
            _ => Err(expected("assignable target")),
        }
    }

    /// `target op= value`: the operator error names the augmented form.
    pub(crate) fn aug_assign(&mut self, op: BinaryOp, node: &Node) -> Result<(), EvalError> {
        let target = node.child(0);
        let current = self.eval(target)?;
        let rhs = self.eval(node.child(1))?;
        let symbol = format!("{}=", op.as_symbol());
        let updated = dispatch::binary_op_as(op, &symbol, &current, &rhs)?;
        self.assign(target, updated)
    }
}
