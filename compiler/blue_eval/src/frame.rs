//! Activation records.
//!
//! A [`Frame`] is pushed for every script-level function call and owns that
//! call's local scope. Top-level code runs with no frame at all, so name
//! resolution goes straight to the module globals.

use blue_value::errors::recursion_limit_exceeded;
use blue_value::{EvalError, Scope};

/// One active script-level call.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Called function name.
    pub function: String,
    pub locals: Scope,
}

/// The live call stack of one evaluator.
#[derive(Debug)]
pub struct FrameStack {
    frames: Vec<Frame>,
    max_depth: Option<usize>,
}

impl FrameStack {
    pub fn new(max_depth: Option<usize>) -> Self {
        FrameStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit. On overflow nothing is
    /// pushed.
    pub fn push(&mut self, frame: Frame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "FrameStack::pop on empty stack");
        self.frames.pop();
    }

    /// Locals of the innermost frame.
    pub fn locals(&self) -> Option<&Scope> {
        self.frames.last().map(|frame| &frame.locals)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use super::*;
    use blue_value::{EvalErrorKind, Value};
    use pretty_assertions::assert_eq;

    fn frame(name: &str) -> Frame {
        Frame {
            function: name.to_string(),
            locals: Scope::new(),
        }
    }

    #[test]
    fn innermost_locals_win() {
        let mut stack = FrameStack::new(None);
        assert!(stack.locals().is_none());
        stack.push(frame("outer")).unwrap();
        stack.locals().unwrap().set("x", Value::int(1));
        stack.push(frame("inner")).unwrap();
        assert!(stack.locals().unwrap().get("x").is_none());
        stack.pop();
        assert_eq!(stack.locals().unwrap().get("x").unwrap().as_int(), Some(1));
    }

    #[test]
    fn depth_limit_rejects_without_pushing() {
        let mut stack = FrameStack::new(Some(1));
        stack.push(frame("a")).unwrap();
        let err = stack.push(frame("b")).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::Limit);
        assert_eq!(stack.depth(), 1);
    }
}
