//! `nil`: the single absent value. Always falsy.

use super::{Construct, Representable, Truthiness};
use crate::args::parse_args;
use crate::errors::EvalResult;
use crate::value::Value;

pub(super) struct NilType;

impl Representable for NilType {
    fn repr(&self, _value: &Value) -> String {
        "nil".to_string()
    }
}

impl Truthiness for NilType {
    fn eval_cond(&self, _value: &Value) -> bool {
        false
    }
}

impl Construct for NilType {
    fn init(&self, args: &[Value]) -> EvalResult {
        parse_args("", args)?;
        Ok(Value::Nil)
    }
}
