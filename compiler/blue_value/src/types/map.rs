//! `map`: insertion-ordered dictionary, the Mapping protocol's only type.

use parking_lot::RwLock;

use super::cycle::Visit;
use super::{Construct, Mapping, Representable, Truthiness};
use crate::args::parse_args;
use crate::dispatch;
use crate::errors::{key_not_found, EvalError, EvalResult};
use crate::value::{Heap, MapStorage, Value};

pub(super) struct MapType;

fn storage(value: &Value) -> &Heap<RwLock<MapStorage>> {
    match value {
        Value::Map(map) => map,
        other => unreachable!("map protocol applied to {}", other.type_name()),
    }
}

impl Mapping for MapType {
    fn size(&self, map: &Value) -> usize {
        storage(map).read().len()
    }

    fn get(&self, map: &Value, key: &Value) -> EvalResult {
        storage(map).read().get(key)?.ok_or_else(key_not_found)
    }

    fn set(&self, map: &Value, key: Value, value: Value) -> Result<(), EvalError> {
        storage(map).write().insert(key, value)
    }
}

impl Representable for MapType {
    fn repr(&self, value: &Value) -> String {
        let map = storage(value);
        let Some(_visit) = Visit::enter_one(Heap::as_ptr(map)) else {
            return "{...}".to_string();
        };
        let entries: Vec<(Value, Value)> = map
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let parts: Vec<String> = entries
            .iter()
            .map(|(k, v)| format!("{}=>{}", dispatch::repr(k), dispatch::repr(v)))
            .collect();
        format!("{{{}}}", parts.join(", "))
    }
}

impl Truthiness for MapType {
    fn eval_cond(&self, value: &Value) -> bool {
        !storage(value).read().is_empty()
    }
}

impl Construct for MapType {
    fn init(&self, args: &[Value]) -> EvalResult {
        parse_args("", args)?;
        Ok(Value::map(MapStorage::new()))
    }
}
