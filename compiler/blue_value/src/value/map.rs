//! Storage behind the `map` type.

use rustc_hash::FxHashMap;

use super::Value;
use crate::errors::{unhashable_key, EvalError};

/// Hashable projection of a key value.
///
/// Only immutable scalar values may be keys; floats hash by bit pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MapKey {
    Int(i64),
    Float(u64),
    Bool(bool),
    Str(String),
    Nil,
}

impl MapKey {
    pub fn from_value(value: &Value) -> Result<Self, EvalError> {
        match value {
            Value::Int(n) => Ok(MapKey::Int(*n)),
            Value::Float(f) => Ok(MapKey::Float(f.to_bits())),
            Value::Bool(b) => Ok(MapKey::Bool(*b)),
            Value::Str(s) => Ok(MapKey::Str(s.to_string())),
            Value::Nil => Ok(MapKey::Nil),
            other => Err(unhashable_key(other.type_name())),
        }
    }
}

/// Insertion-ordered hash map from Blue values to Blue values.
#[derive(Default)]
pub struct MapStorage {
    index: FxHashMap<MapKey, usize>,
    entries: Vec<(Value, Value)>,
}

impl MapStorage {
    pub fn new() -> Self {
        MapStorage::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Value) -> Result<Option<Value>, EvalError> {
        let key = MapKey::from_value(key)?;
        Ok(self.index.get(&key).map(|&i| self.entries[i].1.clone()))
    }

    pub fn contains(&self, key: &Value) -> Result<bool, EvalError> {
        Ok(self.index.contains_key(&MapKey::from_value(key)?))
    }

    /// Insert or overwrite; an overwritten key keeps its position.
    pub fn insert(&mut self, key: Value, value: Value) -> Result<(), EvalError> {
        let hashed = MapKey::from_value(&key)?;
        if let Some(&i) = self.index.get(&hashed) {
            self.entries[i].1 = value;
        } else {
            self.index.insert(hashed, self.entries.len());
            self.entries.push((key, value));
        }
        Ok(())
    }

    pub fn remove(&mut self, key: &Value) -> Result<Option<Value>, EvalError> {
        let Some(pos) = self.index.remove(&MapKey::from_value(key)?) else {
            return Ok(None);
        };
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(Some(value))
    }

    pub fn keys(&self) -> Vec<Value> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overwrite_keeps_insertion_position() {
        let mut map = MapStorage::new();
        map.insert(Value::string("a"), Value::int(1)).unwrap();
        map.insert(Value::string("b"), Value::int(2)).unwrap();
        map.insert(Value::string("a"), Value::int(3)).unwrap();
        assert_eq!(map.len(), 2);
        let keys: Vec<String> = map.keys().iter().map(Value::to_string).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(matches!(map.get(&Value::string("a")).unwrap(), Some(Value::Int(3))));
    }

    #[test]
    fn remove_reindexes_later_entries() {
        let mut map = MapStorage::new();
        for i in 0..4 {
            map.insert(Value::int(i), Value::int(i * 10)).unwrap();
        }
        assert!(map.remove(&Value::int(1)).unwrap().is_some());
        assert!(map.remove(&Value::int(1)).unwrap().is_none());
        assert!(matches!(map.get(&Value::int(3)).unwrap(), Some(Value::Int(30))));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn int_and_float_keys_are_distinct() {
        let mut map = MapStorage::new();
        map.insert(Value::int(1), Value::string("int")).unwrap();
        map.insert(Value::float(1.0), Value::string("float")).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lists_cannot_be_keys() {
        let mut map = MapStorage::new();
        let err = map.insert(Value::list(vec![]), Value::Nil).unwrap_err();
        assert_eq!(err.message, "'list' object cannot be used as a key");
    }
}
