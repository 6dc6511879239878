//! Shared name → value tables.
//!
//! Module globals, class and instance member maps, and function frames all
//! use the same table. A `Scope` is a handle: clones see the same bindings.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::heap::Heap;
use super::Value;

/// A mutable, shared variable table.
#[derive(Clone)]
pub struct Scope(Heap<RwLock<FxHashMap<String, Value>>>);

impl Scope {
    pub fn new() -> Self {
        Scope(Heap::new(RwLock::new(FxHashMap::default())))
    }

    pub fn from_map(map: FxHashMap<String, Value>) -> Self {
        Scope(Heap::new(RwLock::new(map)))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.read().get(name).cloned()
    }

    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.write().insert(name.into(), value);
    }

    pub fn remove(&self, name: &str) -> Option<Value> {
        self.0.write().remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Whether both handles refer to the same table.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Heap::ptr_eq(&a.0, &b.0)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::new()
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
