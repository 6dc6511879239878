//! Shared payloads of reference-typed values.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way the value model allocates.
//! Its constructor is `pub(super)`, so every heap value outside this module
//! is created through a `Value::` factory method.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, heap-allocated payload of a [`Value`](super::Value).
///
/// Cloning shares the allocation. Blue has reference semantics for lists,
/// maps, classes, instances and modules, so two `Heap`s pointing at the same
/// allocation are the same object; use [`Heap::ptr_eq`] for identity.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same object.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Address of the shared payload, for identity bookkeeping.
    #[inline]
    pub fn as_ptr(this: &Self) -> *const () {
        Arc::as_ptr(&this.0).cast()
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_one_object() {
        let items = Heap::new(vec![1, 2, 3]);
        let alias = items.clone();
        assert!(Heap::ptr_eq(&items, &alias));
        assert_eq!(alias.len(), 3);
    }

    #[test]
    fn equal_text_is_not_identity() {
        let a = Heap::new(String::from("blue"));
        let b = Heap::new(String::from("blue"));
        assert_eq!(*a, *b);
        assert!(!Heap::ptr_eq(&a, &b));
    }
}
