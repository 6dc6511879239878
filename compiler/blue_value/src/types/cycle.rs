//! Re-entrancy guard for containers that hold themselves.
//!
//! `l = [1]; l.append(l)` is legal, so printing or comparing a list or map
//! must notice when it reaches a container it is already inside.

use std::cell::RefCell;

type Key = (*const (), *const ());

thread_local! {
    static ACTIVE: RefCell<Vec<Key>> = const { RefCell::new(Vec::new()) };
}

/// A container, or a pair of containers being compared, that this thread is
/// currently inside. Leaving the scope releases it.
pub(super) struct Visit {
    key: Key,
}

impl Visit {
    /// `None` when the same container (or pair) is already being visited.
    pub(super) fn enter(first: *const (), second: *const ()) -> Option<Self> {
        let key = (first, second);
        ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&key) {
                return None;
            }
            active.push(key);
            Some(Visit { key })
        })
    }

    /// Guard for printing a single container.
    pub(super) fn enter_one(container: *const ()) -> Option<Self> {
        Self::enter(container, std::ptr::null())
    }
}

impl Drop for Visit {
    fn drop(&mut self) {
        ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            if let Some(pos) = active.iter().rposition(|key| *key == self.key) {
                active.remove(pos);
            }
        });
    }
}
