//! Thread-safe holder for the current state of one machine instance.

use parking_lot::RwLock;
use std::fmt;

/// Mutable, thread-safe cell holding exactly one state value.
///
/// Every read and write is atomic on its own: `current` never observes a
/// half-written value, and a `set` is visible to all later reads on any
/// thread. Sequences of calls are not atomic. Two threads dispatching
/// against the same cell can interleave between a read and the following
/// write; callers that need one-transition-at-a-time semantics must
/// serialize dispatch themselves.
///
/// The lock is held only for the clone, compare or assign itself.
///
/// # Example
///
/// ```rust
/// use fsmtable::core::StateCell;
///
/// const OPENED: i32 = 0;
/// const CLOSED: i32 = 1;
///
/// let cell = StateCell::new(CLOSED);
/// assert_eq!(cell.current(), CLOSED);
/// assert!(cell.is(&CLOSED));
///
/// cell.set(OPENED);
/// assert_eq!(cell.current(), OPENED);
/// assert!(cell.is(&OPENED));
/// ```
pub struct StateCell<S> {
    state: RwLock<S>,
}

impl<S> StateCell<S> {
    /// Create a cell holding `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }

    /// Replace the current state.
    pub fn set(&self, next: S) {
        *self.state.write() = next;
    }

    /// Consume the cell, returning the state it held.
    pub fn into_inner(self) -> S {
        self.state.into_inner()
    }
}

impl<S: Clone> StateCell<S> {
    /// Get the current state.
    pub fn current(&self) -> S {
        self.state.read().clone()
    }
}

impl<S: PartialEq> StateCell<S> {
    /// Check whether the current state equals `target`.
    pub fn is(&self, target: &S) -> bool {
        *self.state.read() == *target
    }
}

impl<S: Default> Default for StateCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> From<S> for StateCell<S> {
    fn from(initial: S) -> Self {
        Self::new(initial)
    }
}

impl<S: fmt::Debug> fmt::Debug for StateCell<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateCell").field(&*self.state.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    const OPENED: i32 = 0;
    const CLOSED: i32 = 1;

    #[test]
    fn new_cell_holds_initial_state() {
        let cell = StateCell::new(CLOSED);

        assert_eq!(cell.current(), CLOSED);
        assert!(cell.is(&CLOSED));
        assert!(!cell.is(&OPENED));
    }

    #[test]
    fn set_is_visible_to_next_read() {
        let cell = StateCell::new(CLOSED);

        cell.set(OPENED);

        assert_eq!(cell.current(), OPENED);
        assert!(cell.is(&OPENED));
    }

    #[test]
    fn default_and_from_build_cells() {
        let cell: StateCell<i32> = StateCell::default();
        assert_eq!(cell.current(), 0);

        let cell = StateCell::from("Closed");
        assert_eq!(cell.into_inner(), "Closed");
    }

    #[test]
    fn debug_prints_current_state() {
        let cell = StateCell::new("Opened");
        assert_eq!(format!("{cell:?}"), "StateCell(\"Opened\")");
    }

    #[test]
    fn concurrent_sets_never_tear() {
        // Each writer stores a value whose halves must always match.
        let cell = Arc::new(StateCell::new((0u64, 0u64)));

        let writers: Vec<_> = (1..=8u64)
            .map(|n| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        cell.set((n, n));
                    }
                })
            })
            .collect();

        for _ in 0..1_000 {
            let (a, b) = cell.current();
            assert_eq!(a, b);
        }

        for writer in writers {
            writer.join().unwrap();
        }

        let (a, b) = cell.current();
        assert_eq!(a, b);
        assert!((1..=8).contains(&a));
    }
}
