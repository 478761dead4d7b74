//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{Event, Signal, State, StateCell};
use crate::table::{Callbacks, Coverage, Transition, TransitionTable};
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for constructing transition tables with a fluent API.
///
/// Validation happens once, in [`build`](TableBuilder::build), with the same
/// rules as [`TransitionTable::new`].
pub struct TableBuilder<S: State, E: Event, A, X> {
    transitions: Vec<Transition<S, E>>,
    callbacks: Callbacks<S, E, A, X>,
    coverage: Coverage,
}

impl<S: State, E: Event, A, X> TableBuilder<S, E, A, X> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            callbacks: HashMap::new(),
            coverage: Coverage::default(),
        }
    }

    /// Add a transition from its parts.
    pub fn transition(self, event: E, from: S, to: S) -> Self {
        self.add_transition(Transition::new(event, from, to))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Register the callback for `state`, replacing any earlier one.
    pub fn on<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&StateCell<S>, &Signal<E>, &A) -> Result<(), X> + Send + Sync + 'static,
    {
        self.callbacks.insert(state, Arc::new(callback));
        self
    }

    /// Set the callback coverage policy. Defaults to [`Coverage::Strict`].
    pub fn coverage(mut self, coverage: Coverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Build the table.
    pub fn build(self) -> Result<TransitionTable<S, E, A, X>, BuildError<S, E>> {
        TransitionTable::with_coverage(self.transitions, self.callbacks, self.coverage)
    }
}

impl<S: State, E: Event, A, X> Default for TableBuilder<S, E, A, X> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    type Builder = TableBuilder<&'static str, &'static str, (), Infallible>;

    #[test]
    fn builder_requires_callbacks_by_default() {
        let result = Builder::new()
            .transition("Open", "Closed", "Opened")
            .on("Closed", |_, _, _| Ok(()))
            .build();

        assert!(matches!(result, Err(BuildError::MissingCallback("Opened"))));
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = Builder::new()
            .transition("Open", "Closed", "Opened")
            .add_transition(Transition::new("Close", "Opened", "Closed"))
            .on("Opened", |_, _, _| Ok(()))
            .on("Closed", |_, _, _| Ok(()))
            .build()
            .unwrap();

        assert_eq!(table.transitions().count(), 2);
        assert!(table.has_callback(&"Opened"));
    }

    #[test]
    fn lenient_builder_accepts_partial_callbacks() {
        let table = Builder::new()
            .transitions(vec![
                Transition::new("Open", "Closed", "Opened"),
                Transition::new("Close", "Opened", "Closed"),
            ])
            .on("Closed", |_, _, _| Ok(()))
            .coverage(Coverage::Lenient)
            .build()
            .unwrap();

        assert_eq!(table.coverage(), Coverage::Lenient);
        assert!(!table.has_callback(&"Opened"));
    }

    #[test]
    fn duplicate_transition_fails_build() {
        let result = Builder::new()
            .transition("Open", "Closed", "Opened")
            .transition("Open", "Closed", "Closed")
            .on("Opened", |_, _, _| Ok(()))
            .on("Closed", |_, _, _| Ok(()))
            .build();

        match result {
            Err(BuildError::DuplicateTransition(t)) => assert_eq!(t.to, "Closed"),
            other => panic!("Expected DuplicateTransition, got {other:?}"),
        }
    }

    #[test]
    fn later_callback_replaces_earlier() {
        let table = Builder::new()
            .transition("Open", "Closed", "Closed")
            .on("Closed", |_, _, _| panic!("replaced callback must not run"))
            .on("Closed", |_, _, _| Ok(()))
            .build()
            .unwrap();

        let cell = StateCell::new("Closed");
        table.dispatch(&cell, "Open", &()).unwrap();
    }
}
