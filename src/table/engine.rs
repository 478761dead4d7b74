//! The transition table and event dispatch.

use crate::builder::{BuildError, TableBuilder};
use crate::core::{Event, Signal, State, StateCell};
use crate::table::coverage::Coverage;
use crate::table::error::DispatchError;
use crate::table::transition::Transition;
use std::collections::{HashMap, HashSet};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

/// Callback invoked for every signal delivered to one state.
///
/// Receives the cell being driven, the signal (entry, exit or the caller's
/// event) and the caller's arguments. Returning `Err` stops the dispatch and
/// hands the error to the dispatch caller unchanged.
pub type Callback<S, E, A, X> =
    Arc<dyn Fn(&StateCell<S>, &Signal<E>, &A) -> Result<(), X> + Send + Sync>;

/// Mapping from each state to its callback.
pub type Callbacks<S, E, A, X> = HashMap<S, Callback<S, E, A, X>>;

/// Immutable, validated table of transitions plus one callback per state.
///
/// The table holds no current state. Each machine instance keeps its own
/// [`StateCell`], and any number of cells can be driven by the same table
/// from any number of threads.
///
/// `A` is the argument type passed through to callbacks and `X` the error
/// type callbacks may return.
///
/// # Example
///
/// ```rust
/// use fsmtable::core::StateCell;
/// use fsmtable::table::TransitionTable;
/// use std::convert::Infallible;
///
/// let table = TransitionTable::<&str, &str, (), Infallible>::builder()
///     .transition("Open", "Closed", "Opened")
///     .transition("Close", "Opened", "Closed")
///     .on("Opened", |_, _, _| Ok(()))
///     .on("Closed", |_, _, _| Ok(()))
///     .build()
///     .unwrap();
///
/// let door = StateCell::new("Closed");
/// table.dispatch(&door, "Open", &()).unwrap();
/// assert!(door.is(&"Opened"));
///
/// assert!(table.dispatch(&door, "fake-event", &()).is_err());
/// assert!(door.is(&"Opened"));
/// ```
pub struct TransitionTable<S: State, E: Event, A = (), X = Infallible> {
    transitions: Vec<Transition<S, E>>,
    index: HashMap<(E, S), usize>,
    states: Vec<S>,
    events: Vec<E>,
    callbacks: Callbacks<S, E, A, X>,
    coverage: Coverage,
}

impl<S: State, E: Event, A, X> TransitionTable<S, E, A, X> {
    /// Build a table requiring a callback for every state it mentions.
    pub fn new<I>(transitions: I, callbacks: Callbacks<S, E, A, X>) -> Result<Self, BuildError<S, E>>
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        Self::with_coverage(transitions, callbacks, Coverage::Strict)
    }

    /// Build a table with an explicit callback coverage policy.
    ///
    /// Fails if two transitions share an (event, from) pair, if a callback
    /// is registered for a state no transition mentions, or, under
    /// [`Coverage::Strict`], if a mentioned state has no callback.
    pub fn with_coverage<I>(
        transitions: I,
        callbacks: Callbacks<S, E, A, X>,
        coverage: Coverage,
    ) -> Result<Self, BuildError<S, E>>
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        let mut states = Vec::new();
        let mut known_states = HashSet::new();
        let mut events = Vec::new();
        let mut known_events = HashSet::new();

        for transition in transitions {
            let key = (transition.event.clone(), transition.from.clone());
            if index.contains_key(&key) {
                return Err(BuildError::DuplicateTransition(transition));
            }

            for state in [&transition.from, &transition.to] {
                if known_states.insert(state.clone()) {
                    states.push(state.clone());
                }
            }
            if known_events.insert(transition.event.clone()) {
                events.push(transition.event.clone());
            }

            index.insert(key, entries.len());
            entries.push(transition);
        }

        // Several unknown states report the one with the smallest name.
        let unknown = callbacks
            .keys()
            .filter(|s| !known_states.contains(*s))
            .min_by(|a, b| a.name().cmp(b.name()));
        if let Some(state) = unknown {
            return Err(BuildError::UnknownState(state.clone()));
        }

        if coverage == Coverage::Strict {
            if let Some(state) = states.iter().find(|s| !callbacks.contains_key(*s)) {
                return Err(BuildError::MissingCallback(state.clone()));
            }
        }

        tracing::debug!(
            transitions = entries.len(),
            states = states.len(),
            callbacks = callbacks.len(),
            ?coverage,
            "built transition table"
        );

        Ok(Self {
            transitions: entries,
            index,
            states,
            events,
            callbacks,
            coverage,
        })
    }

    /// Start building a table with a fluent API.
    pub fn builder() -> TableBuilder<S, E, A, X> {
        TableBuilder::new()
    }

    /// Dispatch `event` against the machine held in `cell`.
    ///
    /// Looks up the transition for `(event, cell.current())`. For a move to a
    /// different state, the source callback sees `Exit` then the event, the
    /// cell is set to the destination, and the destination callback sees
    /// `Entry`. For a self-transition only the event callback runs.
    ///
    /// The cell is read once up front and written once; the sequence as a
    /// whole is not atomic. Concurrent dispatches against one cell need
    /// external serialization.
    pub fn dispatch(
        &self,
        cell: &StateCell<S>,
        event: E,
        args: &A,
    ) -> Result<(), DispatchError<S, E, X>> {
        let key = (event, cell.current());
        let Some(&slot) = self.index.get(&key) else {
            let (event, from) = key;
            tracing::debug!(
                state = from.name(),
                event = event.name(),
                "no transition for event"
            );
            return Err(DispatchError::UnknownTransition { from, event });
        };

        let (event, _) = key;
        let transition = &self.transitions[slot];
        let source = self.callback(&transition.from)?;

        if transition.is_self_transition() {
            tracing::debug!(
                state = transition.from.name(),
                event = event.name(),
                "self transition"
            );
            return self.invoke(source, cell, &transition.from, &Signal::Event(event), args);
        }

        let target = self.callback(&transition.to)?;

        tracing::debug!(
            from = transition.from.name(),
            to = transition.to.name(),
            event = event.name(),
            "transition"
        );

        self.invoke(source, cell, &transition.from, &Signal::Exit, args)?;
        self.invoke(source, cell, &transition.from, &Signal::Event(event), args)?;
        cell.set(transition.to.clone());
        self.invoke(target, cell, &transition.to, &Signal::Entry, args)
    }

    /// Get the transition registered for `event` in state `from`.
    pub fn transition(&self, event: &E, from: &S) -> Option<&Transition<S, E>> {
        self.index
            .get(&(event.clone(), from.clone()))
            .map(|&slot| &self.transitions[slot])
    }

    /// Check whether `event` has a transition out of `from`.
    pub fn can_fire(&self, from: &S, event: &E) -> bool {
        self.transition(event, from).is_some()
    }

    /// All transitions, in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, E>> {
        self.transitions.iter()
    }

    /// Every state mentioned by a transition, in order of first appearance.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Every distinct event, in order of first appearance.
    pub fn events(&self) -> impl Iterator<Item = &E> {
        self.events.iter()
    }

    pub fn has_callback(&self, state: &S) -> bool {
        self.callbacks.contains_key(state)
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    fn callback(&self, state: &S) -> Result<&Callback<S, E, A, X>, DispatchError<S, E, X>> {
        self.callbacks
            .get(state)
            .ok_or_else(|| DispatchError::MissingCallback(state.clone()))
    }

    fn invoke(
        &self,
        callback: &Callback<S, E, A, X>,
        cell: &StateCell<S>,
        state: &S,
        signal: &Signal<E>,
        args: &A,
    ) -> Result<(), DispatchError<S, E, X>> {
        tracing::trace!(
            state = state.name(),
            signal = signal.name(),
            "invoking state callback"
        );
        callback(cell, signal, args).map_err(DispatchError::Callback)
    }
}

impl<S: State, E: Event, A, X> Clone for TransitionTable<S, E, A, X> {
    fn clone(&self) -> Self {
        Self {
            transitions: self.transitions.clone(),
            index: self.index.clone(),
            states: self.states.clone(),
            events: self.events.clone(),
            callbacks: self.callbacks.clone(),
            coverage: self.coverage,
        }
    }
}

impl<S: State, E: Event, A, X> fmt::Debug for TransitionTable<S, E, A, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let with_callbacks: Vec<&S> = self
            .states
            .iter()
            .filter(|s| self.callbacks.contains_key(*s))
            .collect();

        f.debug_struct("TransitionTable")
            .field("transitions", &self.transitions)
            .field("callbacks", &with_callbacks)
            .field("coverage", &self.coverage)
            .finish()
    }
}
