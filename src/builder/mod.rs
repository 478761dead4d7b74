//! Builder API for ergonomic transition table construction.
//!
//! This module provides a fluent builder and enum-declaring macros for
//! creating transition tables with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TableBuilder;

use crate::core::{Event, State};
use crate::table::Transition;

/// Create a transition from its parts.
///
/// # Example
///
/// ```
/// use fsmtable::builder::transition;
///
/// let open = transition("Open", "Closed", "Opened");
/// assert_eq!(open.to, "Opened");
/// ```
pub fn transition<S: State, E: Event>(event: E, from: S, to: S) -> Transition<S, E> {
    Transition::new(event, from, to)
}

/// Create self-transitions for `event` in every listed state.
///
/// Useful for events a state accepts without moving, such as a repeated
/// open on an already opened door.
///
/// # Example
///
/// ```
/// use fsmtable::builder::self_transitions;
///
/// let stay = self_transitions("Ping", ["Idle", "Busy"]);
/// assert_eq!(stay.len(), 2);
/// assert!(stay.iter().all(|t| t.is_self_transition()));
/// ```
pub fn self_transitions<S, E, I>(event: E, states: I) -> Vec<Transition<S, E>>
where
    S: State,
    E: Event,
    I: IntoIterator<Item = S>,
{
    states
        .into_iter()
        .map(|state| Transition::new(event.clone(), state.clone(), state))
        .collect()
}
