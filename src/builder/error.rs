//! Build errors for transition tables.

use crate::core::{Event, State};
use crate::table::Transition;
use thiserror::Error;

/// Errors that can occur when building a transition table.
///
/// Construction is all-or-nothing: on any of these errors no table exists.
#[derive(Debug, Error)]
pub enum BuildError<S: State, E: Event> {
    /// Two transitions share the same (event, from) pair. Carries the later one.
    #[error(
        "Duplicate transition for event '{}' from state '{}' (to '{}')",
        .0.event.name(),
        .0.from.name(),
        .0.to.name()
    )]
    DuplicateTransition(Transition<S, E>),

    /// A callback was registered for a state no transition mentions.
    #[error("Callback registered for unknown state '{}'", .0.name())]
    UnknownState(S),

    /// A transition endpoint has no callback under strict coverage.
    #[error("State '{}' has no callback. Register one with .on(state, callback)", .0.name())]
    MissingCallback(S),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_transition_message_identifies_pair() {
        let err = BuildError::DuplicateTransition(Transition::new("Open", "Closed", "Opened"));

        assert_eq!(
            err.to_string(),
            "Duplicate transition for event 'Open' from state 'Closed' (to 'Opened')"
        );
    }

    #[test]
    fn unknown_state_message_names_state() {
        let err: BuildError<&str, &str> = BuildError::UnknownState("Ajar");

        assert_eq!(err.to_string(), "Callback registered for unknown state 'Ajar'");
    }
}
