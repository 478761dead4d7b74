//! Dispatch errors.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors that can occur while dispatching an event.
///
/// A failed dispatch never modifies the table. `UnknownTransition` and
/// `MissingCallback` are returned before any callback runs, so the cell is
/// left untouched. A `Callback` error from the exit or event callback also
/// leaves the cell untouched; one from the entry callback is raised after
/// the cell already holds the destination state.
#[derive(Debug, Error)]
pub enum DispatchError<S: State, E: Event, X> {
    #[error("No transition for event '{}' from state '{}'", .event.name(), .from.name())]
    UnknownTransition { from: S, event: E },

    #[error("State '{}' has no callback", .0.name())]
    MissingCallback(S),

    /// Error returned by a state callback, passed through unchanged.
    #[error(transparent)]
    Callback(X),
}

impl<S: State, E: Event, X> DispatchError<S, E, X> {
    /// Take the callback's own error, if that is what this is.
    pub fn into_callback_error(self) -> Option<X> {
        match self {
            Self::Callback(err) => Some(err),
            Self::UnknownTransition { .. } | Self::MissingCallback(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Debug, Error, PartialEq)]
    #[error("link down")]
    struct LinkDown;

    #[test]
    fn unknown_transition_names_state_and_event() {
        let err: DispatchError<&str, &str, Infallible> = DispatchError::UnknownTransition {
            from: "Closed",
            event: "fake-event",
        };

        assert_eq!(
            err.to_string(),
            "No transition for event 'fake-event' from state 'Closed'"
        );
    }

    #[test]
    fn callback_error_is_transparent() {
        let err: DispatchError<&str, &str, LinkDown> = DispatchError::Callback(LinkDown);

        assert_eq!(err.to_string(), "link down");
        assert_eq!(err.into_callback_error(), Some(LinkDown));
    }
}
