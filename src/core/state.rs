//! Core traits for state and event identifiers.
//!
//! States and events are opaque, comparable identifiers. The traits only
//! add a human-readable name used for logging and diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is an opaque identifier with no behavior of its own. It must be
/// hashable so the transition table can key on it, and thread-safe so a
/// table can be shared across threads.
///
/// # Example
///
/// ```rust
/// use fsmtable::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Opened,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Opened => "Opened",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Opened.name(), "Opened");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for caller-defined events.
///
/// Events live in their own namespace, distinct from states. The engine's
/// synthetic entry and exit notifications are not events; they are carried
/// by [`Signal`](crate::core::Signal) variants and can never collide with a
/// caller-defined event.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Connecting,
        Connected,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Connecting => "Connecting",
                Self::Connected => "Connected",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Connecting.name(), "Connecting");
        assert_eq!(TestState::Connected.name(), "Connected");
    }

    #[test]
    fn string_states_name_themselves() {
        assert_eq!(State::name(&"Opened"), "Opened");
        assert_eq!(State::name(&String::from("Closed")), "Closed");
    }

    #[test]
    fn string_events_name_themselves() {
        assert_eq!(Event::name(&"Open"), "Open");
        assert_eq!(Event::name(&String::from("Close")), "Close");
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState::Connecting;
        let state2 = TestState::Connecting;
        let state3 = TestState::Connected;

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
