//! Transition rules.

use crate::core::{Event, State};
use serde::{Deserialize, Serialize};

/// A rule mapping an event fired in a source state to a destination state.
///
/// `from == to` is a self-transition. Dispatching it runs the event callback
/// only, with no exit or entry notification.
///
/// Transitions are plain data and can be loaded from any serde format.
///
/// # Example
///
/// ```rust
/// use fsmtable::table::Transition;
///
/// let open = Transition::new("Open", "Closed", "Opened");
/// assert!(!open.is_self_transition());
///
/// let reopen = Transition::new("Open", "Opened", "Opened");
/// assert!(reopen.is_self_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<S, E> {
    /// The event that triggers this transition
    pub event: E,
    /// The state the event must arrive in
    pub from: S,
    /// The state the machine moves to
    pub to: S,
}

impl<S: State, E: Event> Transition<S, E> {
    pub fn new(event: E, from: S, to: S) -> Self {
        Self { event, from, to }
    }

    /// Check whether this transition stays in its source state.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_transition_is_detected() {
        assert!(Transition::new("Close", "Closed", "Closed").is_self_transition());
        assert!(!Transition::new("Close", "Opened", "Closed").is_self_transition());
    }

    #[test]
    fn transitions_load_from_json() {
        let json = r#"[
            {"event": "Open", "from": "Closed", "to": "Opened"},
            {"event": "Close", "from": "Opened", "to": "Closed"}
        ]"#;

        let transitions: Vec<Transition<String, String>> = serde_json::from_str(json).unwrap();

        assert_eq!(transitions.len(), 2);
        assert_eq!(
            transitions[0],
            Transition::new("Open".to_string(), "Closed".to_string(), "Opened".to_string())
        );
    }
}
