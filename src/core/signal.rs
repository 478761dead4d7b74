//! Signals delivered to state callbacks.

use super::state::Event;
use std::fmt;

/// What a state callback is being told.
///
/// A callback is registered once per state and receives every signal for
/// that state: the synthetic `Exit` when the machine leaves it, the caller's
/// own event while it is the source state, and the synthetic `Entry` when
/// the machine arrives in it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Signal<E> {
    /// The machine has just entered the callback's state.
    Entry,

    /// The machine is about to leave the callback's state.
    Exit,

    /// A caller-defined event fired while in the callback's state.
    Event(E),
}

impl<E> Signal<E> {
    pub fn is_entry(&self) -> bool {
        matches!(self, Self::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// The caller-defined event, if this is not an entry or exit signal.
    pub fn event(&self) -> Option<&E> {
        match self {
            Self::Event(event) => Some(event),
            Self::Entry | Self::Exit => None,
        }
    }
}

impl<E: Event> Signal<E> {
    /// Name for display/logging. Entry and exit use reserved names.
    pub fn name(&self) -> &str {
        match self {
            Self::Entry => "Entry",
            Self::Exit => "Exit",
            Self::Event(event) => event.name(),
        }
    }
}

impl<E: Event> fmt::Display for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_and_exit_are_not_events() {
        let entry: Signal<&str> = Signal::Entry;
        let exit: Signal<&str> = Signal::Exit;

        assert!(entry.is_entry());
        assert!(exit.is_exit());
        assert!(entry.event().is_none());
        assert!(exit.event().is_none());
    }

    #[test]
    fn caller_event_named_entry_stays_an_event() {
        let signal = Signal::Event("Entry");

        assert!(!signal.is_entry());
        assert_eq!(signal.event(), Some(&"Entry"));
        assert_ne!(signal, Signal::Entry);
    }

    #[test]
    fn display_uses_signal_name() {
        assert_eq!(Signal::<&str>::Exit.to_string(), "Exit");
        assert_eq!(Signal::Event("Open").to_string(), "Open");
    }
}
