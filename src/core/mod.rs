//! Core state machine types.
//!
//! This module contains the building blocks shared by the transition table:
//! - State and event identifiers via the `State` and `Event` traits
//! - Signals delivered to state callbacks
//! - The thread-safe `StateCell` holding one machine's current state

mod cell;
mod signal;
mod state;

pub use cell::StateCell;
pub use signal::Signal;
pub use state::{Event, State};
