//! The transition-table engine.
//!
//! A [`TransitionTable`] is built once from a list of [`Transition`] rules and
//! one callback per state, then drives any number of
//! [`StateCell`](crate::core::StateCell)s:
//!
//! - Construction validates uniqueness of (event, from) pairs and callback
//!   coverage, and is the only validation point
//! - Dispatch resolves an event against a cell's current state and runs the
//!   exit, event and entry callbacks in that order

mod coverage;
mod engine;
mod error;
mod transition;

pub use coverage::Coverage;
pub use engine::{Callback, Callbacks, TransitionTable};
pub use error::DispatchError;
pub use transition::Transition;
