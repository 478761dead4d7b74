//! fsmtable: a table-driven finite state machine primitive
//!
//! fsmtable drives embedded state logic (protocol stacks, session handlers)
//! from a fixed table of `(event, state) -> state` transitions and one
//! callback per state. It implements no protocol of its own.
//!
//! # Core Concepts
//!
//! - **TransitionTable**: Immutable, validated transitions plus per-state
//!   callbacks, shareable across threads without locking
//! - **StateCell**: Thread-safe holder of one machine instance's current state
//! - **Signal**: What a callback is told: `Entry`, `Exit`, or the caller's event
//!
//! Dispatching an event that moves the machine calls the source state's
//! callback with `Exit`, then with the event, updates the cell, and finally
//! calls the destination state's callback with `Entry`. A self-transition
//! only delivers the event.
//!
//! Dispatch is synchronous and runs on the caller's thread. There are no
//! timers, queues or background tasks.
//!
//! # Example
//!
//! ```rust
//! use fsmtable::core::{State, StateCell};
//! use fsmtable::table::TransitionTable;
//! use fsmtable::{event_enum, state_enum};
//! use std::convert::Infallible;
//!
//! state_enum! {
//!     enum Door { Opened, Closed }
//! }
//!
//! event_enum! {
//!     enum DoorEvent { Open, Close }
//! }
//!
//! let table = TransitionTable::<Door, DoorEvent, (), Infallible>::builder()
//!     .transition(DoorEvent::Open, Door::Closed, Door::Opened)
//!     .transition(DoorEvent::Close, Door::Opened, Door::Closed)
//!     .transition(DoorEvent::Open, Door::Opened, Door::Opened)
//!     .transition(DoorEvent::Close, Door::Closed, Door::Closed)
//!     .on(Door::Opened, |cell, signal, _| {
//!         println!("event [{signal}] at state [{}]", cell.current().name());
//!         Ok(())
//!     })
//!     .on(Door::Closed, |cell, signal, _| {
//!         println!("event [{signal}] at state [{}]", cell.current().name());
//!         Ok(())
//!     })
//!     .build()
//!     .unwrap();
//!
//! let door = StateCell::new(Door::Closed);
//! table.dispatch(&door, DoorEvent::Open, &()).unwrap();
//! assert!(door.is(&Door::Opened));
//! ```

pub mod builder;
pub mod core;
pub mod table;
mod version;

// Re-export commonly used types
pub use crate::builder::{BuildError, TableBuilder};
pub use crate::core::{Event, Signal, State, StateCell};
pub use crate::table::{Callback, Callbacks, Coverage, DispatchError, Transition, TransitionTable};
pub use crate::version::{version, VERSION};
