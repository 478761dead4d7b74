//! Door State Machine
//!
//! This example drives a two-state door through open and close events.
//!
//! Key concepts:
//! - One callback per state sees exit, event and entry signals
//! - Self-transitions deliver only the event
//! - Unknown events fail without touching the state
//!
//! Run with: RUST_LOG=fsmtable=trace cargo run --example door

use fsmtable::core::{Signal, State, StateCell};
use fsmtable::table::TransitionTable;
use fsmtable::{event_enum, state_enum, DispatchError};
use std::convert::Infallible;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Door {
        Opened,
        Closed,
    }
}

event_enum! {
    enum DoorEvent {
        Open,
        Close,
        Kick,
    }
}

fn announce(cell: &StateCell<Door>, signal: &Signal<DoorEvent>, _: &()) -> Result<(), Infallible> {
    println!("  event [{signal}] at state [{}]", cell.current().name());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Door State Machine (fsmtable {}) ===\n", fsmtable::version());

    let table = TransitionTable::<Door, DoorEvent, (), Infallible>::builder()
        .transition(DoorEvent::Open, Door::Closed, Door::Opened)
        .transition(DoorEvent::Close, Door::Opened, Door::Closed)
        .transition(DoorEvent::Open, Door::Opened, Door::Opened)
        .transition(DoorEvent::Close, Door::Closed, Door::Closed)
        .on(Door::Opened, announce)
        .on(Door::Closed, announce)
        .build()
        .expect("door table is valid");

    let door = StateCell::new(Door::Closed);
    println!("Initial state: {:?}\n", door.current());

    for event in [DoorEvent::Open, DoorEvent::Open, DoorEvent::Close, DoorEvent::Kick] {
        println!("dispatch({event:?})");
        match table.dispatch(&door, event, &()) {
            Ok(()) => println!("  -> now {:?}\n", door.current()),
            Err(err @ DispatchError::UnknownTransition { .. }) => {
                println!("  -> rejected: {err}; still {:?}\n", door.current())
            }
            Err(err) => println!("  -> failed: {err}\n"),
        }
    }

    println!("=== Example Complete ===");
}
