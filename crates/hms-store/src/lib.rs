//! Reducer-style application state for the hospital management console.
//!
//! The store holds five ordered record collections, applies actions
//! through a pure transition function, and mirrors every new snapshot
//! into an injected durable slot. See `Store::open` for the startup
//! load-or-seed sequence.

pub mod action;
pub mod reduce;
pub mod seed;
pub mod state;
pub mod store;

pub use action::Action;
pub use reduce::reduce;
pub use seed::generate_initial_state;
pub use state::AppState;
pub use store::{SlotError, StateSlot, Store};
