//! Durable storage for the hospital management console.
//!
//! One JSON file holds one state document with the five named record
//! arrays. Saves are atomic (temp file + rename); loads distinguish a
//! never-written slot from a corrupt one so the store can seed or
//! degrade accordingly.

mod error;
mod load;
mod save;
mod slot;

pub use error::{PersistenceError, Result};
pub use load::load_state;
pub use save::save_state;
pub use slot::{DEFAULT_STATE_FILE, FileSlot};
