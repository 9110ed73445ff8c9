//! The session-lifetime store and its persistence port.
//!
//! The store is single-writer by design: every transition happens on one
//! logical thread of control, triggered by a user action. After each
//! dispatch the full snapshot is written back to the durable slot,
//! unconditionally and unbatched.

use tracing::{debug, warn};

use crate::action::Action;
use crate::reduce::reduce;
use crate::seed::generate_initial_state;
use crate::state::AppState;

/// Errors crossing the persistence port.
pub type SlotError = Box<dyn std::error::Error + Send + Sync>;

/// One durable key-value slot holding one serialized state document.
///
/// `load` returns `Ok(None)` when the slot has never been written,
/// and an error when the slot exists but cannot be read back.
pub trait StateSlot {
    fn load(&self) -> Result<Option<AppState>, SlotError>;
    fn save(&self, state: &AppState) -> Result<(), SlotError>;
}

/// The single source of truth for the UI, backed by a durable slot.
pub struct Store<S: StateSlot> {
    state: AppState,
    slot: S,
    /// Bumped on every dispatch so view layers can detect staleness.
    version: u64,
}

impl<S: StateSlot> Store<S> {
    /// Open a store against a slot, running the startup sequence:
    ///
    /// - a readable slot replaces the state with the stored snapshot;
    /// - an empty slot is seeded with fixture data, persisted immediately
    ///   so a fresh environment is pre-populated on first load;
    /// - a corrupt slot is logged and the store starts empty. Nothing
    ///   here is fatal.
    pub fn open(slot: S) -> Self {
        let state = match slot.load() {
            Ok(Some(stored)) => {
                debug!("loaded persisted state");
                reduce(&AppState::default(), Action::ReplaceState(stored))
            }
            Ok(None) => {
                let seeded = generate_initial_state();
                if let Err(error) = slot.save(&seeded) {
                    warn!(%error, "could not persist seed state");
                }
                debug!("seeded initial state");
                reduce(&AppState::default(), Action::ReplaceState(seeded))
            }
            Err(error) => {
                warn!(%error, "could not load persisted state, starting empty");
                AppState::default()
            }
        };
        Self {
            state,
            slot,
            version: 0,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Version of the current snapshot. Strictly increases per dispatch.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply an action and write the resulting snapshot to the slot.
    ///
    /// Returns the new version. A failed write is logged and swallowed:
    /// the in-memory state has already transitioned and the next
    /// successful write carries the full snapshot anyway.
    pub fn dispatch(&mut self, action: Action) -> u64 {
        debug!(action = action.label(), "dispatch");
        self.state = reduce(&self.state, action);
        self.version += 1;
        if let Err(error) = self.slot.save(&self.state) {
            warn!(%error, "could not persist state after dispatch");
        }
        self.version
    }
}
