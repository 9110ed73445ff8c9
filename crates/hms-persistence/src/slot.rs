//! File-backed implementation of the store's persistence port.

use std::path::{Path, PathBuf};

use hms_store::{AppState, SlotError, StateSlot};

use crate::load::load_state;
use crate::save::save_state;

/// Default file name for the durable slot, one document per environment.
pub const DEFAULT_STATE_FILE: &str = "hospital-management-state.json";

/// A single JSON file acting as the durable key-value slot.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot at the default file name inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateSlot for FileSlot {
    fn load(&self) -> Result<Option<AppState>, SlotError> {
        Ok(load_state(&self.path)?)
    }

    fn save(&self, state: &AppState) -> Result<(), SlotError> {
        Ok(save_state(state, &self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_model::HospitalDraft;
    use hms_store::{Action, Store};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn fresh_environment_is_seeded_on_first_open() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());

        let store = Store::open(slot.clone());
        assert_eq!(store.state().hospitals.len(), 2);
        // Seed is persisted immediately so a second session sees it.
        assert!(slot.path().exists());

        let second = Store::open(slot);
        assert_eq!(second.state(), store.state());
    }

    #[test]
    fn corrupt_slot_degrades_to_empty_state() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());
        fs::write(slot.path(), "garbage, not a state document").unwrap();

        let store = Store::open(slot);
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn dispatch_reaches_the_file() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());

        let mut store = Store::open(slot.clone());
        store.dispatch(Action::AddHospital(
            HospitalDraft {
                name: Some("Khulna City Hospital".to_string()),
                address: Some("Sonadanga, Khulna".to_string()),
                phone: Some("01600000000".to_string()),
            }
            .finalize()
            .unwrap(),
        ));

        let reopened = Store::open(slot);
        assert_eq!(reopened.state().hospitals.len(), 3);
        assert!(
            reopened
                .state()
                .hospitals
                .iter()
                .any(|h| h.name == "Khulna City Hospital")
        );
    }
}
