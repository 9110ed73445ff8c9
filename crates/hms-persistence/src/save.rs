//! State saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use hms_store::AppState;

use crate::error::{PersistenceError, Result};

/// Save a state snapshot to the durable slot.
///
/// Uses atomic write (temp file + rename) to prevent a torn document on
/// crash or power loss. The whole snapshot is written every time; there
/// are no partial writes. The document carries no schema version field,
/// so format changes are not migration-aware.
pub fn save_state(state: &AppState, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(state)
        .map_err(|e| PersistenceError::Serialization { source: e })?;

    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("saved state to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hms_store::generate_initial_state;
    use tempfile::tempdir;

    #[test]
    fn save_writes_the_five_named_arrays() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        save_state(&generate_initial_state(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        for key in ["hospitals", "doctors", "patients", "cabins", "financialRecords"] {
            assert!(text.contains(&format!("\"{key}\"")), "missing key {key}");
        }
        // No leftover temp file after the rename.
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/slot/state.json");

        save_state(&AppState::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        save_state(&generate_initial_state(), &path).unwrap();
        save_state(&AppState::default(), &path).unwrap();

        let loaded = crate::load::load_state(&path).unwrap().unwrap();
        assert_eq!(loaded, AppState::default());
    }
}
