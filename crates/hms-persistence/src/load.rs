//! State loading operations.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use hms_store::AppState;

use crate::error::{PersistenceError, Result};

/// Load a state snapshot from the durable slot.
///
/// Returns `Ok(None)` when the slot has never been written. A file that
/// exists but does not parse yields `PersistenceError::Corrupt`; the
/// caller decides how to degrade (the store logs and starts empty).
pub fn load_state(path: &Path) -> Result<Option<AppState>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let state: AppState =
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::Corrupt {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!("loaded state from {}", path.display());
    Ok(Some(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::save_state;
    use hms_store::generate_initial_state;
    use tempfile::tempdir;

    #[test]
    fn load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let state = generate_initial_state();
        save_state(&state, &path).unwrap();

        let loaded = load_state(&path).unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never-written.json");
        assert!(load_state(&path).unwrap().is_none());
    }

    #[test]
    fn malformed_document_reports_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "this is not a state document").unwrap();

        let result = load_state(&path);
        assert!(matches!(result, Err(PersistenceError::Corrupt { .. })));
    }

    #[test]
    fn wrong_shape_reports_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        // Valid JSON, wrong document shape.
        fs::write(&path, r#"{"hospitals": "not an array"}"#).unwrap();

        let result = load_state(&path);
        assert!(matches!(result, Err(PersistenceError::Corrupt { .. })));
    }
}
