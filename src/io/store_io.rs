//! Load/save boundary to the durable task store.
//!
//! The store is a single JSON file holding the full task list. It is read
//! once at startup and overwritten in full after every mutation, including
//! the transition to an empty list — deleting the last task must not leave a
//! stale copy on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::recovery::{atomic_write, log_recovery};
use crate::model::task::Task;

/// Fixed store file name under the data directory.
pub const STORE_FILE: &str = "tasks.json";

/// Error type for store writes. Reads never fail (see [`load_tasks`]).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not serialize task list: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Return the path to the store file.
pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE)
}

/// Read the task list from the store file.
///
/// Never fails: a missing or blank file yields an empty list, and malformed
/// content is logged to the recovery log, the corrupt file is removed, and
/// the empty list is returned. The caller always starts from a usable state.
pub fn load_tasks(data_dir: &Path) -> Vec<Task> {
    let path = store_path(data_dir);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            log_recovery(data_dir, "store", &format!("could not read {}: {e}", path.display()));
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&content) {
        Ok(tasks) => tasks,
        Err(e) => {
            log_recovery(
                data_dir,
                "store",
                &format!("discarding malformed {}: {e}", path.display()),
            );
            let _ = fs::remove_file(&path);
            Vec::new()
        }
    }
}

/// Write the full task list to the store file, atomically.
///
/// Called after every mutation with the complete list — an empty list writes
/// an empty array rather than skipping the save.
pub fn save_tasks(data_dir: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let path = store_path(data_dir);
    fs::create_dir_all(data_dir).map_err(|e| StoreError::WriteError {
        path: data_dir.to_path_buf(),
        source: e,
    })?;
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::WriteError {
        path,
        source: e,
    })
}
