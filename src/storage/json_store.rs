//! JSON file backend for browsing state.
//!
//! Reads are recovered: an unreadable or malformed file is renamed to a
//! timestamped backup and treated as absent, so startup always succeeds.
//! Writes go through a temp file and a rename so a crash mid-write never
//! leaves a truncated target behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::types::errors::StorageError;

/// Reads and parses a JSON state file.
///
/// Returns `None` when the file does not exist. On an I/O or parse
/// failure the file is moved to `<name>.backup-<timestamp>` and `None`
/// is returned; the caller starts with an empty collection. Never
/// errors past this boundary.
pub fn read_or_backup(path: &Path) -> Option<serde_json::Value> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("malformed state file {}: {}", path.display(), e);
                backup_aside(path);
                None
            }
        },
        Err(e) => {
            log::warn!("unreadable state file {}: {}", path.display(), e);
            backup_aside(path);
            None
        }
    }
}

/// Moves a bad state file to a timestamped backup next to the original.
fn backup_aside(path: &Path) {
    let backup = backup_path(path);
    match fs::rename(path, &backup) {
        Ok(()) => log::info!("moved {} to {}", path.display(), backup.display()),
        Err(e) => log::warn!("could not move {} aside: {}", path.display(), e),
    }
}

/// `history.json` becomes `history.json.backup-<unix-seconds>`.
pub fn backup_path(path: &Path) -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "state".to_string());
    path.with_file_name(format!("{}.backup-{}", name, now))
}

/// Serializes `value` and atomically replaces `path` with it.
///
/// The parent directory is created on demand. The content is written to
/// `<name>.tmp`, synced, then renamed over the target.
pub fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            StorageError::WriteFailed(format!("create {}: {}", parent.display(), e))
        })?;
    }

    let json =
        serde_json::to_string_pretty(value).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "state".to_string());
    let tmp = path.with_file_name(format!("{}.tmp", name));

    {
        let mut file = fs::File::create(&tmp)
            .map_err(|e| StorageError::WriteFailed(format!("create {}: {}", tmp.display(), e)))?;
        file.write_all(json.as_bytes())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        file.sync_all()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
    }

    fs::rename(&tmp, path).map_err(|e| {
        StorageError::WriteFailed(format!("rename over {}: {}", path.display(), e))
    })?;
    Ok(())
}
