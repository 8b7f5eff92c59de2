//! Platform-specific path detection and resolution.
//!
//! Private helpers for resolving platform-appropriate roots.
//! Public API is exposed through sibling modules.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "ABDM_DATA_DIR";

/// The running user's home directory.
pub fn home_dir() -> Result<PathBuf, PathError> {
    dirs::home_dir().ok_or(PathError::NoHomeDir)
}

/// Get the root directory for application data (database, settings file).
///
/// Resolution order:
/// 1. `ABDM_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/abdm`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir().ok_or(PathError::NoDataDir)?.join("abdm"),
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
