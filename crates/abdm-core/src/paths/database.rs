//! Settings storage locations.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Path to the ABDM `SQLite` database file (`<data_root>/abdm.db`).
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("abdm.db"))
}

/// Path to the JSON settings document (`<data_root>/settings.json`).
pub fn settings_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("settings.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_storage_paths_live_under_data_root() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        assert_eq!(database_path().unwrap(), temp.path().join("abdm.db"));
        assert_eq!(
            settings_file_path().unwrap(),
            temp.path().join("settings.json")
        );
    }
}
