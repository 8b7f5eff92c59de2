//! Pure path resolver for testing and CLI introspection.
//!
//! Captures all resolved paths in one call, exposed via the `abdm paths`
//! CLI command.

use std::path::PathBuf;

use super::{
    PathError, data_root, database_path, default_download_folder, settings_file_path,
};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file
    pub database_path: PathBuf,
    /// Path to the JSON settings document
    pub settings_file: PathBuf,
    /// Default download folder used when none is configured
    pub default_download_folder: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            database_path: database_path()?,
            settings_file: settings_file_path()?,
            default_download_folder: default_download_folder(),
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "database_path = {}", self.database_path.display())?;
        writeln!(f, "settings_file = {}", self.settings_file.display())?;
        write!(
            f,
            "default_download_folder = {}",
            self.default_download_folder.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn resolve_returns_consistent_paths() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let first = ResolvedPaths::resolve().expect("first resolve");
        let second = ResolvedPaths::resolve().expect("second resolve");

        assert_eq!(first, second, "path resolution should be deterministic");
        assert_eq!(first.data_root, temp.path());
    }

    #[test]
    fn display_format_is_parseable() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let output = ResolvedPaths::resolve().expect("resolve").to_string();

        assert!(output.contains("data_root = "));
        assert!(output.contains("database_path = "));
        assert!(output.contains("settings_file = "));
        assert!(output.contains("default_download_folder = "));
    }
}
