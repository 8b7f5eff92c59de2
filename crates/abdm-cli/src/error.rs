//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use abdm_core::{CoreError, PathError, SettingsError, StoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings storage error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Storage(_) => 73,  // EX_CANTCREAT (closest fit)
        }
    }

    /// Classify an error returned by a handler.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(core) = err.downcast_ref::<CoreError>() {
            Self::from_core(core)
        } else if let Some(settings) = err.downcast_ref::<SettingsError>() {
            Self::from_settings(settings)
        } else if let Some(store) = err.downcast_ref::<StoreError>() {
            Self::Storage(store.to_string())
        } else if let Some(path) = err.downcast_ref::<PathError>() {
            Self::Config(path.to_string())
        } else if let Some(io) = err.downcast_ref::<std::io::Error>() {
            Self::Io(io.to_string())
        } else {
            Self::Core(format!("{err:#}"))
        }
    }

    fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Store(store_err) => Self::Storage(store_err.to_string()),
            CoreError::Settings(settings_err) => Self::from_settings(settings_err),
            CoreError::Path(path_err) => Self::Config(path_err.to_string()),
        }
    }

    fn from_settings(err: &SettingsError) -> Self {
        match err {
            SettingsError::UnknownKey(_) | SettingsError::InvalidValue { .. } => {
                Self::Arguments(err.to_string())
            }
            _ => Self::Config(err.to_string()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_maps_to_storage() {
        let err = CliError::from(CoreError::Store(StoreError::WriteFailed("disk full".into())));
        assert!(matches!(err, CliError::Storage(_)));
        assert_eq!(err.exit_code(), 73);
    }

    #[test]
    fn test_unknown_key_is_usage_error() {
        let err = anyhow::Error::from(SettingsError::UnknownKey("colour".into()));
        assert_eq!(CliError::from_anyhow(&err).exit_code(), 2);
    }

    #[test]
    fn test_validation_error_is_config_error() {
        let err = anyhow::Error::from(CoreError::Settings(SettingsError::InvalidThreadCount(99)));
        let cli_err = CliError::from_anyhow(&err);
        assert_eq!(cli_err.exit_code(), 78);
        assert!(cli_err.to_string().contains("99"));
    }

    #[test]
    fn test_io_error_from_handler_is_io_error() {
        let err = anyhow::Error::from(std::io::Error::other("stdin closed"));
        let cli_err = CliError::from_anyhow(&err);
        assert!(matches!(cli_err, CliError::Io(_)));
        assert_eq!(cli_err.exit_code(), 74);
    }

    #[test]
    fn test_unclassified_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(CliError::from_anyhow(&err).exit_code(), 1);
    }
}
