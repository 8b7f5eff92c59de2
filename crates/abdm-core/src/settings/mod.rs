//! Settings domain types and validation.
//!
//! This module contains the typed settings model, the untyped document it is
//! persisted as, and the codec between them. These are pure domain types with
//! no infrastructure dependencies.

pub mod codec;
pub mod document;
mod field;
pub mod keys;
mod model;

pub use codec::{decode, encode, encode_into, owned_keys, unknown_keys};
pub use document::{SettingValue, SettingsDocument, ValueKind};
pub use field::{FieldName, SettingsField, fields};
pub use keys::{Key, SettingType};
pub use model::{
    AppSettings, DEFAULT_BROWSER_INTEGRATION_PORT, DEFAULT_SPEED_LIMIT, DEFAULT_THEME,
    DEFAULT_THREAD_COUNT,
};

/// Largest accepted connection count per download.
pub const MAX_THREAD_COUNT: i32 = 32;

/// Lowest accepted browser integration port.
pub const MIN_BROWSER_INTEGRATION_PORT: i32 = 1024;

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown setting '{0}'")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for '{key}': expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: ValueKind,
    },

    #[error("Thread count must be between 1 and 32, got {0}")]
    InvalidThreadCount(i32),

    #[error("Port must be between 1024 and 65535, got {0}")]
    InvalidPort(i32),

    #[error("Speed limit cannot be negative, got {0}")]
    NegativeSpeedLimit(i64),

    #[error("Theme cannot be empty")]
    EmptyTheme,

    #[error("Download folder cannot be empty")]
    EmptyDownloadFolder,
}

/// Validate settings values.
///
/// Decoding never validates; this is for adapters accepting user input.
pub fn validate_settings(settings: &AppSettings) -> Result<(), SettingsError> {
    if !(1..=MAX_THREAD_COUNT).contains(&settings.thread_count) {
        return Err(SettingsError::InvalidThreadCount(settings.thread_count));
    }

    if !(MIN_BROWSER_INTEGRATION_PORT..=i32::from(u16::MAX))
        .contains(&settings.browser_integration_port)
    {
        return Err(SettingsError::InvalidPort(settings.browser_integration_port));
    }

    if settings.speed_limit < 0 {
        return Err(SettingsError::NegativeSpeedLimit(settings.speed_limit));
    }

    if settings.theme.trim().is_empty() {
        return Err(SettingsError::EmptyTheme);
    }

    if settings.default_download_folder.trim().is_empty() {
        return Err(SettingsError::EmptyDownloadFolder);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_settings_valid() {
        assert!(validate_settings(&AppSettings::with_defaults()).is_ok());
    }

    #[test]
    fn test_validate_thread_count_bounds() {
        for bad in [0, -1, MAX_THREAD_COUNT + 1] {
            let settings = AppSettings {
                thread_count: bad,
                ..AppSettings::with_defaults()
            };
            assert!(matches!(
                validate_settings(&settings),
                Err(SettingsError::InvalidThreadCount(n)) if n == bad
            ));
        }
    }

    #[test]
    fn test_validate_port_too_low() {
        let settings = AppSettings {
            browser_integration_port: 80,
            ..AppSettings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidPort(80))
        ));
    }

    #[test]
    fn test_validate_port_too_high() {
        let settings = AppSettings {
            browser_integration_port: 70_000,
            ..AppSettings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidPort(70_000))
        ));
    }

    #[test]
    fn test_validate_negative_speed_limit() {
        let settings = AppSettings {
            speed_limit: -5,
            ..AppSettings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::NegativeSpeedLimit(-5))
        ));
    }

    #[test]
    fn test_validate_empty_strings() {
        let settings = AppSettings {
            theme: "  ".to_string(),
            ..AppSettings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::EmptyTheme)
        ));

        let settings = AppSettings {
            default_download_folder: String::new(),
            ..AppSettings::with_defaults()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::EmptyDownloadFolder)
        ));
    }
}
