//! Core domain types, ports and services for ABDM settings.
//!
//! - [`settings`] - the typed model, the untyped document and the codec
//! - [`ports`] - the `SettingsStore` trait and error types
//! - [`services`] - `SettingsService`, per-field get/set/observe
//! - [`paths`] - data directories and the default download folder
//!
//! Storage adapters live in `abdm-db`; this crate has no storage details.

pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use ports::{CoreError, SettingsStore, StoreError};
pub use services::SettingsService;
pub use settings::{
    AppSettings, FieldName, Key, SettingValue, SettingsDocument, SettingsError, SettingsField,
    ValueKind, decode, encode, fields, validate_settings,
};

// Re-export path utilities
pub use paths::{
    PathError, ResolvedPaths, data_root, database_path, default_download_folder,
    settings_file_path,
};
