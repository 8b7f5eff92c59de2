//! Settings store implementations.
//!
//! Each store implements the `SettingsStore` port from `abdm-core`.

mod json_file_settings_store;
mod sqlite_settings_store;

pub use json_file_settings_store::JsonFileSettingsStore;
pub use sqlite_settings_store::SqliteSettingsStore;
