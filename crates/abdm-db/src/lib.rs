//! Storage backends for ABDM settings.
//!
//! Implements the `SettingsStore` port from `abdm-core` on top of `SQLite`
//! and a plain JSON file. Entry points use [`StoreFactory`] to pick one.

#![deny(unsafe_code)]

pub mod factory;
pub mod setup;
pub mod stores;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export store implementations
pub use stores::{JsonFileSettingsStore, SqliteSettingsStore};

// Re-export setup functions for convenient access
pub use setup::setup_database;
