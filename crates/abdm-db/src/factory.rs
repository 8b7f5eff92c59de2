//! Composition utilities for building settings stores.
//!
//! This module provides factory functions for wiring up the application
//! with a storage backend. It is focused purely on construction and
//! should not contain any domain logic.

use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;

use abdm_core::SettingsStore;

use crate::setup::setup_database;
use crate::stores::{JsonFileSettingsStore, SqliteSettingsStore};

/// Factory for creating store instances.
///
/// This struct provides composition utilities only, no domain logic.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:~/.local/share/abdm/abdm.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create a `SQLite` settings store from a pool.
    pub fn sqlite_store(pool: SqlitePool) -> Arc<SqliteSettingsStore> {
        Arc::new(SqliteSettingsStore::new(pool))
    }

    /// Create a JSON file settings store.
    pub fn json_store(path: impl Into<std::path::PathBuf>) -> Arc<JsonFileSettingsStore> {
        Arc::new(JsonFileSettingsStore::new(path))
    }

    /// Open the database at `db_path` and return a ready store.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// a `SQLite`-backed store:
    ///
    /// ```ignore
    /// let store = StoreFactory::open_sqlite(&abdm_core::database_path()?).await?;
    /// let service = SettingsService::open(store).await?;
    /// ```
    pub async fn open_sqlite(db_path: &Path) -> anyhow::Result<Arc<dyn SettingsStore>> {
        let pool = setup_database(db_path).await?;
        Ok(Self::sqlite_store(pool))
    }

    /// Return a store backed by the JSON file at `path`.
    pub fn open_json(path: &Path) -> Arc<dyn SettingsStore> {
        Self::json_store(path)
    }
}
