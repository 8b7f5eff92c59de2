//! `SQLite` implementation of the `SettingsStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

use abdm_core::{SettingValue, SettingsDocument, SettingsStore, StoreError};

/// `SQLite` implementation of the `SettingsStore` trait.
///
/// Stores one row per document key in the `settings_kv` table. Each value is
/// the JSON encoding of its [`SettingValue`], so type information survives.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    /// Create a new `SQLite` settings store.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ensure the settings table exists.
    ///
    /// Call this during initialization to set up the schema.
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings_kv (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn load(&self) -> Result<SettingsDocument, StoreError> {
        let rows = sqlx::query("SELECT key, value FROM settings_kv")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let mut doc = SettingsDocument::new();
        for row in rows {
            let key: String = row.get("key");
            let json: String = row.get("value");
            match serde_json::from_str::<SettingValue>(&json) {
                Ok(value) => {
                    doc.insert(key, value);
                }
                Err(e) => warn!(key = %key, error = %e, "Skipping unreadable settings row"),
            }
        }

        debug!(keys = doc.len(), "Loaded settings from SQLite");
        Ok(doc)
    }

    async fn replace(&self, doc: &SettingsDocument) -> Result<(), StoreError> {
        let rows = doc
            .iter()
            .map(|(key, value)| serde_json::to_string(value).map(|json| (key, json)))
            .collect::<Result<Vec<_>, serde_json::Error>>()
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        // Dropping the transaction before commit rolls it back.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        sqlx::query("DELETE FROM settings_kv")
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        for (key, json) in &rows {
            sqlx::query("INSERT INTO settings_kv (key, value, updated_at) VALUES (?, ?, ?)")
                .bind(*key)
                .bind(json)
                .bind(&updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        debug!(keys = rows.len(), "Replaced settings in SQLite");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abdm_core::{AppSettings, decode, encode};

    use crate::setup::setup_test_database;

    async fn store() -> SqliteSettingsStore {
        SqliteSettingsStore::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_load_returns_empty_document_when_empty() {
        let store = store().await;
        let doc = store.load().await.unwrap();
        assert!(doc.is_empty());
        assert_eq!(decode(&doc), AppSettings::with_defaults());
    }

    #[tokio::test]
    async fn test_replace_and_load() {
        let store = store().await;
        let settings = AppSettings {
            thread_count: 12,
            speed_limit: 5_000_000_000,
            ..AppSettings::with_defaults()
        };
        let mut doc = encode(SettingsDocument::new(), &settings);
        doc.insert("futureSetting", SettingValue::String("kept".into()));

        store.replace(&doc).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, doc);
        assert_eq!(decode(&loaded).speed_limit, 5_000_000_000);
    }

    #[tokio::test]
    async fn test_replace_drops_removed_keys() {
        let store = store().await;
        let mut doc = SettingsDocument::new();
        doc.insert("a", SettingValue::Bool(true));
        doc.insert("b", SettingValue::Int(1));
        store.replace(&doc).await.unwrap();

        doc.remove("a");
        store.replace(&doc).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(!loaded.contains_key("a"));
        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_rows_are_skipped() {
        let store = store().await;
        sqlx::query("INSERT INTO settings_kv (key, value, updated_at) VALUES (?, ?, ?)")
            .bind("threadCount")
            .bind("{not json")
            .bind("2024-01-01 00:00:00")
            .execute(&store.pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO settings_kv (key, value, updated_at) VALUES (?, ?, ?)")
            .bind("theme")
            .bind("\"light\"")
            .bind("2024-01-01 00:00:00")
            .execute(&store.pool)
            .await
            .unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(decode(&loaded).theme, "light");
        assert_eq!(decode(&loaded).thread_count, 5);
    }
}
