//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The storage backend is chosen here and handed to
//! the core `SettingsService`; command handlers only see the service.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use abdm_core::paths::{database_path, settings_file_path};
use abdm_core::{SettingsService, SettingsStore};
use abdm_db::StoreFactory;

use crate::parser::Backend;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConfig {
    /// Where the settings document lives.
    pub backend: Backend,
}

impl CliConfig {
    pub const fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The settings facade.
    pub settings: Arc<SettingsService>,
    /// Backend the settings were loaded from.
    pub backend: Backend,
}

impl CliContext {
    /// Access the settings service.
    pub fn settings(&self) -> &SettingsService {
        &self.settings
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Resolves the storage location for the chosen backend
/// 2. Opens the store (creating the database or directory if needed)
/// 3. Loads the settings document into a `SettingsService`
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let store: Arc<dyn SettingsStore> = match config.backend {
        Backend::Sqlite => {
            let db_path = database_path()?;
            debug!(path = %db_path.display(), "Opening SQLite settings store");
            StoreFactory::open_sqlite(&db_path).await?
        }
        Backend::Json => {
            let file = settings_file_path()?;
            debug!(path = %file.display(), "Opening JSON settings store");
            StoreFactory::open_json(&file)
        }
    };

    bootstrap_with(store, config.backend).await
}

/// Bootstrap over an already constructed store (for testing).
pub async fn bootstrap_with(store: Arc<dyn SettingsStore>, backend: Backend) -> Result<CliContext> {
    let settings = Arc::new(SettingsService::open(store).await?);
    Ok(CliContext { settings, backend })
}

#[cfg(test)]
mod tests {
    use super::*;
    use abdm_core::fields;
    use abdm_db::JsonFileSettingsStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bootstrap_with_json_store() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(JsonFileSettingsStore::new(dir.path().join("settings.json")));

        let ctx = bootstrap_with(store, Backend::Json).await.unwrap();
        assert_eq!(ctx.backend, Backend::Json);
        assert_eq!(ctx.settings().get(fields::ThreadCount), 5);
    }
}
