//! Single-file JSON implementation of the `SettingsStore` trait.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use abdm_core::{SettingValue, SettingsDocument, SettingsStore, StoreError};

/// Keeps the settings document as one pretty-printed JSON object.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers only ever see a complete document.
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> Result<SettingsDocument, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file yet");
                return Ok(SettingsDocument::new());
            }
            Err(e) => return Err(StoreError::ReadFailed(e.to_string())),
        };

        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&contents).map_err(|e| {
                StoreError::Corrupt(format!("{}: {e}", self.path.display()))
            })?;

        let mut doc = SettingsDocument::new();
        for (key, raw) in object {
            match serde_json::from_value::<SettingValue>(raw) {
                Ok(value) => {
                    doc.insert(key, value);
                }
                Err(e) => warn!(key = %key, error = %e, "Skipping unreadable settings entry"),
            }
        }

        debug!(path = %self.path.display(), keys = doc.len(), "Loaded settings file");
        Ok(doc)
    }

    async fn replace(&self, doc: &SettingsDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, json.as_bytes()))
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        debug!(path = %self.path.display(), keys = doc.len(), "Replaced settings file");
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
