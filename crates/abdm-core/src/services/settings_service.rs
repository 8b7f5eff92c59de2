//! Settings service - per-field access over the settings document.
//!
//! The store holds one indivisible document. This service keeps the last
//! persisted copy in a `watch` channel so reads never wait, funnels every
//! write through a single async mutex so read-modify-write cycles cannot
//! interleave, and lets observers project their own field from each new
//! document.
//!
//! Once a write reaches the store it runs to completion on its own task,
//! even if the caller stops waiting, so the published document always
//! matches what the store holds.

use std::sync::Arc;

use futures_util::stream::Stream;
use tokio::sync::{Mutex, watch};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};

use crate::ports::{CoreError, SettingsStore, StoreError};
use crate::settings::{
    AppSettings, FieldName, SettingsDocument, SettingsField, codec, validate_settings,
};

/// Service for settings operations.
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
    document: Arc<watch::Sender<Arc<SettingsDocument>>>,
    writer: Arc<Mutex<()>>,
}

impl SettingsService {
    /// Load the document from `store` and create the service.
    pub async fn open(store: Arc<dyn SettingsStore>) -> Result<Self, CoreError> {
        let doc = store.load().await?;
        Ok(Self::with_document(store, doc))
    }

    /// Create the service around a document the caller already loaded.
    pub fn with_document(store: Arc<dyn SettingsStore>, doc: SettingsDocument) -> Self {
        log_unknown_keys(&doc);
        debug!(keys = doc.len(), "Settings document loaded");
        let (document, _) = watch::channel(Arc::new(doc));
        Self {
            store,
            document: Arc::new(document),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Current value of one field.
    pub fn get<F: SettingsField>(&self, _field: F) -> F::Value {
        F::get(&self.snapshot())
    }

    /// Current settings as a whole.
    pub fn snapshot(&self) -> AppSettings {
        codec::decode(&self.current())
    }

    /// Copy of the current document, including keys the model does not own.
    pub fn document(&self) -> SettingsDocument {
        self.current().as_ref().clone()
    }

    /// Replace one field and persist.
    pub async fn set<F: SettingsField>(&self, _field: F, value: F::Value) -> Result<(), CoreError> {
        self.update(move |settings| F::set(settings, value)).await?;
        Ok(())
    }

    /// Apply `mutate` to the current settings and persist the result.
    ///
    /// Returns the settings as written.
    pub async fn update<M>(&self, mutate: M) -> Result<AppSettings, CoreError>
    where
        M: FnOnce(&mut AppSettings) + Send,
    {
        self.try_update(move |settings| {
            mutate(settings);
            Ok(())
        })
        .await
    }

    /// Parse `raw` for `field`, validate the result and persist it.
    pub async fn set_by_name(&self, field: FieldName, raw: &str) -> Result<AppSettings, CoreError> {
        self.try_update(|settings| {
            field.apply_raw(settings, raw)?;
            validate_settings(settings)?;
            Ok(())
        })
        .await
    }

    /// Overwrite every owned key with its default. Unknown keys are kept.
    pub async fn reset(&self) -> Result<AppSettings, CoreError> {
        self.update(|settings| *settings = AppSettings::with_defaults())
            .await
    }

    /// Re-read the store and publish its document.
    pub async fn reload(&self) -> Result<AppSettings, CoreError> {
        let _guard = self.writer.lock().await;
        let doc = self.store.load().await?;
        let settings = codec::decode(&doc);
        self.document.send_if_modified(|current| {
            if **current == doc {
                false
            } else {
                *current = Arc::new(doc);
                true
            }
        });
        Ok(settings)
    }

    /// Values of one field: the current value first, then every change.
    ///
    /// Consecutive equal values are not repeated. The stream ends when the
    /// service is dropped.
    pub fn observe<F: SettingsField>(
        &self,
        _field: F,
    ) -> impl Stream<Item = F::Value> + Send + Unpin + 'static {
        let mut last: Option<F::Value> = None;
        WatchStream::new(self.document.subscribe()).filter_map(move |doc| {
            let value = F::get(&codec::decode(&doc));
            if last.as_ref() == Some(&value) {
                None
            } else {
                last = Some(value.clone());
                Some(value)
            }
        })
    }

    /// Raw document channel, for adapters that project values themselves.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SettingsDocument>> {
        self.document.subscribe()
    }

    fn current(&self) -> Arc<SettingsDocument> {
        Arc::clone(&self.document.borrow())
    }

    /// The single serialization point for writes.
    ///
    /// The published document changes only after the store accepted the
    /// new one.
    async fn try_update<M>(&self, mutate: M) -> Result<AppSettings, CoreError>
    where
        M: FnOnce(&mut AppSettings) -> Result<(), CoreError> + Send,
    {
        let guard = Arc::clone(&self.writer).lock_owned().await;

        let current = self.current();
        let mut settings = codec::decode(&current);
        mutate(&mut settings)?;
        let next = codec::encode(current.as_ref().clone(), &settings);

        if next == *current {
            debug!("Settings unchanged, skipping write");
            return Ok(settings);
        }

        let store = Arc::clone(&self.store);
        let document = Arc::clone(&self.document);
        let commit = tokio::spawn(async move {
            let _guard = guard;
            store.replace(&next).await?;
            document.send_replace(Arc::new(next));
            Ok::<(), StoreError>(())
        });

        commit
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?
            .map_err(|e| {
                warn!(error = %e, "Failed to persist settings");
                match e {
                    StoreError::WriteFailed(_) => e,
                    other => StoreError::WriteFailed(other.to_string()),
                }
            })?;

        info!("Settings saved");
        Ok(settings)
    }
}

fn log_unknown_keys(doc: &SettingsDocument) {
    let unknown: Vec<&str> = codec::unknown_keys(doc).collect();
    if !unknown.is_empty() {
        debug!(?unknown, "Keeping settings keys not owned by this version");
    }
}
