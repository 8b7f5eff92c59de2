//! Settings store trait definition.
//!
//! This port defines the interface for persisting the settings document.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::StoreError;
use crate::settings::SettingsDocument;

/// Durable holder of the settings document.
///
/// # Design Rules
///
/// - Works with the untyped `SettingsDocument` only; the codec lives in core
/// - `replace` is all-or-nothing: after an error the previously stored
///   document must still be what `load` returns
/// - A store that has never been written loads as an empty document
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the persisted document.
    async fn load(&self) -> Result<SettingsDocument, StoreError>;

    /// Atomically replace the persisted document.
    async fn replace(&self, doc: &SettingsDocument) -> Result<(), StoreError>;
}
