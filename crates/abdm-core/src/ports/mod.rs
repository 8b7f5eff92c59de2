//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem implementation details
//! - Stores move whole documents; they never interpret keys

pub mod settings_store;

use thiserror::Error;

pub use settings_store::SettingsStore;

#[cfg(test)]
pub use settings_store::MockSettingsStore;

use crate::paths::PathError;
use crate::settings::SettingsError;

/// Domain-specific errors for settings store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// or filesystem errors) so the facade can report failures uniformly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the persisted document failed.
    #[error("Failed to read settings: {0}")]
    ReadFailed(String),

    /// Atomically replacing the persisted document failed.
    #[error("Failed to write settings: {0}")]
    WriteFailed(String),

    /// The persisted document exists but cannot be interpreted at all.
    #[error("Settings storage is corrupt: {0}")]
    Corrupt(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Whether this error came from a failed persist.
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailed(_))
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),
}
