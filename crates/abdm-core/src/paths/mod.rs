//! Path utilities for ABDM data directories and default locations.
//!
//! This module provides the canonical path resolution for all ABDM components:
//! - Data root and settings storage locations
//! - The default download folder
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod database;
mod download;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
pub mod test_utils;

// Error type
pub use error::PathError;

// Platform roots
pub use platform::{DATA_DIR_ENV, data_root, home_dir};

// Settings storage
pub use database::{database_path, settings_file_path};

// Download folder
pub use download::{DEFAULT_DOWNLOAD_SUBDIR, canonicalize_lossy, default_download_folder};

// Pure resolver for testing and CLI
pub use resolver::ResolvedPaths;
