//! Command-line adapter for ABDM settings.
//!
//! `bootstrap` wires a storage backend into a `SettingsService`; handlers
//! format its results for the terminal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use config_commands::SettingsCommand;
pub use error::CliError;
pub use parser::{Backend, Cli};
