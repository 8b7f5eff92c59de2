//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::{Parser, ValueEnum};

use crate::commands::Commands;

/// Storage backend holding the settings document.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    /// `SQLite` database in the data directory
    #[default]
    Sqlite,
    /// Plain JSON file in the data directory
    Json,
}

/// Command-line interface for the ABDM settings store.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "abdm")]
#[command(about = "Inspect and change AB Download Manager settings")]
#[command(version)]
pub struct Cli {
    /// Storage backend for settings
    #[arg(
        long,
        value_enum,
        global = true,
        env = "ABDM_BACKEND",
        default_value_t = Backend::Sqlite
    )]
    pub backend: Backend,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
