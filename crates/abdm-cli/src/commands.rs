//! Top-level commands.

use clap::Subcommand;

use crate::config_commands::SettingsCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for all ABDM data files
    Paths,

    /// View or change application settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}
