//! Settings subcommands.

use clap::Subcommand;

/// Settings command variants.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show all current application settings
    Show,
    /// Print the value of one setting
    Get {
        /// Setting key, e.g. `threadCount`
        key: String,
    },
    /// Change one setting
    Set {
        /// Setting key, e.g. `threadCount`
        key: String,
        /// New value (`true`/`false` for switches)
        value: String,
    },
    /// Reset all settings to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Print a setting every time it changes, until interrupted
    Watch {
        /// Setting key, e.g. `speedLimit`
        key: String,
    },
}
