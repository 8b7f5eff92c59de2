//! The typed application settings record.

use serde::{Deserialize, Serialize};

use crate::paths::default_download_folder;

/// Default UI theme.
pub const DEFAULT_THEME: &str = "dark";

/// Default number of connections per download.
pub const DEFAULT_THREAD_COUNT: i32 = 5;

/// Default global speed limit in bytes per second (0 = unlimited).
pub const DEFAULT_SPEED_LIMIT: i64 = 0;

/// Default port the browser integration server listens on.
pub const DEFAULT_BROWSER_INTEGRATION_PORT: i32 = 15151;

/// Application settings.
///
/// Every field always holds a value; missing or malformed stored data is
/// replaced by the defaults from [`AppSettings::with_defaults`] when
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// UI theme name.
    pub theme: String,

    /// Draw the application top bar inside the window title bar.
    pub merge_top_bar_with_title_bar: bool,

    /// Connections opened per download.
    pub thread_count: i32,

    /// Split running parts when a connection frees up.
    pub dynamic_part_creation: bool,

    /// Stamp finished files with the server's `Last-Modified` time.
    pub use_server_last_modified_time: bool,

    /// Allocate sparse files instead of pre-filling them.
    pub use_sparse_file_allocation: bool,

    /// Show average speed instead of instantaneous speed.
    pub use_average_speed: bool,

    /// Global speed limit in bytes per second, 0 for unlimited.
    pub speed_limit: i64,

    pub auto_start_on_boot: bool,

    pub notification_sound: bool,

    /// Absolute path new downloads are saved to.
    pub default_download_folder: String,

    pub browser_integration_enabled: bool,

    pub browser_integration_port: i32,
}

impl AppSettings {
    /// Create settings with the built-in defaults.
    ///
    /// The download folder is resolved from the running user's home
    /// directory at call time.
    pub fn with_defaults() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            merge_top_bar_with_title_bar: false,
            thread_count: DEFAULT_THREAD_COUNT,
            dynamic_part_creation: true,
            use_server_last_modified_time: false,
            use_sparse_file_allocation: true,
            use_average_speed: true,
            speed_limit: DEFAULT_SPEED_LIMIT,
            auto_start_on_boot: true,
            notification_sound: true,
            default_download_folder: default_download_folder().to_string_lossy().into_owned(),
            browser_integration_enabled: true,
            browser_integration_port: DEFAULT_BROWSER_INTEGRATION_PORT,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
