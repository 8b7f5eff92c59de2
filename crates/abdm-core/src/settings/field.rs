//! Field selectors over [`AppSettings`].
//!
//! [`SettingsField`] is a typed lens: it names one field, its key and how
//! to read and replace it. The zero-sized markers in [`fields`] implement it
//! for every field. [`FieldName`] is the runtime counterpart used by
//! adapters that receive key names as strings.

use std::fmt;
use std::str::FromStr;

use super::SettingsError;
use super::document::ValueKind;
use super::keys::{self, Key, SettingType};
use super::model::AppSettings;

/// A single field of [`AppSettings`].
pub trait SettingsField: Copy + Send + Sync + 'static {
    type Value: SettingType + Clone + PartialEq + fmt::Debug + Send + Sync + 'static;

    const KEY: Key<Self::Value>;

    fn get(settings: &AppSettings) -> Self::Value;

    fn set(settings: &mut AppSettings, value: Self::Value);
}

macro_rules! settings_fields {
    ($($marker:ident => $field:ident: $ty:ty = $key:path;)*) => {
        /// Marker types selecting individual settings fields.
        pub mod fields {
            use super::*;

            $(
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
                pub struct $marker;

                impl SettingsField for $marker {
                    type Value = $ty;

                    const KEY: Key<$ty> = $key;

                    fn get(settings: &AppSettings) -> $ty {
                        settings.$field.clone()
                    }

                    fn set(settings: &mut AppSettings, value: $ty) {
                        settings.$field = value;
                    }
                }
            )*
        }

        /// Runtime field selector.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FieldName {
            $($marker,)*
        }

        impl FieldName {
            /// Every field, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$marker,)*];

            /// The document key name for this field.
            pub const fn key_name(self) -> &'static str {
                match self {
                    $(Self::$marker => $key.name(),)*
                }
            }

            /// Storage type of the field.
            pub const fn kind(self) -> ValueKind {
                match self {
                    $(Self::$marker => <$ty as SettingType>::KIND,)*
                }
            }

            /// Render the field's current value for display.
            pub fn display_value(self, settings: &AppSettings) -> String {
                match self {
                    $(Self::$marker => settings.$field.to_string(),)*
                }
            }

            /// Parse `raw` according to the field's type and store it.
            pub fn apply_raw(self, settings: &mut AppSettings, raw: &str) -> Result<(), SettingsError> {
                match self {
                    $(Self::$marker => settings.$field = parse_raw(self, raw)?,)*
                }
                Ok(())
            }
        }
    };
}

settings_fields! {
    Theme => theme: String = keys::THEME;
    MergeTopBarWithTitleBar => merge_top_bar_with_title_bar: bool = keys::MERGE_TOP_BAR_WITH_TITLE_BAR;
    ThreadCount => thread_count: i32 = keys::THREAD_COUNT;
    DynamicPartCreation => dynamic_part_creation: bool = keys::DYNAMIC_PART_CREATION;
    UseServerLastModifiedTime => use_server_last_modified_time: bool = keys::USE_SERVER_LAST_MODIFIED_TIME;
    UseSparseFileAllocation => use_sparse_file_allocation: bool = keys::USE_SPARSE_FILE_ALLOCATION;
    UseAverageSpeed => use_average_speed: bool = keys::USE_AVERAGE_SPEED;
    SpeedLimit => speed_limit: i64 = keys::SPEED_LIMIT;
    AutoStartOnBoot => auto_start_on_boot: bool = keys::AUTO_START_ON_BOOT;
    NotificationSound => notification_sound: bool = keys::NOTIFICATION_SOUND;
    DefaultDownloadFolder => default_download_folder: String = keys::DEFAULT_DOWNLOAD_FOLDER;
    BrowserIntegrationEnabled => browser_integration_enabled: bool = keys::BROWSER_INTEGRATION_ENABLED;
    BrowserIntegrationPort => browser_integration_port: i32 = keys::BROWSER_INTEGRATION_PORT;
}

fn parse_raw<T: FromStr>(field: FieldName, raw: &str) -> Result<T, SettingsError> {
    raw.trim().parse().map_err(|_| SettingsError::InvalidValue {
        key: field.key_name().to_string(),
        value: raw.to_string(),
        expected: field.kind(),
    })
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

impl FromStr for FieldName {
    type Err = SettingsError;

    /// Accepts the document key name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.key_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SettingsError::UnknownKey(wanted.to_string()))
    }
}
