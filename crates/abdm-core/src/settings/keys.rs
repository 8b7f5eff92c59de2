//! Typed keys addressing fields inside a [`SettingsDocument`].
//!
//! A [`Key<T>`] pairs a key name with the Rust type stored under it, so
//! reading an `int` key as a `bool` does not compile.
//!
//! [`SettingsDocument`]: super::document::SettingsDocument

use std::fmt;
use std::marker::PhantomData;

use super::document::{SettingValue, ValueKind};

/// Rust types that can be stored in a settings document.
pub trait SettingType: Sized {
    /// The storage kind written by [`SettingType::into_value`].
    const KIND: ValueKind;

    /// Extract a value, returning `None` if the stored value is not
    /// compatible with this type.
    fn from_value(value: &SettingValue) -> Option<Self>;

    /// Convert into a storable value.
    fn into_value(self) -> SettingValue;
}

impl SettingType for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> SettingValue {
        SettingValue::String(self)
    }
}

impl SettingType for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_value(self) -> SettingValue {
        SettingValue::Bool(self)
    }
}

impl SettingType for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Int(i) => Some(*i),
            // Untyped stores cannot always tell int from long.
            SettingValue::Long(l) => Self::try_from(*l).ok(),
            _ => None,
        }
    }

    fn into_value(self) -> SettingValue {
        SettingValue::Int(self)
    }
}

impl SettingType for i64 {
    const KIND: ValueKind = ValueKind::Long;

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Long(l) => Some(*l),
            SettingValue::Int(i) => Some(Self::from(*i)),
            _ => None,
        }
    }

    /// Stored narrow when it fits, matching what JSON parsing yields.
    fn into_value(self) -> SettingValue {
        i32::try_from(self).map_or(SettingValue::Long(self), SettingValue::Int)
    }
}

/// A typed key name.
pub struct Key<T> {
    name: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _type: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: SettingType> Key<T> {
    pub const fn kind(&self) -> ValueKind {
        T::KIND
    }
}

// Manual impls: derives would require `T: Clone` etc.
impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Key<T> {}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&self.name).finish()
    }
}

pub const fn string_key(name: &'static str) -> Key<String> {
    Key::new(name)
}

pub const fn bool_key(name: &'static str) -> Key<bool> {
    Key::new(name)
}

pub const fn int_key(name: &'static str) -> Key<i32> {
    Key::new(name)
}

pub const fn long_key(name: &'static str) -> Key<i64> {
    Key::new(name)
}

pub const THEME: Key<String> = string_key("theme");
pub const MERGE_TOP_BAR_WITH_TITLE_BAR: Key<bool> = bool_key("mergeTopBarWithTitleBar");
pub const THREAD_COUNT: Key<i32> = int_key("threadCount");
pub const DYNAMIC_PART_CREATION: Key<bool> = bool_key("dynamicPartCreation");
pub const USE_SERVER_LAST_MODIFIED_TIME: Key<bool> = bool_key("useServerLastModifiedTime");
pub const USE_SPARSE_FILE_ALLOCATION: Key<bool> = bool_key("useSparseFileAllocation");
pub const USE_AVERAGE_SPEED: Key<bool> = bool_key("useAverageSpeed");
pub const SPEED_LIMIT: Key<i64> = long_key("speedLimit");
pub const AUTO_START_ON_BOOT: Key<bool> = bool_key("autoStartOnBoot");
pub const NOTIFICATION_SOUND: Key<bool> = bool_key("notificationSound");
pub const DEFAULT_DOWNLOAD_FOLDER: Key<String> = string_key("defaultDownloadFolder");
pub const BROWSER_INTEGRATION_ENABLED: Key<bool> = bool_key("browserIntegrationEnabled");
pub const BROWSER_INTEGRATION_PORT: Key<i32> = int_key("browserIntegrationPort");

/// Every key name owned by [`AppSettings`](super::AppSettings).
pub const ALL_KEY_NAMES: [&str; 13] = [
    THEME.name(),
    MERGE_TOP_BAR_WITH_TITLE_BAR.name(),
    THREAD_COUNT.name(),
    DYNAMIC_PART_CREATION.name(),
    USE_SERVER_LAST_MODIFIED_TIME.name(),
    USE_SPARSE_FILE_ALLOCATION.name(),
    USE_AVERAGE_SPEED.name(),
    SPEED_LIMIT.name(),
    AUTO_START_ON_BOOT.name(),
    NOTIFICATION_SOUND.name(),
    DEFAULT_DOWNLOAD_FOLDER.name(),
    BROWSER_INTEGRATION_ENABLED.name(),
    BROWSER_INTEGRATION_PORT.name(),
];

/// Whether `name` is one of the keys owned by the settings model.
pub fn is_owned(name: &str) -> bool {
    ALL_KEY_NAMES.contains(&name)
}
