//! The untyped settings document.
//!
//! A [`SettingsDocument`] is the flat key/value blob that stores persist.
//! It knows nothing about which keys the application owns; typed access
//! goes through [`Key`](super::keys::Key).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::keys::{Key, SettingType};

/// Storage type of a single document value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Bool,
    Int,
    Long,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Long => "long",
        };
        f.write_str(name)
    }
}

/// A single value held by a [`SettingsDocument`].
///
/// Serialized untagged, so a document reads as a plain JSON object.
/// Integers that fit in `i32` come back as [`SettingValue::Int`], wider
/// ones as [`SettingValue::Long`].
///
/// A `Key<i64>` entry may therefore hold `Int`: `put` stores a long that
/// fits in `i32` as `Int` too, and `get_typed` widens it back. Compare
/// through `get_typed` rather than matching on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    String(String),
    Bool(bool),
    Int(i32),
    Long(i64),
}

impl SettingValue {
    /// The storage kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Long(l) => write!(f, "{l}"),
        }
    }
}

/// String-keyed map of setting values.
///
/// Keys are unique. A sorted map is used only so that serialized output
/// and debug listings are stable; nothing relies on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    entries: BTreeMap<String, SettingValue>,
}

impl SettingsDocument {
    /// Create an empty document.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Raw lookup by key name.
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries.get(name)
    }

    /// Typed lookup. Returns `None` when the key is absent or holds a value
    /// of an incompatible type.
    pub fn get_typed<T: SettingType>(&self, key: Key<T>) -> Option<T> {
        self.entries.get(key.name()).and_then(T::from_value)
    }

    /// Typed write, replacing any previous value for the key.
    pub fn put<T: SettingType>(&mut self, key: Key<T>, value: T) {
        self.entries
            .insert(key.name().to_string(), value.into_value());
    }

    /// Raw write, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: SettingValue) -> Option<SettingValue> {
        self.entries.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<SettingValue> {
        self.entries.remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, SettingValue)> for SettingsDocument {
    fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SettingsDocument {
    type Item = (String, SettingValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, SettingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
