//! Conversion between [`AppSettings`] and [`SettingsDocument`].
//!
//! Both directions are total. `decode` falls back to the default for every
//! field that is missing or holds a value of the wrong type; `encode`
//! overwrites the owned keys and leaves every other key alone, so documents
//! written by newer versions survive a round trip through older ones.

use std::cell::OnceCell;

use super::document::SettingsDocument;
use super::keys::{self, Key, SettingType};
use super::model::AppSettings;

/// Build a model from a document.
pub fn decode(doc: &SettingsDocument) -> AppSettings {
    // Defaults resolve the home directory, so only build them if needed.
    let defaults = OnceCell::new();
    let defaults = &defaults;
    let default = move || defaults.get_or_init(AppSettings::with_defaults);

    AppSettings {
        theme: field(doc, keys::THEME, || default().theme.clone()),
        merge_top_bar_with_title_bar: field(doc, keys::MERGE_TOP_BAR_WITH_TITLE_BAR, || {
            default().merge_top_bar_with_title_bar
        }),
        thread_count: field(doc, keys::THREAD_COUNT, || default().thread_count),
        dynamic_part_creation: field(doc, keys::DYNAMIC_PART_CREATION, || {
            default().dynamic_part_creation
        }),
        use_server_last_modified_time: field(doc, keys::USE_SERVER_LAST_MODIFIED_TIME, || {
            default().use_server_last_modified_time
        }),
        use_sparse_file_allocation: field(doc, keys::USE_SPARSE_FILE_ALLOCATION, || {
            default().use_sparse_file_allocation
        }),
        use_average_speed: field(doc, keys::USE_AVERAGE_SPEED, || default().use_average_speed),
        speed_limit: field(doc, keys::SPEED_LIMIT, || default().speed_limit),
        auto_start_on_boot: field(doc, keys::AUTO_START_ON_BOOT, || default().auto_start_on_boot),
        notification_sound: field(doc, keys::NOTIFICATION_SOUND, || default().notification_sound),
        default_download_folder: field(doc, keys::DEFAULT_DOWNLOAD_FOLDER, || {
            default().default_download_folder.clone()
        }),
        browser_integration_enabled: field(doc, keys::BROWSER_INTEGRATION_ENABLED, || {
            default().browser_integration_enabled
        }),
        browser_integration_port: field(doc, keys::BROWSER_INTEGRATION_PORT, || {
            default().browser_integration_port
        }),
    }
}

fn field<T: SettingType>(doc: &SettingsDocument, key: Key<T>, fallback: impl FnOnce() -> T) -> T {
    doc.get_typed(key).unwrap_or_else(fallback)
}

/// Write every owned field of `model` into `doc`.
pub fn encode_into(doc: &mut SettingsDocument, model: &AppSettings) {
    doc.put(keys::THEME, model.theme.clone());
    doc.put(
        keys::MERGE_TOP_BAR_WITH_TITLE_BAR,
        model.merge_top_bar_with_title_bar,
    );
    doc.put(keys::THREAD_COUNT, model.thread_count);
    doc.put(keys::DYNAMIC_PART_CREATION, model.dynamic_part_creation);
    doc.put(
        keys::USE_SERVER_LAST_MODIFIED_TIME,
        model.use_server_last_modified_time,
    );
    doc.put(
        keys::USE_SPARSE_FILE_ALLOCATION,
        model.use_sparse_file_allocation,
    );
    doc.put(keys::USE_AVERAGE_SPEED, model.use_average_speed);
    doc.put(keys::SPEED_LIMIT, model.speed_limit);
    doc.put(keys::AUTO_START_ON_BOOT, model.auto_start_on_boot);
    doc.put(keys::NOTIFICATION_SOUND, model.notification_sound);
    doc.put(
        keys::DEFAULT_DOWNLOAD_FOLDER,
        model.default_download_folder.clone(),
    );
    doc.put(
        keys::BROWSER_INTEGRATION_ENABLED,
        model.browser_integration_enabled,
    );
    doc.put(keys::BROWSER_INTEGRATION_PORT, model.browser_integration_port);
}

/// Return `doc` with every owned field overwritten from `model`.
pub fn encode(mut doc: SettingsDocument, model: &AppSettings) -> SettingsDocument {
    encode_into(&mut doc, model);
    doc
}

/// Keys in `doc` that belong to the settings model.
pub fn owned_keys(doc: &SettingsDocument) -> impl Iterator<Item = &str> {
    doc.keys().filter(|name| keys::is_owned(name))
}

/// Keys in `doc` that the settings model does not own.
pub fn unknown_keys(doc: &SettingsDocument) -> impl Iterator<Item = &str> {
    doc.keys().filter(|name| !keys::is_owned(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::document::SettingValue;

    fn custom_model() -> AppSettings {
        AppSettings {
            theme: "light".to_string(),
            merge_top_bar_with_title_bar: true,
            thread_count: 16,
            dynamic_part_creation: false,
            use_server_last_modified_time: true,
            use_sparse_file_allocation: false,
            use_average_speed: false,
            speed_limit: 6_000_000_000,
            auto_start_on_boot: false,
            notification_sound: false,
            default_download_folder: "/srv/downloads".to_string(),
            browser_integration_enabled: false,
            browser_integration_port: 20000,
        }
    }

    #[test]
    fn test_decode_empty_document_yields_defaults() {
        assert_eq!(decode(&SettingsDocument::new()), AppSettings::with_defaults());
    }

    #[test]
    fn test_round_trip_through_empty_document() {
        let model = custom_model();
        let doc = encode(SettingsDocument::new(), &model);
        assert_eq!(doc.len(), keys::ALL_KEY_NAMES.len());
        assert_eq!(decode(&doc), model);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let mut base = SettingsDocument::new();
        base.insert("theme", SettingValue::Int(3));
        base.insert("legacyFlag", SettingValue::Bool(true));
        let model = custom_model();

        let once = encode(base, &model);
        let twice = encode(once.clone(), &model);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_encode_preserves_unknown_keys() {
        let mut base = SettingsDocument::new();
        base.insert("futureSetting", SettingValue::String("keep me".into()));
        base.insert("anotherOne", SettingValue::Long(99));

        let doc = encode(base, &AppSettings::with_defaults());
        assert_eq!(
            doc.get("futureSetting"),
            Some(&SettingValue::String("keep me".into()))
        );
        assert_eq!(doc.get("anotherOne"), Some(&SettingValue::Long(99)));
        let unknown: Vec<&str> = unknown_keys(&doc).collect();
        assert_eq!(unknown, vec!["anotherOne", "futureSetting"]);
        assert_eq!(owned_keys(&doc).count(), keys::ALL_KEY_NAMES.len());
    }

    #[test]
    fn test_partial_document() {
        let mut doc = SettingsDocument::new();
        doc.put(keys::THREAD_COUNT, 10);

        let expected = AppSettings {
            thread_count: 10,
            ..AppSettings::with_defaults()
        };
        assert_eq!(decode(&doc), expected);
    }

    #[test]
    fn test_wrong_types_fall_back_per_field() {
        let mut doc = SettingsDocument::new();
        doc.insert("threadCount", SettingValue::String("many".into()));
        doc.insert("notificationSound", SettingValue::Int(0));
        doc.insert("browserIntegrationPort", SettingValue::Long(i64::MAX));
        doc.put(keys::THEME, "light".to_string());

        let decoded = decode(&doc);
        let defaults = AppSettings::with_defaults();
        assert_eq!(decoded.thread_count, defaults.thread_count);
        assert_eq!(decoded.notification_sound, defaults.notification_sound);
        assert_eq!(
            decoded.browser_integration_port,
            defaults.browser_integration_port
        );
        assert_eq!(decoded.theme, "light");
    }

    #[test]
    fn test_decode_does_not_mutate_document() {
        let mut doc = SettingsDocument::new();
        doc.put(keys::SPEED_LIMIT, 1024);
        let before = doc.clone();
        let _ = decode(&doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_speed_limit_accepts_int_encoded_value() {
        let doc: SettingsDocument = serde_json::from_str(r#"{"speedLimit": 2048}"#).unwrap();
        assert_eq!(decode(&doc).speed_limit, 2048);
    }
}
