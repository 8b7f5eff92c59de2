//! Table formatting utilities for CLI output.

use std::fmt::Write;

use abdm_core::{AppSettings, FieldName};

/// Render every setting as an aligned `key  value  (type)` table.
pub fn format_settings(settings: &AppSettings) -> String {
    let width = FieldName::ALL
        .iter()
        .map(|field| field.key_name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in FieldName::ALL {
        let _ = writeln!(
            out,
            "  {:<width$}  {}  ({})",
            field.key_name(),
            field.display_value(settings),
            field.kind(),
        );
    }
    out
}
