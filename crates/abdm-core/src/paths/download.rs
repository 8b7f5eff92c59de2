//! Default download folder resolution.

use std::env;
use std::path::{Component, Path, PathBuf};

use tracing::warn;

use super::platform::home_dir;

/// Location of the default download folder, relative to the home directory.
pub const DEFAULT_DOWNLOAD_SUBDIR: &str = "Downloads/ABDM";

/// The default download folder: `<home>/Downloads/ABDM`, canonical and absolute.
///
/// This never fails. Without a home directory the current directory (or the
/// filesystem root) stands in for it, so a default settings model can always
/// be built.
pub fn default_download_folder() -> PathBuf {
    let home = home_dir().unwrap_or_else(|e| {
        let fallback = env::current_dir().unwrap_or_else(|_| PathBuf::from(std::path::MAIN_SEPARATOR_STR));
        warn!(error = %e, fallback = %fallback.display(), "Using fallback base for download folder");
        fallback
    });
    canonicalize_lossy(&home.join(DEFAULT_DOWNLOAD_SUBDIR))
}

/// Canonicalize a path that may not exist yet.
///
/// The longest existing ancestor is resolved through the filesystem
/// (symlinks followed); the remaining components are normalized lexically.
/// Relative inputs are made absolute against the current directory.
pub fn canonicalize_lossy(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };
    let normalized = normalize_lexically(&absolute);

    let mut existing = normalized.as_path();
    let mut tail: Vec<&std::ffi::OsStr> = Vec::new();
    loop {
        if let Ok(resolved) = existing.canonicalize() {
            return tail.iter().rev().fold(resolved, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name);
                existing = parent;
            }
            _ => return normalized,
        }
    }
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
