//! Whole-file JSON persistence shared by the history and stats stores.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

/// Read a JSON file, falling back to `T::default()` when it is missing or unreadable.
///
/// A file that exists but does not parse is moved aside to `<name>.corrupt`
/// so the next save does not destroy it.
pub(crate) fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return T::default();
    }

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Cannot read {}: {}, starting empty", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(value) => value,
        Err(e) => {
            let aside = corrupt_path(path);
            tracing::warn!(
                "Corrupt file {} ({}), moved to {} and starting empty",
                path.display(),
                e,
                aside.display()
            );
            if let Err(e) = fs::rename(path, &aside) {
                tracing::warn!("Failed to move corrupt file aside: {}", e);
            }
            T::default()
        }
    }
}

/// Rewrite the whole file as pretty UTF-8 JSON
pub(crate) fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}
