use std::path::{Path, PathBuf};

use crate::kernel::services::ports::settings::{Settings, SettingsError};

const SETTINGS_DIR: &str = ".textchange";
const SETTINGS_FILE: &str = "settings.json";

/// `$HOME/.textchange/settings.json`, when a home directory is known.
pub fn default_settings_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn parse_settings(data: &str) -> Result<Settings, SettingsError> {
    Ok(serde_json::from_str(data)?)
}

pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    parse_settings(&data)
}

/// Writes default settings to `path` unless a file already exists there.
pub fn ensure_settings_file(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
