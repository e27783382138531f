//! Settings persistence.
//!
//! Settings live in a `settings.toml` under the platform config directory
//! (e.g. `~/.config/purchaseorderstudio/` on Linux). Loading never fails:
//! a missing or malformed file yields defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

use super::Settings;

const CONFIG_FILENAME: &str = "settings.toml";

/// Path of the settings file, if the platform config directory is known.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "purchase-order-studio", "Purchase Order Studio")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl Settings {
    /// Load settings from disk, falling back to defaults when the file is
    /// missing, unreadable, or malformed.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            tracing::warn!("Could not determine settings path, using defaults");
            return Self::default();
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
            Self::default()
        })
    }

    /// Save settings, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = settings_path().context("could not determine settings path")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("failed to serialize settings")?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}
