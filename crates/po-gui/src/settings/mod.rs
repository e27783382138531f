//! Settings types and configuration for Purchase Order Studio.
//!
//! User-configurable settings: general preferences (dark mode) and the
//! recent order files list. Persisted as TOML in the platform config folder.

mod persistence;

pub use persistence::settings_path;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,

    /// Recently opened order files (persisted for convenience).
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            recent_files: Vec::new(),
        }
    }
}

/// General application preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
    /// Maximum recent order files to remember.
    pub max_recent_files: usize,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            max_recent_files: 10,
        }
    }
}

impl Settings {
    /// Move `path` to the front of the recent files list, dropping
    /// duplicates and trimming to the configured maximum.
    pub fn remember_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.general.max_recent_files);
    }
}
