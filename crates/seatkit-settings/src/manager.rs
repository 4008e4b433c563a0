//! Settings manager
//!
//! Resolves where the layout configuration lives and loads it, falling back
//! to defaults when no file has been written yet.

use crate::config::LayoutConfig;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "seatkit";
const CONFIG_FILE: &str = "layout.toml";

/// Owns the active layout configuration and the path it persists to
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: LayoutConfig,
    path: PathBuf,
}

impl SettingsManager {
    /// Platform config directory for SeatKit (e.g. `~/.config/seatkit`)
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))
    }

    /// Default location of the layout configuration file
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref().to_path_buf();
        let config = if path.exists() {
            LayoutConfig::load_from_file(&path)?
        } else {
            tracing::info!(
                "No layout config at {}, using defaults",
                path.display()
            );
            LayoutConfig::default()
        };
        Ok(Self { config, path })
    }

    /// Load from the platform default location
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_default(Self::default_path()?)
    }

    /// Persist the active configuration, creating parent directories as needed
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        self.config
            .save_to_file(&self.path)
            .map_err(|e| SettingsError::SaveError(e.to_string()))
    }

    /// Get reference to config
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut LayoutConfig {
        &mut self.config
    }

    /// Path the configuration persists to
    pub fn path(&self) -> &Path {
        &self.path
    }
}
