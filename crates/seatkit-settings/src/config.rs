//! Layout configuration for SeatKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Venue settings (virtual bounds, grid)
//! - Seat settings (default footprint, batch gaps)
//! - Arrangement tolerances
//! - Undo history depth
//! - Paste placement policy

use crate::error::{ConfigError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Virtual venue settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueSettings {
    /// Width of the virtual layout rectangle
    pub width: f64,
    /// Height of the virtual layout rectangle
    pub height: f64,
    /// Grid size used for snapping
    pub grid_size: f64,
}

impl VenueSettings {
    /// X coordinate of the vertical center line used by the arrangement passes
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

impl Default for VenueSettings {
    fn default() -> Self {
        Self {
            width: 3200.0,
            height: 2400.0,
            grid_size: 20.0,
        }
    }
}

/// Seat footprint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatSettings {
    /// Footprint width of an assignable seat
    pub width: f64,
    /// Footprint height of an assignable seat
    pub height: f64,
    /// Horizontal gap between seats placed as a grid
    pub gap_x: f64,
    /// Vertical gap between seats placed as a grid
    pub gap_y: f64,
}

impl Default for SeatSettings {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 150.0,
            gap_x: 10.0,
            gap_y: 10.0,
        }
    }
}

/// Tolerances used when sorting seats into rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangementSettings {
    /// Two y values closer than this belong to the same row
    pub row_tolerance: f64,
    /// Two center distances closer than this are ordered left-to-right
    pub center_tolerance: f64,
}

impl Default for ArrangementSettings {
    fn default() -> Self {
        Self {
            row_tolerance: 20.0,
            center_tolerance: 5.0,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots retained
    pub depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { depth: 30 }
    }
}

/// Clipboard paste placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteSettings {
    /// Diagonal shift applied per attempt when the pasted group overlaps
    pub offset_step: f64,
    /// Maximum number of shifts before the paste is abandoned
    pub max_attempts: u32,
    /// Cursor used when the caller has none
    pub default_cursor: (f64, f64),
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            offset_step: 20.0,
            max_attempts: 10,
            default_cursor: (100.0, 100.0),
        }
    }
}

/// Complete layout configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Venue bounds and grid
    pub venue: VenueSettings,
    /// Seat footprint
    pub seat: SeatSettings,
    /// Arrangement tolerances
    pub arrangement: ArrangementSettings,
    /// Undo depth
    pub history: HistorySettings,
    /// Paste policy
    pub paste: PasteSettings,
}

impl LayoutConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        tracing::debug!("Loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.venue.width <= 0.0 {
            return Err(ConfigError::out_of_range("venue.width", self.venue.width));
        }
        if self.venue.height <= 0.0 {
            return Err(ConfigError::out_of_range("venue.height", self.venue.height));
        }
        if self.venue.grid_size <= 0.0 {
            return Err(ConfigError::out_of_range(
                "venue.grid_size",
                self.venue.grid_size,
            ));
        }

        if self.seat.width <= 0.0 || self.seat.width > self.venue.width {
            return Err(ConfigError::out_of_range("seat.width", self.seat.width));
        }
        if self.seat.height <= 0.0 || self.seat.height > self.venue.height {
            return Err(ConfigError::out_of_range("seat.height", self.seat.height));
        }
        if self.seat.gap_x < 0.0 {
            return Err(ConfigError::out_of_range("seat.gap_x", self.seat.gap_x));
        }
        if self.seat.gap_y < 0.0 {
            return Err(ConfigError::out_of_range("seat.gap_y", self.seat.gap_y));
        }

        if self.arrangement.row_tolerance < 0.0 {
            return Err(ConfigError::out_of_range(
                "arrangement.row_tolerance",
                self.arrangement.row_tolerance,
            ));
        }
        if self.arrangement.center_tolerance < 0.0 {
            return Err(ConfigError::out_of_range(
                "arrangement.center_tolerance",
                self.arrangement.center_tolerance,
            ));
        }

        if self.history.depth == 0 {
            return Err(ConfigError::out_of_range("history.depth", 0));
        }

        if self.paste.offset_step <= 0.0 {
            return Err(ConfigError::out_of_range(
                "paste.offset_step",
                self.paste.offset_step,
            ));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
