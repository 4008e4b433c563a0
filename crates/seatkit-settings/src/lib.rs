//! SeatKit Settings Crate
//!
//! Handles layout configuration: venue bounds, seat footprint, arrangement
//! tolerances, undo depth and paste policy, with JSON/TOML persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{
    ArrangementSettings, HistorySettings, LayoutConfig, PasteSettings, SeatSettings,
    VenueSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
