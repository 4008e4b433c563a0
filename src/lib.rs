//! # SeatKit
//!
//! A venue seating planner: lay out seats and obstacles on a virtual
//! floor, rank the seats, and assign a roster of guests by importance or
//! by position.
//!
//! ## Architecture
//!
//! SeatKit is organized as a workspace with multiple crates:
//!
//! 1. **seatkit-core** - Identifiers, the category catalog, core errors
//! 2. **seatkit-settings** - Layout configuration and its persistence
//! 3. **seatkit-designer** - Seat store, undo, selection, clipboard, ranking, roster, files
//! 4. **seatkit** - Command line front end that integrates all crates

pub use seatkit_core::{
    Category, CategoryCatalog, CategoryStyle, Error, PersonId, ProjectError, Result, SeatId,
    CATEGORY_PRESETS,
};

pub use seatkit_settings::{
    ArrangementSettings, HistorySettings, LayoutConfig, PasteSettings, SeatSettings,
    SettingsManager, VenueSettings,
};

pub use seatkit_designer as designer;
pub use seatkit_designer::{
    ArrangeStrategy, ArrangementOutcome, DesignerState, LayoutError, LayoutResult, NewSeat,
    Person, ProjectFile, Seat, SeatKind, SeatingReport, ShapeForm, VenueFile,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
/// adds directives on top of the INFO default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
