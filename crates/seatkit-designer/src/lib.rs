//! # SeatKit Designer
//!
//! This crate provides the venue layout and seat assignment engine: the
//! placeable object model, spatial validation, undo history, selection and
//! clipboard, the ranking algorithms, and the roster of candidate occupants.
//!
//! ## Core Components
//!
//! - **Geometry**: bounding-box overlap, containment, grid snapping
//! - **Seat Store**: validated create/move/update/remove with snapshot undo
//! - **Selection & Clipboard**: batch moves and paste with placement retries
//! - **Ranking**: importance and position arrangement, sequential ranking
//! - **Roster**: people and the derived seated flag
//! - **Report / Serialization**: seating report and project files
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (session)
//!   ├── SeatStore ── SnapshotHistory
//!   ├── RosterStore
//!   ├── SelectionManager
//!   ├── Clipboard
//!   └── RankSequencer
//! ```
//!
//! The stores never call each other; `DesignerState` applies a change to
//! the seat store and then resynchronizes the roster.
//!
//! ## Usage
//!
//! ```rust
//! use seatkit_designer::{DesignerState, Person};
//!
//! let mut state = DesignerState::default();
//! state.create_batch(1000.0, 300.0, 2, 5).unwrap();
//! state.add_person(Person::new("Ada", "Director", "Agency", "Minister", 83));
//!
//! let outcome = state.arrange_by_importance();
//! assert_eq!(outcome.assigned, 1);
//! assert_eq!(state.roster().seated().count(), 1);
//! ```

pub mod clipboard;
pub mod designer_state;
pub mod error;
pub mod geometry;
pub mod history;
pub mod model;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod seat_store;
pub mod selection_manager;
pub mod serialization;

pub use clipboard::Clipboard;
pub use designer_state::{DesignerState, LayoutSnapshot};
pub use error::{LayoutError, LayoutResult};
pub use geometry::{snap_to_grid, Bounds};
pub use history::SnapshotHistory;
pub use model::{Person, Seat, SeatKind, ShapeForm, MAIN_STAGE_LABEL, SHAPE_RANK_WEIGHT};
pub use ranking::{
    plan_arrangement, rerank_plan, ArrangeStrategy, ArrangementOutcome, ArrangementPlan,
    RankSequencer, RankingParams,
};
pub use report::{ReportRow, SeatingReport};
pub use roster::RosterStore;
pub use seat_store::{NewSeat, SeatStore};
pub use selection_manager::SelectionManager;
pub use serialization::{ProjectFile, VenueFile, ViewState};
