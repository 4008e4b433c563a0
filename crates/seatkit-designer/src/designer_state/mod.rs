//! Designer session state.
//!
//! `DesignerState` composes the seat store, the roster, the selection, the
//! clipboard and the rank sequencer, and orchestrates calls between them so
//! the stores never reach into each other. Any operation that can change
//! seat occupancy resynchronizes the roster before returning.
//!
//! This module is split into submodules:
//! - `seats`: creation, moves, properties, assignment, undo
//! - `selection`: selection, batch moves, clipboard, delete
//! - `arrange`: arrangement passes, sequential ranking, re-rank
//! - `roster`: people, categories, drop-to-seat
//! - `file_io`: snapshots, project and venue files

mod arrange;
mod file_io;
mod roster;
mod seats;
mod selection;

pub use file_io::LayoutSnapshot;

use crate::clipboard::Clipboard;
use crate::model::{Person, Seat};
use crate::ranking::{RankSequencer, RankingParams};
use crate::roster::RosterStore;
use crate::seat_store::SeatStore;
use crate::selection_manager::SelectionManager;
use crate::serialization::ViewState;
use seatkit_core::CategoryCatalog;
use seatkit_settings::LayoutConfig;
use std::path::PathBuf;

/// One editing session over a single venue layout and roster.
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) store: SeatStore,
    pub(crate) roster: RosterStore,
    pub(crate) selection: SelectionManager,
    pub(crate) clipboard: Clipboard,
    pub(crate) sequencer: RankSequencer,
    pub(crate) catalog: CategoryCatalog,
    pub(crate) config: LayoutConfig,
    pub design_name: String,
    pub background_image: Option<String>,
    pub view_state: ViewState,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates an empty session using `config`.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            store: SeatStore::new(&config),
            roster: RosterStore::new(),
            selection: SelectionManager::new(),
            clipboard: Clipboard::new(),
            sequencer: RankSequencer::new(),
            catalog: CategoryCatalog::with_presets(),
            config,
            design_name: "Untitled".to_string(),
            background_image: None,
            view_state: ViewState::default(),
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn store(&self) -> &SeatStore {
        &self.store
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CategoryCatalog {
        &mut self.catalog
    }

    pub fn seats(&self) -> &[Seat] {
        self.store.seats()
    }

    pub fn people(&self) -> &[Person] {
        self.roster.people()
    }

    /// Ranking inputs for the current venue size and configured tolerances.
    pub fn ranking_params(&self) -> RankingParams {
        RankingParams {
            center_x: self.store.venue().center_x(),
            row_tolerance: self.config.arrangement.row_tolerance,
            center_tolerance: self.config.arrangement.center_tolerance,
        }
    }

    /// Recomputes every person's seated flag. Returns the seated count.
    pub fn synchronize(&mut self) -> usize {
        self.roster.synchronize(self.store.seats())
    }

    /// Marks the session dirty and resynchronizes the roster.
    pub(crate) fn occupancy_changed(&mut self) {
        self.is_modified = true;
        self.synchronize();
    }

    /// Drops selected ids that no longer exist.
    pub(crate) fn prune_selection(&mut self) {
        let store = &self.store;
        self.selection.retain(|id| store.contains(id));
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
