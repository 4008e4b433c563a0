//! Seat creation, moves, properties, assignment and undo.

use super::DesignerState;
use crate::error::LayoutResult;
use crate::geometry::snap_to_grid;
use crate::model::ShapeForm;
use crate::seat_store::NewSeat;
use seatkit_core::{PersonId, SeatId};

impl DesignerState {
    /// Snaps a point to the configured grid.
    pub fn snap_point(&self, x: f64, y: f64) -> (f64, f64) {
        let grid = self.store.venue().grid_size;
        (snap_to_grid(x, grid), snap_to_grid(y, grid))
    }

    pub fn create(&mut self, request: NewSeat) -> LayoutResult<SeatId> {
        let id = self.store.create(request)?;
        self.is_modified = true;
        Ok(id)
    }

    /// Adds a seat with the default footprint at (x, y).
    pub fn add_seat(&mut self, x: f64, y: f64) -> LayoutResult<SeatId> {
        self.create(NewSeat::seat(x, y))
    }

    pub fn add_obstacle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        form: ShapeForm,
        label: impl Into<String>,
    ) -> LayoutResult<SeatId> {
        self.create(NewSeat::shape(x, y, width, height, form).with_label(label))
    }

    /// Adds a grid of seats using the configured gaps.
    pub fn create_batch(
        &mut self,
        start_x: f64,
        start_y: f64,
        rows: usize,
        cols: usize,
    ) -> LayoutResult<Vec<SeatId>> {
        let gap_x = self.config.seat.gap_x;
        let gap_y = self.config.seat.gap_y;
        self.create_batch_with_gaps(start_x, start_y, rows, cols, gap_x, gap_y)
    }

    pub fn create_batch_with_gaps(
        &mut self,
        start_x: f64,
        start_y: f64,
        rows: usize,
        cols: usize,
        gap_x: f64,
        gap_y: f64,
    ) -> LayoutResult<Vec<SeatId>> {
        let ids = self
            .store
            .create_batch(start_x, start_y, rows, cols, gap_x, gap_y)?;
        if !ids.is_empty() {
            self.is_modified = true;
        }
        Ok(ids)
    }

    pub fn move_seat(&mut self, id: SeatId, x: f64, y: f64) -> LayoutResult<()> {
        self.store.move_to(id, x, y)?;
        self.is_modified = true;
        Ok(())
    }

    pub fn update_properties(
        &mut self,
        id: SeatId,
        label: Option<String>,
        rank_weight: Option<i64>,
    ) -> LayoutResult<()> {
        self.store.update_properties(id, label, rank_weight)?;
        self.is_modified = true;
        Ok(())
    }

    pub fn toggle_pinned(&mut self, id: SeatId) -> LayoutResult<bool> {
        let pinned = self.store.toggle_pinned(id)?;
        self.is_modified = true;
        Ok(pinned)
    }

    /// Shows or hides an object. Hidden seats no longer count as seating anyone.
    ///
    /// Visibility changes are never placement-checked: showing a seat again
    /// succeeds even when a seat added while it was hidden now overlaps it.
    /// Callers that care move one of the two afterwards.
    pub fn set_visible(&mut self, id: SeatId, visible: bool) -> LayoutResult<()> {
        self.store.set_visible(id, visible)?;
        self.occupancy_changed();
        Ok(())
    }

    pub fn set_zone(&mut self, ids: &[SeatId], zone: Option<&str>) -> usize {
        let changed = self.store.set_zone(ids, zone);
        if changed > 0 {
            self.is_modified = true;
        }
        changed
    }

    pub fn toggle_main_stage(&mut self) -> LayoutResult<bool> {
        let visible = self.store.toggle_main_stage()?;
        self.is_modified = true;
        Ok(visible)
    }

    /// Sets a seat's occupant without checking other seats.
    ///
    /// Use [`DesignerState::drop_person`] to move a person between seats.
    pub fn assign(&mut self, seat_id: SeatId, person: Option<PersonId>) -> LayoutResult<()> {
        self.store.assign(seat_id, person)?;
        self.occupancy_changed();
        Ok(())
    }

    pub fn unassign(&mut self, seat_id: SeatId) -> LayoutResult<()> {
        self.assign(seat_id, None)
    }

    pub fn occupant_of(&self, seat_id: SeatId) -> Option<PersonId> {
        self.store.occupant_of(seat_id)
    }

    pub fn seat_of(&self, person: PersonId) -> Option<SeatId> {
        self.store.seat_of(person).map(|s| s.id)
    }

    /// Empties every seat. Returns how many were occupied.
    pub fn clear_all_assignments(&mut self) -> usize {
        let cleared = self.store.clear_all_assignments();
        if cleared > 0 {
            self.occupancy_changed();
        }
        cleared
    }

    pub fn remove_seat(&mut self, id: SeatId) -> LayoutResult<()> {
        self.store.remove(id)?;
        self.selection.remove(id);
        self.occupancy_changed();
        Ok(())
    }

    /// Restores the seat list from before the last mutation.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.store.undo() {
            return false;
        }
        self.prune_selection();
        self.occupancy_changed();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn undo_depth(&self) -> usize {
        self.store.undo_depth()
    }

    pub fn clear_history(&mut self) {
        self.store.clear_history();
    }
}
