//! Selection, batch transforms and clipboard operations.

use super::DesignerState;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Bounds;
use seatkit_core::SeatId;

impl DesignerState {
    /// Replaces the selection.
    pub fn select(&mut self, ids: impl IntoIterator<Item = SeatId>) {
        self.selection.select(ids);
    }

    pub fn add_to_selection(&mut self, ids: impl IntoIterator<Item = SeatId>) {
        self.selection.add(ids);
    }

    pub fn toggle_selection(&mut self, id: SeatId) {
        self.selection.toggle(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn select_all(&mut self) {
        let ids: Vec<SeatId> = self.store.iter().map(|s| s.id).collect();
        self.selection.select(ids);
    }

    pub fn selected_ids(&self) -> Vec<SeatId> {
        self.selection.ids()
    }

    /// Translates every listed object by the same delta under one snapshot.
    ///
    /// Objects moving together are not checked against each other or against
    /// the rest of the layout; only the venue bounds are enforced. Returns how
    /// many objects moved.
    pub fn batch_move(&mut self, ids: &[SeatId], dx: f64, dy: f64) -> LayoutResult<usize> {
        let moving: Vec<Bounds> = self
            .store
            .iter()
            .filter(|s| ids.contains(&s.id))
            .map(|s| s.bounds().translated(dx, dy))
            .collect();
        if moving.is_empty() || (dx == 0.0 && dy == 0.0) {
            return Ok(0);
        }
        if let Some(outside) = moving.iter().find(|b| !self.store.in_bounds(b)) {
            return Err(out_of_bounds(outside));
        }

        self.store.snapshot();
        let moved = self.store.translate(ids, dx, dy);
        self.is_modified = true;
        tracing::debug!("Moved {} objects by ({}, {})", moved, dx, dy);
        Ok(moved)
    }

    /// Moves the whole selection by a delta.
    pub fn move_selection(&mut self, dx: f64, dy: f64) -> LayoutResult<usize> {
        let ids = self.selection.ids();
        self.batch_move(&ids, dx, dy)
    }

    /// Commits a drag of the selection that ends with `active` at (x, y).
    ///
    /// Only the dragged object is checked for overlap, against objects
    /// outside the selection; every selected object must stay in the venue.
    /// Dragging an unselected object selects it first.
    pub fn drag_selection_to(&mut self, active: SeatId, x: f64, y: f64) -> LayoutResult<()> {
        let seat = self.store.get(active).ok_or(LayoutError::NotFound(active))?;
        let (kind, dx, dy) = (seat.kind, x - seat.x, y - seat.y);
        let target = seat.bounds().translated(dx, dy);

        if !self.selection.contains(active) {
            self.selection.select([active]);
        }
        if dx == 0.0 && dy == 0.0 {
            return Ok(());
        }

        let ids = self.selection.ids();
        if let Err(err) = self.store.check_placement(kind, &target, &ids) {
            tracing::debug!("Declined drag of {}: {}", active, err);
            return Err(err);
        }
        self.batch_move(&ids, dx, dy).map(|_| ())
    }

    /// Copies the selection to the clipboard. Returns how many objects were copied.
    pub fn copy_selection(&mut self) -> usize {
        let ids = self.selection.ids();
        self.clipboard.copy(&self.store, &ids)
    }

    /// Pastes the clipboard at `cursor` (or the configured default).
    ///
    /// The pasted objects become the selection.
    pub fn paste(&mut self, cursor: Option<(f64, f64)>) -> LayoutResult<Vec<SeatId>> {
        let cursor = cursor.unwrap_or(self.config.paste.default_cursor);
        let group = self
            .clipboard
            .plan_paste(&self.store, cursor, &self.config.paste)?;
        let ids = self.store.insert_group(group);
        self.selection.select(ids.iter().copied());
        self.is_modified = true;
        tracing::debug!("Pasted {} objects", ids.len());
        Ok(ids)
    }

    /// Removes every selected object and clears the selection.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let ids = self.selection.ids();
        let removed = self.store.remove_many(&ids);
        self.selection.clear();
        if removed > 0 {
            self.occupancy_changed();
        }
        removed
    }
}

fn out_of_bounds(bounds: &Bounds) -> LayoutError {
    LayoutError::OutOfBounds {
        x: bounds.min_x,
        y: bounds.min_y,
        width: bounds.width(),
        height: bounds.height(),
    }
}
