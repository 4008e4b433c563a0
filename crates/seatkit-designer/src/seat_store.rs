//! Entity store for placeable objects.
//!
//! `SeatStore` owns the seat list and its undo history. Every creation and
//! position change is validated against the venue bounds and, for seats,
//! against every other visible seat before it is committed. Mutations record
//! a snapshot of the full list first so `undo` restores the prior state
//! exactly.

use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Bounds;
use crate::history::SnapshotHistory;
use crate::model::{Seat, SeatKind, ShapeForm, MAIN_STAGE_LABEL};
use seatkit_core::{PersonId, SeatId};
use seatkit_settings::{LayoutConfig, SeatSettings, VenueSettings};

const MAIN_STAGE_WIDTH: f64 = 600.0;
const MAIN_STAGE_HEIGHT: f64 = 150.0;
const MAIN_STAGE_Y: f64 = 50.0;

/// Parameters for a single object creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSeat {
    pub kind: SeatKind,
    pub x: f64,
    pub y: f64,
    /// Falls back to the configured seat footprint when `None`
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub form: ShapeForm,
    /// Falls back to the assigned rank weight when `None`
    pub label: Option<String>,
    pub zone: Option<String>,
}

impl NewSeat {
    /// An assignable seat with the default footprint.
    pub fn seat(x: f64, y: f64) -> Self {
        Self {
            kind: SeatKind::Seat,
            x,
            y,
            width: None,
            height: None,
            form: ShapeForm::Rectangle,
            label: None,
            zone: None,
        }
    }

    /// A shape with an explicit size.
    pub fn shape(x: f64, y: f64, width: f64, height: f64, form: ShapeForm) -> Self {
        Self {
            kind: SeatKind::Shape,
            width: Some(width),
            height: Some(height),
            form,
            ..Self::seat(x, y)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Owns every placeable object plus the snapshot history used for undo.
#[derive(Debug, Clone)]
pub struct SeatStore {
    seats: Vec<Seat>,
    history: SnapshotHistory<Vec<Seat>>,
    venue: VenueSettings,
    seat_defaults: SeatSettings,
}

impl SeatStore {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            seats: Vec::new(),
            history: SnapshotHistory::with_depth(config.history.depth),
            venue: config.venue.clone(),
            seat_defaults: config.seat.clone(),
        }
    }

    pub fn venue(&self) -> &VenueSettings {
        &self.venue
    }

    pub fn seat_defaults(&self) -> &SeatSettings {
        &self.seat_defaults
    }

    /// Resizes the virtual venue. Existing objects are not revalidated.
    pub(crate) fn set_venue_size(&mut self, width: f64, height: f64) {
        self.venue.width = width;
        self.venue.height = height;
    }

    /// The fixed virtual rectangle every object must stay inside.
    pub fn virtual_bounds(&self) -> Bounds {
        Bounds::from_rect(0.0, 0.0, self.venue.width, self.venue.height)
    }

    pub fn in_bounds(&self, bounds: &Bounds) -> bool {
        self.virtual_bounds().contains(bounds)
    }

    /// First visible seat (not in `exclude`) whose footprint overlaps `bounds`.
    pub fn find_collision(&self, bounds: &Bounds, exclude: &[SeatId]) -> Option<SeatId> {
        self.seats
            .iter()
            .filter(|s| s.blocks_seats() && !exclude.contains(&s.id))
            .find(|s| s.bounds().intersects(bounds))
            .map(|s| s.id)
    }

    /// Checks a proposed footprint without mutating anything.
    ///
    /// Shapes only need to stay inside the venue; seats must also clear every
    /// visible seat not listed in `exclude`.
    pub fn check_placement(
        &self,
        kind: SeatKind,
        bounds: &Bounds,
        exclude: &[SeatId],
    ) -> LayoutResult<()> {
        if !self.in_bounds(bounds) {
            return Err(LayoutError::OutOfBounds {
                x: bounds.min_x,
                y: bounds.min_y,
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        if kind == SeatKind::Seat {
            if let Some(blocking) = self.find_collision(bounds, exclude) {
                return Err(LayoutError::Overlap { blocking });
            }
        }
        Ok(())
    }

    /// Creates one object after validating its footprint.
    ///
    /// Seats receive rank weight `seat_count() + 1` and, unless a label is
    /// given, that number as their label.
    pub fn create(&mut self, request: NewSeat) -> LayoutResult<SeatId> {
        let width = request.width.unwrap_or(self.seat_defaults.width);
        let height = request.height.unwrap_or(self.seat_defaults.height);
        let bounds = Bounds::from_rect(request.x, request.y, width, height);

        if let Err(err) = self.check_placement(request.kind, &bounds, &[]) {
            tracing::debug!("Declined create at ({}, {}): {}", request.x, request.y, err);
            return Err(err);
        }

        let mut seat = match request.kind {
            SeatKind::Seat => {
                let rank = self.next_rank_weight();
                let label = request.label.unwrap_or_else(|| rank.to_string());
                Seat::new_seat(request.x, request.y, width, height, label, rank)
            }
            SeatKind::Shape => {
                let label = request.label.unwrap_or_else(|| "Shape".to_string());
                Seat::new_shape(request.x, request.y, width, height, request.form, label)
            }
        };
        seat.zone = request.zone;

        let id = seat.id;
        self.snapshot();
        tracing::debug!("Created {:?} {} at ({}, {})", seat.kind, id, seat.x, seat.y);
        self.seats.push(seat);
        Ok(id)
    }

    /// Creates a seat with the default footprint.
    pub fn add_seat(&mut self, x: f64, y: f64) -> LayoutResult<SeatId> {
        self.create(NewSeat::seat(x, y))
    }

    /// Creates a stage or obstacle shape.
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

    /// Creates a `rows` x `cols` grid of seats in row-major order.
    ///
    /// Fails as a unit: either every cell is placed or none is. Negative gaps
    /// are treated as zero so cells never overlap each other. An empty grid
    /// is a no-op.
    pub fn create_batch(
        &mut self,
        start_x: f64,
        start_y: f64,
        rows: usize,
        cols: usize,
        gap_x: f64,
        gap_y: f64,
    ) -> LayoutResult<Vec<SeatId>> {
        if rows == 0 || cols == 0 {
            return Ok(Vec::new());
        }

        let width = self.seat_defaults.width;
        let height = self.seat_defaults.height;
        let gap_x = gap_x.max(0.0);
        let gap_y = gap_y.max(0.0);
        let step_x = width + gap_x;
        let step_y = height + gap_y;

        let total = Bounds::from_rect(
            start_x,
            start_y,
            cols as f64 * step_x - gap_x,
            rows as f64 * step_y - gap_y,
        );
        if !self.in_bounds(&total) {
            tracing::debug!("Declined {}x{} batch: grid leaves the venue", rows, cols);
            return Err(LayoutError::OutOfBounds {
                x: total.min_x,
                y: total.min_y,
                width: total.width(),
                height: total.height(),
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = start_x + col as f64 * step_x;
                let y = start_y + row as f64 * step_y;
                let cell = Bounds::from_rect(x, y, width, height);
                if let Some(blocking) = self.find_collision(&cell, &[]) {
                    tracing::debug!("Declined {}x{} batch: cell overlaps {}", rows, cols, blocking);
                    return Err(LayoutError::Overlap { blocking });
                }
                cells.push((x, y));
            }
        }

        self.snapshot();
        let mut rank = self.next_rank_weight();
        let mut ids = Vec::with_capacity(cells.len());
        for (x, y) in cells {
            let seat = Seat::new_seat(x, y, width, height, rank.to_string(), rank);
            ids.push(seat.id);
            self.seats.push(seat);
            rank += 1;
        }
        tracing::debug!("Created {}x{} seat grid at ({}, {})", rows, cols, start_x, start_y);
        Ok(ids)
    }

    /// Moves one object to a new top-left position.
    ///
    /// A declined move leaves the object where it was. Moving to the current
    /// position succeeds without recording history.
    pub fn move_to(&mut self, id: SeatId, x: f64, y: f64) -> LayoutResult<()> {
        let index = self.index_of(id)?;
        let seat = &self.seats[index];
        if seat.x == x && seat.y == y {
            return Ok(());
        }

        let bounds = Bounds::from_rect(x, y, seat.width, seat.height);
        if let Err(err) = self.check_placement(seat.kind, &bounds, &[id]) {
            tracing::debug!("Declined move of {}: {}", id, err);
            return Err(err);
        }

        self.snapshot();
        let seat = &mut self.seats[index];
        seat.x = x;
        seat.y = y;
        tracing::debug!("Moved {} to ({}, {})", id, x, y);
        Ok(())
    }

    /// Shifts every listed object by the same delta.
    ///
    /// No validation and no history: callers snapshot once when a drag
    /// begins and validate the committed position themselves. Returns the
    /// number of objects moved.
    pub fn translate(&mut self, ids: &[SeatId], dx: f64, dy: f64) -> usize {
        let mut moved = 0;
        for seat in self.seats.iter_mut().filter(|s| ids.contains(&s.id)) {
            seat.translate(dx, dy);
            moved += 1;
        }
        moved
    }

    /// Sets label and/or rank weight. Duplicates are allowed.
    pub fn update_properties(
        &mut self,
        id: SeatId,
        label: Option<String>,
        rank_weight: Option<i64>,
    ) -> LayoutResult<()> {
        let index = self.index_of(id)?;
        self.snapshot();
        let seat = &mut self.seats[index];
        if let Some(label) = label {
            seat.label = label;
        }
        if let Some(rank_weight) = rank_weight {
            seat.rank_weight = rank_weight;
        }
        Ok(())
    }

    /// Flips the pinned flag and returns the new value.
    pub fn toggle_pinned(&mut self, id: SeatId) -> LayoutResult<bool> {
        let index = self.index_of(id)?;
        self.snapshot();
        let seat = &mut self.seats[index];
        seat.pinned = !seat.pinned;
        Ok(seat.pinned)
    }

    pub fn set_visible(&mut self, id: SeatId, visible: bool) -> LayoutResult<()> {
        let index = self.index_of(id)?;
        self.snapshot();
        self.seats[index].visible = visible;
        Ok(())
    }

    /// Tags every listed object with a zone (or clears it). Returns how many changed.
    pub fn set_zone(&mut self, ids: &[SeatId], zone: Option<&str>) -> usize {
        if !self.seats.iter().any(|s| ids.contains(&s.id)) {
            return 0;
        }
        self.snapshot();
        let mut changed = 0;
        for seat in self.seats.iter_mut().filter(|s| ids.contains(&s.id)) {
            seat.zone = zone.map(str::to_string);
            changed += 1;
        }
        changed
    }

    /// Creates the main stage on first use, toggles its visibility afterwards.
    ///
    /// Returns whether the stage is visible after the call.
    pub fn toggle_main_stage(&mut self) -> LayoutResult<bool> {
        if let Some(index) = self
            .seats
            .iter()
            .position(|s| s.is_shape() && s.label == MAIN_STAGE_LABEL)
        {
            self.snapshot();
            let stage = &mut self.seats[index];
            stage.visible = !stage.visible;
            tracing::debug!("Main stage visible: {}", stage.visible);
            return Ok(stage.visible);
        }

        let x = self.venue.center_x() - MAIN_STAGE_WIDTH / 2.0;
        self.add_obstacle(
            x,
            MAIN_STAGE_Y,
            MAIN_STAGE_WIDTH,
            MAIN_STAGE_HEIGHT,
            ShapeForm::Rectangle,
            MAIN_STAGE_LABEL,
        )?;
        Ok(true)
    }

    /// Sets one seat's rank weight, leaving its label untouched.
    pub fn set_rank_weight(&mut self, id: SeatId, rank_weight: i64) -> LayoutResult<()> {
        let index = self.assignable_index(id)?;
        self.snapshot();
        self.seats[index].rank_weight = rank_weight;
        Ok(())
    }

    /// Writes many rank weights under a single snapshot. Unknown ids are skipped.
    pub fn apply_rank_weights(&mut self, weights: &[(SeatId, i64)]) -> usize {
        if weights.is_empty() {
            return 0;
        }
        self.snapshot();
        let mut written = 0;
        for (id, weight) in weights {
            if let Some(seat) = self.seats.iter_mut().find(|s| s.id == *id) {
                seat.rank_weight = *weight;
                written += 1;
            }
        }
        written
    }

    /// Sets or clears a seat's occupant.
    ///
    /// Does not check whether the person sits elsewhere; callers that move a
    /// person clear the previous seat first.
    pub fn assign(&mut self, seat_id: SeatId, person: Option<PersonId>) -> LayoutResult<()> {
        let index = self.assignable_index(seat_id)?;
        self.snapshot();
        self.seats[index].occupant = person;
        Ok(())
    }

    pub fn unassign(&mut self, seat_id: SeatId) -> LayoutResult<()> {
        self.assign(seat_id, None)
    }

    /// Writes occupants without recording history. Used to compose several
    /// occupancy changes under one snapshot.
    pub(crate) fn set_occupant(&mut self, seat_id: SeatId, person: Option<PersonId>) -> bool {
        match self.seats.iter_mut().find(|s| s.id == seat_id && s.is_seat()) {
            Some(seat) => {
                seat.occupant = person;
                true
            }
            None => false,
        }
    }

    /// Empties every seat. Returns how many seats were occupied.
    pub fn clear_all_assignments(&mut self) -> usize {
        let occupied = self.seats.iter().filter(|s| s.occupant.is_some()).count();
        if occupied == 0 {
            return 0;
        }
        self.snapshot();
        for seat in &mut self.seats {
            seat.occupant = None;
        }
        occupied
    }

    /// Clears every seat, pinned and hidden ones included, then writes the
    /// given pairs, under one snapshot.
    pub fn commit_arrangement(&mut self, pairs: &[(SeatId, PersonId)]) {
        self.snapshot();
        for seat in &mut self.seats {
            seat.occupant = None;
        }
        for (seat_id, person) in pairs {
            self.set_occupant(*seat_id, Some(*person));
        }
    }

    /// Removes one object and returns it.
    pub fn remove(&mut self, id: SeatId) -> LayoutResult<Seat> {
        let index = self.index_of(id)?;
        self.snapshot();
        tracing::debug!("Removed {}", id);
        Ok(self.seats.remove(index))
    }

    /// Removes every listed object under one snapshot. Returns how many were removed.
    pub fn remove_many(&mut self, ids: &[SeatId]) -> usize {
        if !self.seats.iter().any(|s| ids.contains(&s.id)) {
            return 0;
        }
        self.snapshot();
        let before = self.seats.len();
        self.seats.retain(|s| !ids.contains(&s.id));
        before - self.seats.len()
    }

    /// Appends already validated objects under one snapshot.
    pub(crate) fn insert_group(&mut self, group: Vec<Seat>) -> Vec<SeatId> {
        self.snapshot();
        let ids = group.iter().map(|s| s.id).collect();
        self.seats.extend(group);
        ids
    }

    /// Records the current list so the next `undo` returns to it.
    pub fn snapshot(&mut self) {
        self.history.record(self.seats.clone());
    }

    /// Restores the list captured before the most recent mutation.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.seats = previous;
                tracing::debug!("Undo, {} snapshots left", self.history.depth());
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Replaces the whole list, bypassing validation and history.
    pub fn replace_all(&mut self, seats: Vec<Seat>) {
        self.seats = seats;
    }

    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Number of assignable seats, hidden ones included.
    pub fn seat_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_seat()).count()
    }

    /// The seat currently holding `person`, if any.
    pub fn seat_of(&self, person: PersonId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.occupant == Some(person))
    }

    pub fn occupant_of(&self, seat_id: SeatId) -> Option<PersonId> {
        self.get(seat_id).and_then(|s| s.occupant)
    }

    fn next_rank_weight(&self) -> i64 {
        self.seat_count() as i64 + 1
    }

    fn index_of(&self, id: SeatId) -> LayoutResult<usize> {
        self.seats
            .iter()
            .position(|s| s.id == id)
            .ok_or(LayoutError::NotFound(id))
    }

    fn assignable_index(&self, id: SeatId) -> LayoutResult<usize> {
        let index = self.index_of(id)?;
        if self.seats[index].is_shape() {
            return Err(LayoutError::NotAssignable(id));
        }
        Ok(index)
    }
}

impl Default for SeatStore {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_rank_and_label() {
        let mut store = SeatStore::default();
        let a = store.add_seat(100.0, 100.0).unwrap();
        let b = store.add_seat(300.0, 100.0).unwrap();
        assert_eq!(store.get(a).unwrap().rank_weight, 1);
        assert_eq!(store.get(b).unwrap().rank_weight, 2);
        assert_eq!(store.get(b).unwrap().label, "2");
        assert_eq!(store.get(a).unwrap().width, 100.0);
        assert_eq!(store.get(a).unwrap().height, 150.0);
    }

    #[test]
    fn test_create_rejects_overlap() {
        let mut store = SeatStore::default();
        let first = store.add_seat(100.0, 100.0).unwrap();
        let err = store.add_seat(110.0, 110.0).unwrap_err();
        assert_eq!(err, LayoutError::Overlap { blocking: first });
        assert_eq!(store.len(), 1);
        assert!(store.add_seat(300.0, 100.0).is_ok());
    }

    #[test]
    fn test_create_rejects_out_of_bounds() {
        let mut store = SeatStore::default();
        assert!(matches!(
            store.add_seat(3150.0, 0.0),
            Err(LayoutError::OutOfBounds { .. })
        ));
        assert!(matches!(
            store.add_seat(-1.0, 0.0),
            Err(LayoutError::OutOfBounds { .. })
        ));
        assert!(store.add_seat(3100.0, 2250.0).is_ok());
        assert_eq!(store.undo_depth(), 1);
    }

    #[test]
    fn test_shapes_may_overlap_seats() {
        let mut store = SeatStore::default();
        store.add_seat(100.0, 100.0).unwrap();
        let stage = store
            .add_obstacle(50.0, 50.0, 400.0, 300.0, ShapeForm::Ellipse, "Pillar")
            .unwrap();
        assert_eq!(store.seat_count(), 1);
        assert!(store.move_to(stage, 60.0, 60.0).is_ok());
        // a shape never blocks a new seat
        assert!(store.add_seat(300.0, 100.0).is_ok());
    }

    #[test]
    fn test_hidden_seat_does_not_block() {
        let mut store = SeatStore::default();
        let a = store.add_seat(100.0, 100.0).unwrap();
        store.set_visible(a, false).unwrap();
        assert!(store.add_seat(110.0, 110.0).is_ok());
    }

    #[test]
    fn test_batch_is_row_major_and_ranked() {
        let mut store = SeatStore::default();
        store.add_seat(2000.0, 2000.0).unwrap();
        let ids = store.create_batch(0.0, 0.0, 2, 3, 10.0, 10.0).unwrap();
        assert_eq!(ids.len(), 6);
        let seats: Vec<_> = ids.iter().map(|id| store.get(*id).unwrap()).collect();
        assert_eq!((seats[1].x, seats[1].y), (110.0, 0.0));
        assert_eq!((seats[3].x, seats[3].y), (0.0, 160.0));
        let ranks: Vec<i64> = seats.iter().map(|s| s.rank_weight).collect();
        assert_eq!(ranks, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(store.undo_depth(), 2);
    }

    #[test]
    fn test_batch_fails_as_unit() {
        let mut store = SeatStore::default();
        store.add_seat(220.0, 160.0).unwrap();
        let err = store.create_batch(0.0, 0.0, 2, 3, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, LayoutError::Overlap { .. }));
        assert_eq!(store.len(), 1);

        let err = store.create_batch(3000.0, 0.0, 1, 3, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, LayoutError::OutOfBounds { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.undo_depth(), 1);
    }

    #[test]
    fn test_batch_exact_fit() {
        let mut store = SeatStore::default();
        // 29 * 110 - 10 = 3180 wide, fits from x=20
        assert!(store.create_batch(20.0, 0.0, 1, 29, 10.0, 10.0).is_ok());
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut store = SeatStore::default();
        assert!(store.create_batch(0.0, 0.0, 0, 5, 10.0, 10.0).unwrap().is_empty());
        assert!(!store.can_undo());
    }

    #[test]
    fn test_declined_move_keeps_position() {
        let mut store = SeatStore::default();
        let a = store.add_seat(100.0, 100.0).unwrap();
        let b = store.add_seat(300.0, 100.0).unwrap();
        let depth = store.undo_depth();
        assert!(store.move_to(b, 150.0, 100.0).is_err());
        let seat = store.get(b).unwrap();
        assert_eq!((seat.x, seat.y), (300.0, 100.0));
        assert_eq!(store.undo_depth(), depth);
        // moving onto its own footprint is fine
        assert!(store.move_to(a, 120.0, 100.0).is_ok());
    }

    #[test]
    fn test_move_to_same_position_records_nothing() {
        let mut store = SeatStore::default();
        let a = store.add_seat(100.0, 100.0).unwrap();
        store.move_to(a, 100.0, 100.0).unwrap();
        assert_eq!(store.undo_depth(), 1);
    }

    #[test]
    fn test_assign_rejects_shapes() {
        let mut store = SeatStore::default();
        let stage = store
            .add_obstacle(0.0, 0.0, 600.0, 150.0, ShapeForm::Rectangle, "Stage")
            .unwrap();
        let person = PersonId::new();
        assert_eq!(
            store.assign(stage, Some(person)),
            Err(LayoutError::NotAssignable(stage))
        );
    }

    #[test]
    fn test_undo_restores_previous_list() {
        let mut store = SeatStore::default();
        let a = store.add_seat(100.0, 100.0).unwrap();
        let before = store.seats().to_vec();
        store.assign(a, Some(PersonId::new())).unwrap();
        assert!(store.undo());
        assert_eq!(store.seats(), before.as_slice());
        assert!(store.undo());
        assert!(store.is_empty());
        assert!(!store.undo());
    }

    #[test]
    fn test_main_stage_toggle() {
        let mut store = SeatStore::default();
        assert!(store.toggle_main_stage().unwrap());
        let stage = store.iter().find(|s| s.label == MAIN_STAGE_LABEL).unwrap();
        assert_eq!(stage.x, 1300.0);
        assert_eq!(stage.y, 50.0);
        assert!(!store.toggle_main_stage().unwrap());
        assert!(store.toggle_main_stage().unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_many_and_zone() {
        let mut store = SeatStore::default();
        let ids = store.create_batch(0.0, 0.0, 1, 3, 10.0, 10.0).unwrap();
        assert_eq!(store.set_zone(&ids[..2], Some("VIP")), 2);
        assert_eq!(store.get(ids[0]).unwrap().zone.as_deref(), Some("VIP"));
        assert_eq!(store.remove_many(&ids[..2]), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove_many(&ids[..2]), 0);
    }

    #[test]
    fn test_commit_arrangement_clears_pinned() {
        let mut store = SeatStore::default();
        let ids = store.create_batch(0.0, 0.0, 1, 2, 10.0, 10.0).unwrap();
        let held = PersonId::new();
        let old = PersonId::new();
        let new = PersonId::new();
        store.assign(ids[0], Some(held)).unwrap();
        store.toggle_pinned(ids[0]).unwrap();
        store.assign(ids[1], Some(old)).unwrap();

        store.commit_arrangement(&[]);
        assert_eq!(store.occupant_of(ids[0]), None);
        assert_eq!(store.occupant_of(ids[1]), None);
        assert!(store.get(ids[0]).unwrap().pinned);

        store.commit_arrangement(&[(ids[1], new)]);
        assert_eq!(store.seat_of(new).map(|s| s.id), Some(ids[1]));
        assert!(store.undo());
        assert_eq!(store.occupant_of(ids[1]), None);
    }
}
