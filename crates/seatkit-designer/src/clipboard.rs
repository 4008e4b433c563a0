//! Copy and paste of placeable objects.
//!
//! Pasting places the copied group so its bounding-box origin lands on the
//! cursor. When any pasted seat would overlap an existing one the whole group
//! is shifted diagonally and checked again, up to a bounded number of
//! attempts. Objects that end up outside the venue are dropped.

use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Bounds;
use crate::model::Seat;
use crate::seat_store::SeatStore;
use seatkit_core::SeatId;
use seatkit_settings::PasteSettings;

/// Deep copies of the objects last copied.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    items: Vec<Seat>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the listed objects, keeping store order. Copying nothing
    /// leaves the previous contents in place. Returns how many were copied.
    pub fn copy(&mut self, store: &SeatStore, ids: &[SeatId]) -> usize {
        let copied: Vec<Seat> = store
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect();
        if copied.is_empty() {
            return 0;
        }
        self.items = copied;
        self.items.len()
    }

    pub fn items(&self) -> &[Seat] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Works out where a paste at `cursor` would land without touching the store.
    ///
    /// Returned objects carry fresh ids, no occupant and no pin. Fails with
    /// `PasteBlocked` when every shifted position still overlaps, and with
    /// `NothingPlaced` when the bounds filter removes every object.
    pub fn plan_paste(
        &self,
        store: &SeatStore,
        cursor: (f64, f64),
        settings: &PasteSettings,
    ) -> LayoutResult<Vec<Seat>> {
        let origin = Bounds::enclosing(self.items.iter().map(Seat::bounds))
            .ok_or(LayoutError::EmptyClipboard)?;

        let mut group: Vec<Seat> = self
            .items
            .iter()
            .map(|item| {
                let mut seat = item.clone();
                seat.id = SeatId::new();
                seat.occupant = None;
                seat.pinned = false;
                seat.translate(cursor.0 - origin.min_x, cursor.1 - origin.min_y);
                seat
            })
            .collect();

        let mut shifts = 0;
        while collides(store, &group) {
            if shifts >= settings.max_attempts {
                tracing::debug!("Paste blocked after {} shifts", shifts);
                return Err(LayoutError::PasteBlocked {
                    attempts: settings.max_attempts,
                });
            }
            for seat in &mut group {
                seat.translate(settings.offset_step, settings.offset_step);
            }
            shifts += 1;
        }

        group.retain(|s| store.in_bounds(&s.bounds()));
        if group.is_empty() {
            return Err(LayoutError::NothingPlaced);
        }
        tracing::debug!("Paste resolved after {} shifts, {} objects", shifts, group.len());
        Ok(group)
    }
}

fn collides(store: &SeatStore, group: &[Seat]) -> bool {
    group
        .iter()
        .filter(|s| s.blocks_seats())
        .any(|s| store.find_collision(&s.bounds(), &[]).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatkit_core::PersonId;

    fn store_with_pair() -> (SeatStore, Vec<SeatId>) {
        let mut store = SeatStore::default();
        let ids = store.create_batch(100.0, 100.0, 1, 2, 10.0, 10.0).unwrap();
        (store, ids)
    }

    #[test]
    fn test_plan_paste_moves_origin_to_cursor() {
        let (mut store, ids) = store_with_pair();
        store.assign(ids[0], Some(PersonId::new())).unwrap();
        store.toggle_pinned(ids[0]).unwrap();

        let mut clipboard = Clipboard::new();
        assert_eq!(clipboard.copy(&store, &ids), 2);
        let planned = clipboard
            .plan_paste(&store, (1000.0, 1000.0), &PasteSettings::default())
            .unwrap();

        assert_eq!((planned[0].x, planned[0].y), (1000.0, 1000.0));
        assert_eq!((planned[1].x, planned[1].y), (1110.0, 1000.0));
        assert!(planned.iter().all(|s| s.occupant.is_none() && !s.pinned));
        assert!(planned.iter().all(|s| !ids.contains(&s.id)));
    }

    #[test]
    fn test_plan_paste_shifts_past_overlap() {
        let (store, ids) = store_with_pair();
        let mut clipboard = Clipboard::new();
        clipboard.copy(&store, &ids);

        let planned = clipboard
            .plan_paste(&store, (100.0, 100.0), &PasteSettings::default())
            .unwrap();
        // 150 tall seats clear the originals after 8 diagonal steps of 20
        assert_eq!((planned[0].x, planned[0].y), (260.0, 260.0));
    }

    #[test]
    fn test_plan_paste_gives_up() {
        let (store, ids) = store_with_pair();
        let mut clipboard = Clipboard::new();
        clipboard.copy(&store, &ids);
        let settings = PasteSettings {
            max_attempts: 3,
            ..PasteSettings::default()
        };
        assert_eq!(
            clipboard.plan_paste(&store, (100.0, 100.0), &settings),
            Err(LayoutError::PasteBlocked { attempts: 3 })
        );
    }

    #[test]
    fn test_plan_paste_drops_out_of_bounds() {
        let (store, ids) = store_with_pair();
        let mut clipboard = Clipboard::new();
        clipboard.copy(&store, &ids);

        let planned = clipboard
            .plan_paste(&store, (3000.0, 500.0), &PasteSettings::default())
            .unwrap();
        assert_eq!(planned.len(), 1);

        assert_eq!(
            clipboard.plan_paste(&store, (3150.0, 500.0), &PasteSettings::default()),
            Err(LayoutError::NothingPlaced)
        );
    }

    #[test]
    fn test_empty_clipboard() {
        let store = SeatStore::default();
        let clipboard = Clipboard::new();
        assert_eq!(
            clipboard.plan_paste(&store, (0.0, 0.0), &PasteSettings::default()),
            Err(LayoutError::EmptyClipboard)
        );
    }
}
