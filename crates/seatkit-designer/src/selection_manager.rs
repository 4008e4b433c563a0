use seatkit_core::SeatId;
use std::collections::BTreeSet;

/// Tracks which objects are currently selected.
///
/// The selection is a plain set of ids; it does not check that the ids exist.
/// The session prunes stale ids after operations that can remove objects
/// (delete, undo, load).
///
/// # Examples
///
/// ```
/// use seatkit_core::SeatId;
/// use seatkit_designer::selection_manager::SelectionManager;
///
/// let a = SeatId::new();
/// let b = SeatId::new();
/// let mut selection = SelectionManager::new();
/// selection.select([a]);
/// selection.add([b]);
/// assert_eq!(selection.len(), 2);
/// selection.select([b]);
/// assert!(!selection.contains(a));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: BTreeSet<SeatId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection.
    pub fn select(&mut self, ids: impl IntoIterator<Item = SeatId>) {
        self.selected = ids.into_iter().collect();
    }

    /// Unions `ids` into the selection.
    pub fn add(&mut self, ids: impl IntoIterator<Item = SeatId>) {
        self.selected.extend(ids);
    }

    /// Removes one id; returns whether it was selected.
    pub fn remove(&mut self, id: SeatId) -> bool {
        self.selected.remove(&id)
    }

    /// Adds `id` if absent, removes it otherwise (Shift+click).
    pub fn toggle(&mut self, id: SeatId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in a stable order.
    pub fn ids(&self) -> Vec<SeatId> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Keeps only ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(SeatId) -> bool) {
        self.selected.retain(|id| keep(*id));
    }
}
