//! Bounded snapshot history for undo.

use std::collections::VecDeque;

/// Default number of snapshots retained.
pub const DEFAULT_HISTORY_DEPTH: usize = 30;

/// Bounded stack of full-state snapshots.
///
/// A snapshot is recorded immediately before a mutation, so popping the most
/// recent one yields the state prior to the latest change. When the stack is
/// full the oldest entry is discarded.
#[derive(Debug, Clone)]
pub struct SnapshotHistory<T: Clone> {
    entries: VecDeque<T>,
    max_depth: usize,
}

impl<T: Clone> SnapshotHistory<T> {
    /// Create a history with the default depth
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// Create with custom maximum depth (at least one entry)
    pub fn with_depth(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: VecDeque::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Record a snapshot of the state about to change
    pub fn record(&mut self, state: T) {
        self.entries.push_back(state);
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
        }
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of snapshots currently held
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> Default for SnapshotHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}
