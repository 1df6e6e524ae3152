//! Bounded linear undo/redo over full layout snapshots.
//!
//! The manager holds an ordered list of snapshots and an index to the one
//! that matches the live document. Pushing after an undo discards every
//! entry past the index; pushing beyond capacity drops the oldest entry.

use crate::model::{CentralFeature, LayoutSnapshot, Section};

#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<LayoutSnapshot>,
    index: usize,
    capacity: usize,
}

impl HistoryManager {
    /// Creates an empty history holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Creates a history seeded with `initial` as its only entry.
    pub fn with_initial(initial: LayoutSnapshot, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        history.push(initial);
        history
    }

    /// Copies `sections` and `central_feature` into a new entry.
    pub fn push_snapshot(
        &mut self,
        sections: &[Section],
        central_feature: Option<&CentralFeature>,
    ) {
        self.push(LayoutSnapshot::new(sections, central_feature));
    }

    pub fn push(&mut self, snapshot: LayoutSnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(snapshot);

        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
    }

    /// Steps back one entry and returns it; `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&LayoutSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    /// Steps forward one entry and returns it; `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&LayoutSnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&LayoutSnapshot> {
        self.entries.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops all entries and starts over from `snapshot`.
    pub fn reset(&mut self, snapshot: LayoutSnapshot) {
        self.entries.clear();
        self.index = 0;
        self.push(snapshot);
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(venuekit_core::constants::HISTORY_DEPTH)
    }
}
