//! Snapshot-based linear undo/redo history
//!
//! Each entry is a full copy of the document's items and regions. Report
//! properties are not part of a snapshot. The log is never empty and the
//! cursor always points at an existing entry.

use report_model::{Document, RegionSet, ReportItem};

/// A saved copy of items and regions
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub items: Vec<ReportItem>,
    pub regions: RegionSet,
}

impl Snapshot {
    /// Capture the undoable part of a document
    pub fn of(document: &Document) -> Self {
        Self {
            items: document.items.clone(),
            regions: document.regions,
        }
    }

    /// Write this snapshot's items and regions into a document
    pub fn restore_into(&self, document: &mut Document) {
        document.items = self.items.clone();
        document.regions = self.regions;
    }
}

/// Linear history with a cursor at the current entry
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: usize,
    /// Maximum number of entries kept, `None` for unbounded
    limit: Option<usize>,
}

impl History {
    /// Create a history holding only `initial`
    pub fn new(initial: Snapshot) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` entries (at least one)
    pub fn with_limit(initial: Snapshot, limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|l| l.max(1)),
            ..Self::new(initial)
        }
    }

    /// Drop any redo tail, append `entry` and make it current
    pub fn record(&mut self, entry: Snapshot) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;

        if let Some(limit) = self.limit {
            let excess = self.entries.len().saturating_sub(limit);
            if excess > 0 {
                self.entries.drain(..excess);
                self.cursor -= excess;
            }
        }
    }

    /// Step back one entry. Returns the entry now current, or `None` at the start.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. Returns the entry now current, or `None` at the tail.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Replace the whole log with `entry`
    pub fn reset(&mut self, entry: Snapshot) {
        self.entries.clear();
        self.entries.push(entry);
        self.cursor = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }
}
