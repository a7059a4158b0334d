//! Entry repository boundary.
//!
//! Persistence is an external collaborator's responsibility; the engine
//! only ever reads entries through the [`EntryStore`] trait. The bundled
//! [`InMemoryEntryStore`] keys entries by ISO date with last-writer-wins
//! replacement, which is also the recommended contention policy for a
//! multi-user deployment: concurrent edits to different dates never
//! conflict, and calculations are safely re-run on every read.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::TimesheetEntry;

/// Read access to timesheet entries keyed by date.
pub trait EntryStore {
    /// Returns the entry for a date, if one has been logged.
    fn entry(&self, date: NaiveDate) -> Option<&TimesheetEntry>;
}

/// A `BTreeMap`-backed entry store with last-writer-wins upserts.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::TimesheetEntry;
/// use timesheet_engine::repository::{EntryStore, InMemoryEntryStore};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let mut store = InMemoryEntryStore::new();
/// store.upsert(TimesheetEntry::new(date));
/// assert!(store.entry(date).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntryStore {
    entries: BTreeMap<NaiveDate, TimesheetEntry>,
}

impl InMemoryEntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for its date (last writer wins).
    pub fn upsert(&mut self, entry: TimesheetEntry) {
        self.entries.insert(entry.date, entry);
    }

    /// Removes the entry for a date, returning it if present.
    pub fn remove(&mut self, date: NaiveDate) -> Option<TimesheetEntry> {
        self.entries.remove(&date)
    }

    /// The number of logged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = &TimesheetEntry> {
        self.entries.values()
    }
}

impl EntryStore for InMemoryEntryStore {
    fn entry(&self, date: NaiveDate) -> Option<&TimesheetEntry> {
        self.entries.get(&date)
    }
}
