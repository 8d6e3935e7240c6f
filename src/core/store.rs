//! Per-callsign log store: ordered entries, append guard, history projection.

use hashbrown::HashMap;

use crate::qso::QsoEntry;

/// One row of the per-callsign history projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// UTC date the contact ended.
    pub end_date: String,
    /// UTC time the contact ended.
    pub end_time: String,
    /// Mode used.
    pub mode: String,
    /// Band used.
    pub band: String,
}

/// Authoritative mapping from callsign to its chronologically ordered contacts.
///
/// Append-only, single writer. A callsign with zero entries never exists as a
/// key. `order` lists callsigns exactly once in first-append order, so
/// serialization reproduces the persisted object's key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogStore {
    entries: HashMap<String, Vec<QsoEntry>>,
    order: Vec<String>,
}

impl LogStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from `(callsign, entries)` pairs in persisted key
    /// order. Empty callsigns and empty entry lists are dropped, restoring
    /// the zero-entries-means-no-key invariant on hand-edited files.
    pub fn from_parts(parts: Vec<(String, Vec<QsoEntry>)>) -> Self {
        let mut store = Self::new();
        for (callsign, entries) in parts {
            for entry in entries {
                store.append(&callsign, entry);
            }
        }
        store
    }

    /// Appends `entry` under `callsign`, creating the sequence if absent.
    ///
    /// Returns `false` and discards the entry when the callsign is empty, the
    /// guard against logging an anonymous contact.
    pub fn append(&mut self, callsign: &str, entry: QsoEntry) -> bool {
        if callsign.is_empty() {
            return false;
        }
        match self.entries.get_mut(callsign) {
            Some(list) => list.push(entry),
            None => {
                self.order.push(callsign.to_string());
                self.entries.insert(callsign.to_string(), vec![entry]);
            }
        }
        true
    }

    /// Most recent stored entry for `callsign`, used for name/qth backfill.
    pub fn last_for(&self, callsign: &str) -> Option<&QsoEntry> {
        self.entries.get(callsign).and_then(|list| list.last())
    }

    /// All entries for `callsign` in append order.
    pub fn entries_for(&self, callsign: &str) -> Option<&[QsoEntry]> {
        self.entries.get(callsign).map(Vec::as_slice)
    }

    /// History projection for `callsign`: `None` when the callsign was never
    /// appended, else one row per stored contact, oldest first.
    pub fn history(&self, callsign: &str) -> Option<Vec<HistoryRow>> {
        let list = self.entries.get(callsign)?;
        Some(
            list.iter()
                .map(|entry| HistoryRow {
                    end_date: entry.end_date.clone(),
                    end_time: entry.end_time.clone(),
                    mode: entry.mode.clone(),
                    band: entry.band.clone(),
                })
                .collect(),
        )
    }

    /// `(callsign, entries)` pairs in first-append order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[QsoEntry])> {
        self.order.iter().filter_map(|callsign| {
            self.entries
                .get(callsign)
                .map(|list| (callsign.as_str(), list.as_slice()))
        })
    }

    /// Number of callsigns with at least one contact.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no contacts have been logged.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of stored contacts across all callsigns.
    pub fn contact_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
