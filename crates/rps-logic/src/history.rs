//! Round history log
//!
//! Stored in chronological order. Display code that wants the latest round
//! first should use [`HistoryLog::newest_first`].

use serde::{Deserialize, Serialize};

use crate::choice::{Choice, Outcome};

/// One resolved round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based, equal to rounds played when the entry was recorded
    pub round_number: u32,
    pub player_choice: Choice,
    pub opponent_choice: Choice,
    pub outcome: Outcome,
}

/// Append-only record of rounds, cleared only on a full reset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of the log in chronological order
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().rev()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
