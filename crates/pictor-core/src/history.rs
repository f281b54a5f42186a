//! Bounded, most-recent-first list of the generations of one session.
//!
//! The history is a plain value owned by whoever drives the session and is
//! passed `&mut` into [`crate::PictorClient::generate`]. Nothing here is
//! global or persisted; dropping the value is the end of the session.

use crate::record::GenerationRecord;

/// Maximum number of records kept by a [`GenerationHistory`].
pub const MAX_HISTORY: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct GenerationHistory {
    records: Vec<GenerationRecord>,
}

impl GenerationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` at the front, dropping whatever falls past
    /// [`MAX_HISTORY`]. Returns the freshly inserted record.
    pub fn push(&mut self, record: GenerationRecord) -> &GenerationRecord {
        self.records.insert(0, record);

        if self.records.len() > MAX_HISTORY {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                evicted = self.records.len() - MAX_HISTORY,
                "history full, dropping oldest records"
            );
            self.records.truncate(MAX_HISTORY);
        }

        &self.records[0]
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, most recent first.
    pub fn list(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&GenerationRecord> {
        self.records.get(index)
    }

    pub fn latest(&self) -> Option<&GenerationRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
