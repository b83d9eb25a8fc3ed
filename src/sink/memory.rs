use std::sync::Mutex;

use crate::sink::{MatchRecord, MatchSink, SinkError};

/// Collects match records in memory.
///
/// Used by tests and by embedders that want the records without any
/// filesystem output.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<MatchRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records collected so far.
    pub fn records(&self) -> Vec<MatchRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl MatchSink for MemorySink {
    fn record_match(&self, record: &MatchRecord) -> Result<(), SinkError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| SinkError::Other("memory sink lock poisoned".into()))?;
        guard.push(record.clone());
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}
