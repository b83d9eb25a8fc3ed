use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::sink::{MatchRecord, MatchSink, SinkError};

/// Appends one JSON object per confirmed match to a `.jsonl` file.
pub struct JsonlSink {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlSink {
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::options().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

impl MatchSink for JsonlSink {
    fn record_match(&self, record: &MatchRecord) -> Result<(), SinkError> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| SinkError::Other("matches writer lock poisoned".into()))?;
        serde_json::to_writer(&mut *guard, record)?;
        guard.write_all(b"\n")?;
        // a match is never left sitting in the buffer
        guard.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| SinkError::Other("matches writer lock poisoned".into()))?;
        guard.flush()?;
        Ok(())
    }
}
