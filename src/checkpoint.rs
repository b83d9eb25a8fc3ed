use std::fs;
use std::path::Path;

use chrono::Utc;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Best-effort progress snapshot written by the reporter each tick.
///
/// This is an operator-facing side channel, not a resume point: the
/// search makes no restart guarantee.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckpointState {
    pub version: u32,
    pub length: usize,
    /// Candidates produced so far, decimal string (may exceed u64)
    pub produced: String,
    /// Full keyspace size, decimal string
    pub total: String,
    pub created_at: String,
}

impl CheckpointState {
    pub fn new(length: usize, produced: &BigUint, total: &BigUint) -> Self {
        Self {
            version: 1,
            length,
            produced: produced.to_string(),
            total: total.to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_checkpoint(path: &Path) -> Result<CheckpointState, CheckpointError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn save_checkpoint(path: &Path, state: &CheckpointState) -> Result<(), CheckpointError> {
    let contents = serde_json::to_string_pretty(state)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyspace::keyspace_size;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_checkpoint() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");
        let state = CheckpointState::new(2, &BigUint::from(300u32), &keyspace_size(2));
        save_checkpoint(&path, &state).expect("save");
        let loaded = load_checkpoint(&path).expect("load");
        assert_eq!(loaded.length, 2);
        assert_eq!(loaded.produced, "300");
        assert_eq!(loaded.total, "65536");
    }

    #[test]
    fn counts_past_u64_survive_the_roundtrip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");
        let produced = keyspace_size(9);
        let state = CheckpointState::new(10, &produced, &keyspace_size(10));
        save_checkpoint(&path, &state).expect("save");
        let loaded = load_checkpoint(&path).expect("load");
        assert_eq!(loaded.produced, produced.to_string());
        assert_eq!(loaded.total, "1208925819614629174706176");
    }
}
