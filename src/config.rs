//! # Config Module
//!
//! Validated search parameters. Every configuration failure surfaces
//! here, before a single candidate is generated.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::constants::{DEFAULT_PROGRESS_INTERVAL_SECS, DEFAULT_RELAY_CAPACITY, DEFAULT_WORKERS};
use crate::digest::Algorithm;
use crate::error::{HopperError, Result};

/// Parameters for one search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Candidate length in bytes
    pub length: usize,
    /// Target digest, lowercase hex
    pub target_hex: String,
    /// Algorithms evaluated for every candidate
    pub algorithms: Vec<Algorithm>,
    /// Worker pool size
    pub workers: usize,
    /// Relay (generator -> workers) queue capacity
    pub relay_capacity: usize,
    /// Seconds between progress reports
    pub progress_interval_secs: u64,
    /// Stop after producing this many candidates
    pub max_candidates: Option<u64>,
    /// Where the reporter writes its best-effort progress snapshot
    pub checkpoint_path: Option<PathBuf>,
}

impl SearchConfig {
    pub fn new(length: usize, target_hex: impl Into<String>, algorithms: Vec<Algorithm>) -> Self {
        Self {
            length,
            target_hex: target_hex.into(),
            algorithms,
            workers: DEFAULT_WORKERS,
            relay_capacity: DEFAULT_RELAY_CAPACITY,
            progress_interval_secs: DEFAULT_PROGRESS_INTERVAL_SECS,
            max_candidates: None,
            checkpoint_path: None,
        }
    }

    /// Check every parameter. Returns a config error for the first
    /// problem found.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(HopperError::config_error(
                "candidate length must be at least 1",
            ));
        }
        if self.target_hex.is_empty() {
            return Err(HopperError::config_error("target digest is empty"));
        }
        if self.target_hex.len() % 2 != 0 || !is_lowercase_hex(&self.target_hex) {
            return Err(HopperError::config_error(format!(
                "target digest is not lowercase hex: {}",
                self.target_hex
            )));
        }
        if self.algorithms.is_empty() {
            return Err(HopperError::config_error("no digest algorithms configured"));
        }
        if self.workers == 0 {
            return Err(HopperError::config_error("worker count must be at least 1"));
        }
        if self.relay_capacity == 0 {
            return Err(HopperError::config_error(
                "relay capacity must be at least 1",
            ));
        }
        if self.progress_interval_secs == 0 {
            return Err(HopperError::config_error(
                "progress interval must be at least 1 second",
            ));
        }
        if !self
            .algorithms
            .iter()
            .any(|algorithm| algorithm.hex_len() == self.target_hex.len())
        {
            warn!(
                "target digest length {} matches no configured algorithm output; the search cannot succeed",
                self.target_hex.len()
            );
        }
        Ok(())
    }
}

fn is_lowercase_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Drop repeated algorithms, preserving first-seen order.
pub fn dedup_algorithms(algorithms: &[Algorithm]) -> Vec<Algorithm> {
    let mut out = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        if !out.contains(&algorithm) {
            out.push(algorithm);
        }
    }
    out
}

/// Read a target digest from a file, trimming surrounding whitespace.
pub fn read_target_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.trim().to_string())
}
