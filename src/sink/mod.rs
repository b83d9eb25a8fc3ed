//! # Sink Module
//!
//! Match output backends. Workers hand confirmed matches to a sink
//! synchronously; implementations serialize their own writes so records
//! from concurrent workers never interleave. A failed write is logged by
//! the caller and the search continues.

pub mod jsonl;
pub mod memory;

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

pub use jsonl::JsonlSink;
pub use memory::MemorySink;

use crate::digest::Algorithm;
use crate::error::Result;

/// A confirmed preimage match, as handed to the sink.
///
/// Duplicate records for the same candidate/algorithm pair are possible
/// at the boundary; dedup is the sink's business if it wants it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    /// Name of the algorithm whose digest equalled the target
    pub algorithm: String,
    /// Raw candidate bytes
    pub candidate: Vec<u8>,
    /// Candidate bytes as comma-separated decimal values
    pub candidate_decimal: String,
    /// The matching digest, lowercase hex
    pub digest_hex: String,
    /// RFC 3339 creation timestamp
    pub found_at: String,
}

impl MatchRecord {
    pub fn new(algorithm: Algorithm, candidate: &[u8], digest_hex: &str) -> Self {
        Self {
            algorithm: algorithm.as_str().to_string(),
            candidate: candidate.to_vec(),
            candidate_decimal: to_decimal_string(candidate),
            digest_hex: digest_hex.to_string(),
            found_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Render bytes as comma-separated decimal values, e.g. `[4, 2]` -> `4,2`.
pub fn to_decimal_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for (index, value) in bytes.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&value.to_string());
    }
    out
}

/// Errors raised by match sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Destination for confirmed matches. Append-only semantics assumed.
pub trait MatchSink: Send + Sync {
    fn record_match(&self, record: &MatchRecord) -> std::result::Result<(), SinkError>;
    fn flush(&self) -> std::result::Result<(), SinkError>;
}

/// Open the default JSONL sink inside `output_dir`.
pub fn build_jsonl_sink(output_dir: &Path) -> Result<JsonlSink> {
    let path = output_dir.join(crate::constants::MATCHES_FILE_NAME);
    Ok(JsonlSink::create(&path)?)
}
