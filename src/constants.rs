//! # Constants Module
//!
//! Centralized constants used throughout the hashhopper crate.
//! This avoids magic numbers scattered across the codebase.

/// Number of distinct values one candidate byte can take
pub const RADIX: u64 = 256;

/// Default number of digest workers
pub const DEFAULT_WORKERS: usize = 10;

/// Default relay (generator -> workers) channel capacity
pub const DEFAULT_RELAY_CAPACITY: usize = 1000;

/// Default interval between progress reports, in seconds
pub const DEFAULT_PROGRESS_INTERVAL_SECS: u64 = 60;

/// Candidates accounted per keyspace-counter batch
pub const COUNTER_BATCH: u64 = 256;

/// Progress checkpoint file name inside the output directory
pub const CHECKPOINT_FILE_NAME: &str = "progress.json";

/// Match output file name inside the output directory
pub const MATCHES_FILE_NAME: &str = "matches.jsonl";
