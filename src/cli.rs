use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::{DEFAULT_PROGRESS_INTERVAL_SECS, DEFAULT_RELAY_CAPACITY, DEFAULT_WORKERS};
use crate::digest::Algorithm;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// Candidate length in bytes
    #[arg(short, long)]
    pub length: usize,

    /// Target digest as lowercase hex
    #[arg(long)]
    pub target_hex: Option<String>,

    /// File containing the target digest (surrounding whitespace ignored)
    #[arg(long)]
    pub target_file: Option<PathBuf>,

    /// Digest algorithms to evaluate per candidate (defaults to all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub algorithms: Vec<Algorithm>,

    /// Number of digest workers
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Relay (generator -> workers) queue capacity
    #[arg(long, default_value_t = DEFAULT_RELAY_CAPACITY)]
    pub relay_capacity: usize,

    /// Seconds between progress reports
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL_SECS)]
    pub progress_interval_secs: u64,

    /// Stop after producing this many candidates
    #[arg(long)]
    pub max_candidates: Option<u64>,

    /// Output directory for matches and the progress checkpoint
    #[arg(short, long, default_value = "./output")]
    pub output: PathBuf,

    /// Disable the best-effort progress checkpoint file
    #[arg(long)]
    pub no_checkpoint: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
