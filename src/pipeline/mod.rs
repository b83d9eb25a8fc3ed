//! # Pipeline Module
//!
//! Orchestrates the keyspace search: candidate generation, the bounded
//! relay, the digest worker pool, progress reporting, and stop
//! coordination.
//!
//! The relay is the only shared structure on the hot path. The generator
//! blocks when it is full (back-pressure); dropping the sender is the
//! end-of-stream signal, after which drained workers observe a closed
//! channel rather than blocking forever.

pub mod progress;
pub mod stop;
pub mod workers;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, select, Sender};
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::constants::COUNTER_BATCH;
use crate::error::Result;
use crate::keyspace::{Candidate, CandidateIter, KeyspaceCounter};
use crate::sink::MatchSink;

use stop::StopSignal;

/// Statistics collected during a search run.
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub candidates_generated: u64,
    pub digests_computed: u64,
    pub matches_found: u64,
    /// Whether the full keyspace was enumerated (no early stop)
    pub exhausted: bool,
}

/// Outcome of the generator loop.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOutcome {
    pub produced: u64,
    pub exhausted: bool,
}

/// Run the full search pipeline.
///
/// Spawns the worker pool and the progress reporter, runs the candidate
/// generator on the calling thread, then joins everything and returns
/// aggregate statistics. Stops early when a worker finds a match, when
/// `stop` is triggered externally, or when the optional candidate limit
/// is reached.
pub fn run_search(
    cfg: &SearchConfig,
    sink: Arc<dyn MatchSink>,
    stop: Arc<StopSignal>,
) -> Result<SearchStats> {
    cfg.validate()?;

    let keyspace = Arc::new(KeyspaceCounter::new(cfg.length));
    let (relay_tx, relay_rx) = bounded::<Candidate>(cfg.relay_capacity);

    let digest_counters: Vec<Arc<AtomicU64>> = (0..cfg.workers)
        .map(|_| Arc::new(AtomicU64::new(0)))
        .collect();
    let matches_found = Arc::new(AtomicU64::new(0));

    let worker_handles = workers::spawn_search_workers(
        cfg.workers,
        relay_rx,
        &cfg.algorithms,
        &cfg.target_hex,
        sink.clone(),
        stop.clone(),
        &digest_counters,
        matches_found.clone(),
    );

    let reporter_handle = progress::spawn_progress_reporter(
        Duration::from_secs(cfg.progress_interval_secs),
        cfg.length,
        digest_counters.clone(),
        keyspace.clone(),
        stop.clone(),
        cfg.checkpoint_path.clone(),
    );

    let outcome = run_generator(
        CandidateIter::new(cfg.length),
        &relay_tx,
        &stop,
        &keyspace,
        cfg.max_candidates,
    );
    // end of stream: workers drain the relay, then observe it closed
    drop(relay_tx);

    for handle in worker_handles {
        let _ = handle.join();
    }

    // idempotent: a matching worker may already have stopped the pipeline
    stop.trigger();
    let _ = reporter_handle.join();

    if let Err(e) = sink.flush() {
        warn!("failed to flush match sink: {e}");
    }

    let stats = SearchStats {
        candidates_generated: outcome.produced,
        digests_computed: digest_counters
            .iter()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum(),
        matches_found: matches_found.load(Ordering::Relaxed),
        exhausted: outcome.exhausted,
    };
    info!(
        "run_summary candidates_generated={} digests_computed={} matches_found={} exhausted={}",
        stats.candidates_generated, stats.digests_computed, stats.matches_found, stats.exhausted
    );
    Ok(stats)
}

/// Feed candidates into the relay until the keyspace is exhausted, a stop
/// is requested, or the optional candidate limit is reached.
///
/// Blocks when the relay is full; that is the pipeline's only
/// back-pressure mechanism. The stop check happens at every yield point,
/// and a stop arriving while the send is blocked wakes it immediately.
pub fn run_generator(
    candidates: CandidateIter,
    relay_tx: &Sender<Candidate>,
    stop: &StopSignal,
    keyspace: &KeyspaceCounter,
    max_candidates: Option<u64>,
) -> GeneratorOutcome {
    let stop_rx = stop.listen();
    let mut produced = 0u64;
    let mut batch = 0u64;
    let mut exhausted = true;

    for candidate in candidates {
        if stop.is_stopped() {
            exhausted = false;
            break;
        }
        if let Some(limit) = max_candidates {
            if produced >= limit {
                exhausted = false;
                break;
            }
        }
        let sent = select! {
            send(relay_tx, candidate) -> res => res.is_ok(),
            recv(stop_rx) -> _ => false,
        };
        if !sent {
            exhausted = false;
            break;
        }
        produced += 1;
        batch += 1;
        if batch == COUNTER_BATCH {
            keyspace.advance(batch);
            batch = 0;
        }
    }
    keyspace.advance(batch);

    GeneratorOutcome {
        produced,
        exhausted,
    }
}
