//! Digest workers: each worker drains the relay, computes every
//! configured digest for a candidate, and reports matches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{select, Receiver};
use tracing::{info, warn};

use crate::digest::{compute_digests, Algorithm};
use crate::keyspace::Candidate;
use crate::pipeline::stop::StopSignal;
use crate::sink::{MatchRecord, MatchSink};

/// Spawn `count` identical search workers.
///
/// `digest_counters[i]` is worker i's cumulative digest count; workers
/// only ever `fetch_add` their own counter, so the reporter can read the
/// set without blocking anyone.
pub fn spawn_search_workers(
    count: usize,
    relay_rx: Receiver<Candidate>,
    algorithms: &[Algorithm],
    target_hex: &str,
    sink: Arc<dyn MatchSink>,
    stop: Arc<StopSignal>,
    digest_counters: &[Arc<AtomicU64>],
    matches_found: Arc<AtomicU64>,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(count);
    for worker_id in 0..count {
        let relay_rx = relay_rx.clone();
        let algorithms = algorithms.to_vec();
        let target_hex = target_hex.to_string();
        let sink = sink.clone();
        let stop = stop.clone();
        let digests_computed = digest_counters[worker_id].clone();
        let matches_found = matches_found.clone();
        handles.push(thread::spawn(move || {
            run_worker(
                worker_id,
                &relay_rx,
                &algorithms,
                &target_hex,
                sink.as_ref(),
                &stop,
                &digests_computed,
                &matches_found,
            );
        }));
    }
    handles
}

fn run_worker(
    worker_id: usize,
    relay_rx: &Receiver<Candidate>,
    algorithms: &[Algorithm],
    target_hex: &str,
    sink: &dyn MatchSink,
    stop: &StopSignal,
    digests_computed: &AtomicU64,
    matches_found: &AtomicU64,
) {
    let stop_rx = stop.listen();
    loop {
        if stop.is_stopped() {
            break;
        }
        let candidate = select! {
            recv(relay_rx) -> msg => match msg {
                Ok(candidate) => candidate,
                // relay closed and drained
                Err(_) => break,
            },
            recv(stop_rx) -> _ => break,
        };

        let digests = compute_digests(&candidate, algorithms);
        digests_computed.fetch_add(digests.len() as u64, Ordering::Relaxed);

        for entry in &digests {
            if entry.hex == target_hex {
                let record = MatchRecord::new(entry.algorithm, &candidate, &entry.hex);
                info!(
                    "match found worker={} algorithm={} candidate={}",
                    worker_id, record.algorithm, record.candidate_decimal
                );
                if let Err(e) = sink.record_match(&record) {
                    warn!("failed to record match: {e}");
                }
                matches_found.fetch_add(1, Ordering::Relaxed);
                stop.trigger();
            }
        }
    }
}
