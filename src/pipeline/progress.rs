//! Fire-and-forget progress reporting.
//!
//! The reporter runs on its own thread and only reads worker-owned
//! atomics and the keyspace counter; it can never block the pipeline,
//! and its failures (e.g. an unwritable checkpoint) are logged and
//! swallowed.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{select, tick};
use tracing::{info, warn};

use crate::checkpoint::{save_checkpoint, CheckpointState};
use crate::keyspace::KeyspaceCounter;
use crate::pipeline::stop::StopSignal;

pub fn spawn_progress_reporter(
    interval: Duration,
    length: usize,
    digest_counters: Vec<Arc<AtomicU64>>,
    keyspace: Arc<KeyspaceCounter>,
    stop: Arc<StopSignal>,
    checkpoint_path: Option<PathBuf>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let ticker = tick(interval);
        let stop_rx = stop.listen();
        let mut last_total = 0u64;
        loop {
            select! {
                recv(ticker) -> _ => {
                    let total: u64 = digest_counters
                        .iter()
                        .map(|counter| counter.load(Ordering::Relaxed))
                        .sum();
                    let interval_digests = total.saturating_sub(last_total);
                    last_total = total;

                    let produced = keyspace.produced();
                    let remaining = keyspace.remaining();
                    info!(
                        "progress digests_interval={} digests_total={} produced={} remaining={} length={}",
                        interval_digests, total, produced, remaining, length
                    );

                    if let Some(path) = checkpoint_path.as_deref() {
                        let state = CheckpointState::new(length, &produced, keyspace.total());
                        if let Err(e) = save_checkpoint(path, &state) {
                            warn!("failed to write checkpoint: {e}");
                        }
                    }
                }
                recv(stop_rx) -> _ => break,
            }
        }
    })
}
