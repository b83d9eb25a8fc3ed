use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crossbeam_channel::{bounded, Receiver, Sender};

/// Write-once-wins stop flag with a broadcast wake channel.
///
/// Any worker that finds a match, keyspace exhaustion, and an operator
/// interrupt all funnel into `trigger`, which is idempotent: the flag is
/// claimed with a single atomic swap and only the winner drops the wake
/// sender. Dropping the sender closes the channel for every cloned
/// receiver, so parties blocked on the relay wake immediately instead of
/// waiting for their next poll.
#[derive(Debug)]
pub struct StopSignal {
    stopped: AtomicBool,
    wake_tx: Mutex<Option<Sender<()>>>,
    wake_rx: Receiver<()>,
}

impl StopSignal {
    pub fn new() -> Self {
        let (wake_tx, wake_rx) = bounded::<()>(0);
        Self {
            stopped: AtomicBool::new(false),
            wake_tx: Mutex::new(Some(wake_tx)),
            wake_rx,
        }
    }

    /// Request a stop. Returns true for the first caller only; later
    /// calls (including concurrent ones) are no-ops.
    pub fn trigger(&self) -> bool {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return false;
        }
        if let Ok(mut guard) = self.wake_tx.lock() {
            guard.take();
        }
        true
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Receiver that becomes ready (closed) once a stop is requested.
    ///
    /// Suitable as a `recv` arm in `crossbeam_channel::select!`.
    pub fn listen(&self) -> Receiver<()> {
        self.wake_rx.clone()
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[test]
    fn first_trigger_wins() {
        let stop = StopSignal::new();
        assert!(!stop.is_stopped());
        assert!(stop.trigger());
        assert!(!stop.trigger());
        assert!(stop.is_stopped());
    }

    #[test]
    fn concurrent_triggers_resolve_to_one_winner() {
        let stop = Arc::new(StopSignal::new());
        let winners = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stop = stop.clone();
                let winners = winners.clone();
                std::thread::spawn(move || {
                    if stop.trigger() {
                        winners.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("trigger thread");
        }

        assert_eq!(winners.load(Ordering::SeqCst), 1);
        assert!(stop.is_stopped());
    }

    #[test]
    fn listeners_wake_when_triggered() {
        let stop = Arc::new(StopSignal::new());
        let listener = stop.clone();
        let handle = std::thread::spawn(move || {
            // blocks until the wake channel closes
            listener.listen().recv().is_err()
        });

        std::thread::sleep(Duration::from_millis(50));
        stop.trigger();
        assert!(handle.join().expect("listener thread"));
    }

    #[test]
    fn listen_after_trigger_is_already_closed() {
        let stop = StopSignal::new();
        stop.trigger();
        assert_eq!(
            stop.listen().try_recv(),
            Err(crossbeam_channel::TryRecvError::Disconnected)
        );
    }
}
