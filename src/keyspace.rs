//! # Keyspace Module
//!
//! Deterministic enumeration of the radix-256 keyspace and
//! arbitrary-precision accounting of how much of it has been produced.

use std::sync::Mutex;

use num_bigint::BigUint;

use crate::constants::RADIX;

/// One byte sequence drawn from the keyspace.
pub type Candidate = Vec<u8>;

/// Total number of candidates of `length` bytes: 256^length.
///
/// Exceeds u64 range for lengths above 8, hence the big integer.
pub fn keyspace_size(length: usize) -> BigUint {
    BigUint::from(RADIX).pow(length as u32)
}

/// Iterator over every byte string of a fixed length, each exactly once,
/// in ascending base-256 big-endian order (the last byte increments
/// fastest, like an odometer).
///
/// The odometer state is held explicitly, so large lengths cannot exhaust
/// the call stack.
#[derive(Debug, Clone)]
pub struct CandidateIter {
    current: Vec<u8>,
    done: bool,
}

impl CandidateIter {
    pub fn new(length: usize) -> Self {
        Self {
            current: vec![0u8; length],
            done: length == 0,
        }
    }
}

impl Iterator for CandidateIter {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();

        // increment with carry, least significant byte first
        let mut pos = self.current.len();
        loop {
            if pos == 0 {
                // carried past the most significant byte: keyspace done
                self.done = true;
                break;
            }
            pos -= 1;
            let (value, overflow) = self.current[pos].overflowing_add(1);
            self.current[pos] = value;
            if !overflow {
                break;
            }
        }
        Some(item)
    }
}

/// Tracks how many candidates of the configured length have been produced.
///
/// The generator advances the count in batches and the progress reporter
/// reads it, so the lock is taken once per batch rather than once per
/// candidate.
#[derive(Debug)]
pub struct KeyspaceCounter {
    total: BigUint,
    produced: Mutex<BigUint>,
}

impl KeyspaceCounter {
    pub fn new(length: usize) -> Self {
        Self {
            total: keyspace_size(length),
            produced: Mutex::new(BigUint::from(0u32)),
        }
    }

    /// Size of the full keyspace.
    pub fn total(&self) -> &BigUint {
        &self.total
    }

    /// Record that `count` more candidates have been produced.
    pub fn advance(&self, count: u64) {
        if count == 0 {
            return;
        }
        // a poisoned lock only means a writer panicked mid-add; the count
        // is still usable
        let mut produced = self.produced.lock().unwrap_or_else(|e| e.into_inner());
        *produced += count;
    }

    /// Candidates produced so far.
    pub fn produced(&self) -> BigUint {
        self.produced
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Candidates not yet produced. Saturates at zero.
    pub fn remaining(&self) -> BigUint {
        let produced = self.produced();
        if produced >= self.total {
            BigUint::from(0u32)
        } else {
            &self.total - produced
        }
    }
}
