//! # Digest Module
//!
//! Stateless digest computation for search candidates.
//!
//! Every configured algorithm is evaluated for each candidate; the engine
//! never short-circuits on an early match, so callers see every algorithm
//! that hits, not merely the first.

use blake2::Blake2b512;
use clap::ValueEnum;
use sha2::{Digest, Sha512};
use sha3::Sha3_512;

/// Supported digest algorithms.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// SHA-512 (FIPS 180-4)
    #[value(name = "sha-512")]
    Sha512,
    /// SHA3-512 (FIPS 202)
    #[value(name = "sha3-512")]
    Sha3_512,
    /// BLAKE2b with 512-bit output
    #[value(name = "blake2b-512")]
    Blake2b512,
}

impl Algorithm {
    /// All supported algorithms, in reporting order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Sha512,
        Algorithm::Sha3_512,
        Algorithm::Blake2b512,
    ];

    /// Human-readable algorithm name used in match records and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha512 => "SHA-512",
            Algorithm::Sha3_512 => "SHA3-512",
            Algorithm::Blake2b512 => "BLAKE2b-512",
        }
    }

    /// Digest output length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha512 => 64,
            Algorithm::Sha3_512 => 64,
            Algorithm::Blake2b512 => 64,
        }
    }

    /// Digest output length when rendered as hex.
    pub fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }
}

/// One algorithm's digest of one candidate, rendered as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmDigest {
    pub algorithm: Algorithm,
    pub hex: String,
}

/// Compute the digest of `data` under every algorithm in `algorithms`.
pub fn compute_digests(data: &[u8], algorithms: &[Algorithm]) -> Vec<AlgorithmDigest> {
    algorithms
        .iter()
        .map(|&algorithm| AlgorithmDigest {
            algorithm,
            hex: digest_hex(algorithm, data),
        })
        .collect()
}

/// Lowercase hex digest of `data` under a single algorithm.
pub fn digest_hex(algorithm: Algorithm, data: &[u8]) -> String {
    match algorithm {
        Algorithm::Sha512 => hex::encode(Sha512::digest(data)),
        Algorithm::Sha3_512 => hex::encode(Sha3_512::digest(data)),
        Algorithm::Blake2b512 => hex::encode(Blake2b512::digest(data)),
    }
}
