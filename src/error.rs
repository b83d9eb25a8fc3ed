//! # Error Module
//!
//! Unified error handling for the hashhopper crate.
//! Provides a central error type that wraps domain-specific errors.

use thiserror::Error;

use crate::sink::SinkError;

/// Central error type for hashhopper operations.
#[derive(Debug, Error)]
pub enum HopperError {
    /// Invalid search configuration, reported before any work begins
    #[error("config error: {0}")]
    Config(String),

    /// Error opening or writing a match sink
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl HopperError {
    /// Create a config error with message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using HopperError
pub type Result<T> = std::result::Result<T, HopperError>;
