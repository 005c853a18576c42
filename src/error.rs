//! Error types for the evolution engine.
//!
//! Every failure is detected where it happens and returned to the caller
//! unchanged. The runner performs no retries and no recovery.

use thiserror::Error;

/// Error returned by generators, operators, and the evolution runner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvolveError {
    /// A size, limit, or rate is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two genomes (or a genome and the population) disagree in length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the reference genome.
        expected: usize,
        /// Length of the offending genome.
        actual: usize,
    },

    /// A genome or population was empty where non-empty input is required.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvolveError>;

impl EvolveError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EvolveError::InvalidArgument(msg.into())
    }
}
