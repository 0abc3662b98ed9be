//! Sampler error types.

use thiserror::Error;

/// Errors raised by the bounded sampler and its reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// The caller supplied an unusable argument (negative or non-integer
    /// bound, zero iterations).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Every attempt allowed by an explicit attempt limit was rejected.
    #[error("entropy exhausted: no candidate accepted after {attempts} attempts")]
    EntropyExhausted {
        /// Number of rejected attempts.
        attempts: u32,
    },
}
