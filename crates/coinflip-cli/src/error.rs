//! Coinflip CLI — error types.

use coinflip_core::error::SamplerError;
use thiserror::Error;

/// Startup and runtime errors for the command-line runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Sampling or report failure.
    #[error("sampling error: {0}")]
    Sampling(#[from] SamplerError),

    /// Report serialization failure.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
