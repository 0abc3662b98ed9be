//! Rejection sampler over minimum-length bit strings.
//!
//! A candidate is built from exactly as many fair bits as it takes to write
//! the bound in binary, most significant bit first. Candidates above the
//! bound are discarded and redrawn, which keeps the accepted values exactly
//! uniform over `[0, n]`. Every attempt succeeds with probability above one
//! half, so fewer than two attempts are expected, but no finite number of
//! attempts is guaranteed. The default sampler never gives up; callers that
//! need a hard ceiling opt into [`AttemptLimit::AtMost`].

use std::num::NonZeroU32;

use crate::bound::Bound;
use crate::error::SamplerError;
use crate::rng::{EntropySource, ThreadBitSource};

/// How many rejected candidates the sampler tolerates before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptLimit {
    /// Retry until a candidate is accepted.
    #[default]
    Unbounded,
    /// Fail with `SamplerError::EntropyExhausted` after this many rejections.
    AtMost(NonZeroU32),
}

impl AttemptLimit {
    /// Returns `true` once `attempts` rejections use up the limit.
    const fn is_exhausted(self, attempts: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::AtMost(limit) => attempts >= limit.get(),
        }
    }
}

/// Draws uniform integers in `[0, n]` from a fair bit source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundedRandomSampler {
    limit: AttemptLimit,
}

impl BoundedRandomSampler {
    /// Creates a sampler that retries without limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: AttemptLimit::Unbounded,
        }
    }

    /// Creates a sampler that gives up after `limit` rejected candidates.
    #[must_use]
    pub const fn with_attempt_limit(limit: AttemptLimit) -> Self {
        Self { limit }
    }

    /// Returns the configured attempt limit.
    #[must_use]
    pub const fn attempt_limit(&self) -> AttemptLimit {
        self.limit
    }

    /// Draws a uniform integer in `[0, n]`.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidArgument` if `n` is negative, or
    /// `SamplerError::EntropyExhausted` if an attempt limit is configured and
    /// every allowed candidate was rejected.
    pub fn sample(&self, source: &mut dyn EntropySource, n: i64) -> Result<u64, SamplerError> {
        self.sample_bound(source, Bound::new(n)?)
    }

    /// Draws a uniform integer in `[0, bound]`.
    ///
    /// A zero bound returns `0` without drawing any bits.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::EntropyExhausted` if an attempt limit is
    /// configured and every allowed candidate was rejected.
    pub fn sample_bound(
        &self,
        source: &mut dyn EntropySource,
        bound: Bound,
    ) -> Result<u64, SamplerError> {
        let n = bound.get();
        if n == 0 {
            return Ok(0);
        }

        let bits = bit_length(n);
        let mut attempts: u32 = 0;
        loop {
            let candidate = draw_candidate(source, bits);
            attempts = attempts.saturating_add(1);

            if candidate <= n {
                tracing::debug!(bound = n, candidate, attempts, "candidate accepted");
                return Ok(candidate);
            }
            tracing::trace!(bound = n, candidate, attempts, "candidate rejected");

            if self.limit.is_exhausted(attempts) {
                tracing::warn!(bound = n, attempts, "attempt limit reached");
                return Err(SamplerError::EntropyExhausted { attempts });
            }
        }
    }
}

/// Number of significant bits in `n`, i.e. `floor(log2(n)) + 1` for `n > 0`
/// and `0` for `n == 0`.
#[must_use]
pub const fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Assembles `bits` fair bits, most significant first.
fn draw_candidate(source: &mut dyn EntropySource, bits: u32) -> u64 {
    (0..bits).fold(0, |candidate, _| {
        (candidate << 1) | u64::from(source.next_bit())
    })
}

/// Draws a uniform integer in `[0, n]` from the thread-local generator,
/// retrying without limit.
///
/// # Errors
///
/// Returns `SamplerError::InvalidArgument` if `n` is negative.
pub fn sample(n: i64) -> Result<u64, SamplerError> {
    BoundedRandomSampler::new().sample(&mut ThreadBitSource, n)
}
