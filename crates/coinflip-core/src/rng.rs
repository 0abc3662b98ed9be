//! Entropy source abstraction.
//!
//! In production, bits come from a real RNG thresholded at one half. In
//! tests, a scripted implementation is injected so every candidate the
//! sampler builds is known in advance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bit::EntropyBit;

/// Abstraction over a fair coin flip.
pub trait EntropySource: Send {
    /// Draws one bit, `0` or `1` with equal probability, independent of every
    /// other draw.
    fn next_bit(&mut self) -> EntropyBit;
}

/// Thresholds a uniform `f64` in `[0, 1)` at one half.
fn threshold<R: Rng>(rng: &mut R) -> EntropyBit {
    EntropyBit::from(rng.random::<f64>() >= 0.5)
}

/// Bit source over any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformBitSource<R> {
    rng: R,
}

impl<R: Rng> UniformBitSource<R> {
    /// Wraps a caller-supplied generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformBitSource<StdRng> {
    /// A reproducible source: the same seed yields the same bit stream.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> EntropySource for UniformBitSource<R> {
    fn next_bit(&mut self) -> EntropyBit {
        threshold(&mut self.rng)
    }
}

/// Bit source over the thread-local generator.
///
/// Holds no state of its own, so it is `Send + Sync` and can be created
/// freely on any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadBitSource;

impl EntropySource for ThreadBitSource {
    fn next_bit(&mut self) -> EntropyBit {
        threshold(&mut rand::rng())
    }
}

/// Draws one fair bit from the thread-local generator.
#[must_use]
pub fn next_bit() -> EntropyBit {
    ThreadBitSource.next_bit()
}
