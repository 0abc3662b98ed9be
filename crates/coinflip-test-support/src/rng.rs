//! Test entropy — deterministic `EntropySource` implementations for tests.

use coinflip_core::bit::EntropyBit;
use coinflip_core::rng::EntropySource;

/// A source that returns the same bit forever. `ConstantBits(EntropyBit::One)`
/// makes every candidate all ones, which is out of range for any bound that is
/// not one less than a power of two.
#[derive(Debug, Clone, Copy)]
pub struct ConstantBits(pub EntropyBit);

impl EntropySource for ConstantBits {
    fn next_bit(&mut self) -> EntropyBit {
        self.0
    }
}

/// A source that returns bits from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific candidates (e.g.,
/// one rejection followed by an accepted value).
#[derive(Debug)]
pub struct SequenceBits {
    values: Vec<EntropyBit>,
    index: usize,
}

impl SequenceBits {
    /// Create a new `SequenceBits` from `0`/`1` values; any non-zero value is
    /// read as `1`.
    #[must_use]
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.iter().map(|&v| EntropyBit::from(v != 0)).collect(),
            index: 0,
        }
    }

    /// Number of bits drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.index
    }

    /// Number of bits not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.index
    }
}

impl EntropySource for SequenceBits {
    fn next_bit(&mut self) -> EntropyBit {
        let bit = self.values[self.index];
        self.index += 1;
        bit
    }
}
