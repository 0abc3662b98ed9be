//! Shared test sources for the coinflip workspace.

mod rng;

pub use rng::{ConstantBits, SequenceBits};
