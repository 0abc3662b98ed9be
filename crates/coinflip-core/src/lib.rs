//! Coinflip Core — uniform bounded integers from a fair coin flip.
//!
//! This crate defines the entropy primitive, the rejection sampler built on
//! top of it, and the diagnostic reports used to check its distribution. It
//! contains no infrastructure code.

pub mod bit;
pub mod bound;
pub mod error;
pub mod rng;
pub mod sampler;
pub mod stats;

pub use bit::EntropyBit;
pub use bound::Bound;
pub use error::SamplerError;
pub use rng::{EntropySource, ThreadBitSource, UniformBitSource, next_bit};
pub use sampler::{AttemptLimit, BoundedRandomSampler, bit_length, sample};
