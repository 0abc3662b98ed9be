//! Inclusive upper bound of a sampling range.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SamplerError;

/// A validated, non-negative inclusive upper bound `n` for the range `[0, n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Bound(u64);

impl Bound {
    /// Builds a bound from a signed integer.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidArgument` if `n` is negative.
    pub fn new(n: i64) -> Result<Self, SamplerError> {
        u64::try_from(n).map(Self).map_err(|_| {
            SamplerError::InvalidArgument(format!("bound must be non-negative, got {n}"))
        })
    }

    /// Returns the bound as an unsigned integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Bound {
    type Error = SamplerError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<u32> for Bound {
    fn from(n: u32) -> Self {
        Self(u64::from(n))
    }
}

impl FromStr for Bound {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let n: i64 = trimmed.parse().map_err(|_| {
            SamplerError::InvalidArgument(format!("bound must be an integer, got {trimmed:?}"))
        })?;
        Self::new(n)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
