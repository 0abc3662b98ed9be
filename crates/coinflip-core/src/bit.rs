//! The single unbiased binary draw every sample is built from.

use serde::Serialize;

/// One fair coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntropyBit {
    /// The `0` outcome.
    Zero,
    /// The `1` outcome.
    One,
}

impl EntropyBit {
    /// Returns the bit as `0` or `1`.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl From<bool> for EntropyBit {
    fn from(set: bool) -> Self {
        if set { Self::One } else { Self::Zero }
    }
}

impl From<EntropyBit> for u8 {
    fn from(bit: EntropyBit) -> Self {
        bit.value()
    }
}

impl From<EntropyBit> for u64 {
    fn from(bit: EntropyBit) -> Self {
        u64::from(bit.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_maps_zero_and_one() {
        assert_eq!(EntropyBit::Zero.value(), 0);
        assert_eq!(EntropyBit::One.value(), 1);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(EntropyBit::from(false), EntropyBit::Zero);
        assert_eq!(EntropyBit::from(true), EntropyBit::One);
    }

    #[test]
    fn test_serializes_as_variant_name() {
        let json = serde_json::to_string(&EntropyBit::One).unwrap();
        assert_eq!(json, "\"One\"");
    }
}
