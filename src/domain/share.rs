//! One decoded share of the split secret

use num_bigint::BigInt;

/// A point (x, y) on the polynomial whose constant term is the secret
///
/// Immutable once decoded. Working sets must have pairwise-distinct
/// x-coordinates; interpolation is undefined otherwise, so the decoder
/// rejects duplicates before a share list ever reaches reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    x: BigInt,
    y: BigInt,
}

impl Share {
    #[must_use]
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
