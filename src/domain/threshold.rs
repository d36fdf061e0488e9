//! Threshold newtype for share reconstruction

use anyhow::{Result, bail};

/// Minimum number of shares needed to reconstruct the secret (k >= 1)
///
/// Invariant: threshold >= 1 (enforced at construction)
/// A threshold of 1 is a degenerate but valid scheme for reconstruction: the
/// polynomial is a constant and every share carries the secret directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns an error if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamrock::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            bail!("Threshold must be at least 1 (got {value})");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
