//! `ShareCount` newtype for share reconstruction

use anyhow::{Result, bail};

/// Declared total number of shares in the input (n)
///
/// Zero is representable: an input declaring no shares must flow through to
/// the no-secret-found outcome rather than fail at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Creates a share count from the raw integer decoded out of the input
    ///
    /// # Errors
    /// Returns an error if the value is negative
    pub fn new(value: i64) -> Result<Self> {
        let Ok(count) = usize::try_from(value) else {
            bail!("Share count must not be negative (got {value})");
        };
        Ok(Self(count))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
