//! Scheme parameters read from the input

use super::{ShareCount, Threshold};

/// The declared (n, k) pair of the sharing scheme
///
/// Deliberately no k <= n check here: a threshold exceeding the share count
/// means no subset can be formed, which the reconstruction step reports as
/// its explicit no-secret-found outcome instead of an up-front rejection.
#[derive(Debug, Clone, Copy)]
pub struct SchemeParams {
    share_count: ShareCount,
    threshold: Threshold,
}

impl SchemeParams {
    #[must_use]
    pub fn new(share_count: ShareCount, threshold: Threshold) -> Self {
        Self {
            share_count,
            threshold,
        }
    }

    /// Gets the declared total share count (n)
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Gets the reconstruction threshold (k)
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}
