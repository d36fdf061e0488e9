//! Domain types for threshold-share reconstruction
//!
//! Validated newtypes and the decoded share model:
//! - [`Threshold`] - Minimum shares required for reconstruction (k >= 1)
//! - [`ShareCount`] - Declared total number of shares (n)
//! - [`SchemeParams`] - The (n, k) pair read from the input
//! - [`Share`] - One decoded (x, y) point on the secret polynomial

mod params;
mod share;
mod share_count;
mod threshold;

pub use params::SchemeParams;
pub use share::Share;
pub use share_count::ShareCount;
pub use threshold::Threshold;
