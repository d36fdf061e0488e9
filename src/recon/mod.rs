//! Fault-tolerant secret reconstruction
//!
//! Every size-k subset of the decoded shares is interpolated at x = 0; each
//! integral result is one vote for a candidate secret, subsets that fail the
//! exact-division check are discarded, and the candidate with the most votes
//! wins. Subsets made entirely of genuine shares vote for the true secret,
//! while subsets polluted by a corrupted share tend to be discarded or to
//! scatter their votes, which is the whole noise-tolerance story.

mod combinations;
mod lagrange;
mod tally;

pub use combinations::Combinations;
pub use lagrange::{InterpolationError, interpolate_at_zero};
pub use tally::SecretTally;

use num_bigint::BigInt;
use thiserror::Error;

use crate::domain::{Share, Threshold};

/// Errors that end a reconstruction run
#[derive(Error, Debug)]
pub enum ReconError {
    /// Interpolation is undefined over shares with repeated x-coordinates
    #[error("shares {first} and {second} have the same x-coordinate")]
    DuplicateAbscissa { first: Share, second: Share },

    /// No subset produced an integral secret: k exceeds n, n is zero, or
    /// every subset failed the exact-division check
    #[error(
        "no secret found: none of the {tested} size-{threshold} subset(s) of \
         {share_count} share(s) produced an integral secret"
    )]
    NoSecretFound {
        share_count: usize,
        threshold: usize,
        tested: u64,
    },
}

/// Outcome of a successful reconstruction
#[derive(Debug)]
pub struct Reconstruction {
    /// The majority secret
    pub secret: BigInt,
    /// Votes the winning secret received
    pub agreeing: u64,
    /// Subsets enumerated in total
    pub tested: u64,
    /// Subsets discarded by the exact-division check
    pub discarded: u64,
    /// Full per-candidate vote counts
    pub tally: SecretTally,
}

/// Reconstructs the secret by exhaustive subset interpolation and majority
/// vote
///
/// Pure function of the share list and threshold; shares are consumed
/// read-only and nothing is shared across subsets.
///
/// # Errors
/// Returns [`ReconError::DuplicateAbscissa`] if two shares repeat an
/// x-coordinate, or [`ReconError::NoSecretFound`] if no subset yields an
/// integral secret
pub fn reconstruct(shares: &[Share], threshold: Threshold) -> Result<Reconstruction, ReconError> {
    for (offset, share) in shares.iter().enumerate() {
        for other in &shares[offset + 1..] {
            if share.x() == other.x() {
                return Err(ReconError::DuplicateAbscissa {
                    first: share.clone(),
                    second: other.clone(),
                });
            }
        }
    }

    let mut tally = SecretTally::new();
    let mut tested: u64 = 0;
    let mut discarded: u64 = 0;

    for combination in Combinations::new(shares.len(), *threshold) {
        tested += 1;
        let subset: Vec<&Share> = combination.iter().map(|&index| &shares[index]).collect();
        match interpolate_at_zero(&subset) {
            Ok(secret) => tally.record(secret),
            Err(_) => discarded += 1,
        }
    }

    match tally.majority() {
        Some((secret, agreeing)) => Ok(Reconstruction {
            secret: secret.clone(),
            agreeing,
            tested,
            discarded,
            tally,
        }),
        None => Err(ReconError::NoSecretFound {
            share_count: shares.len(),
            threshold: *threshold,
            tested,
        }),
    }
}
