//! Vote tally over candidate secrets

use std::collections::BTreeMap;

use num_bigint::BigInt;

/// Occurrence counts per candidate secret, one vote per interpolated subset
///
/// Backed by an ordered map so iteration (and therefore the tie-break and
/// any diagnostic listing) is deterministic. Holds at most C(n, k) entries.
#[derive(Debug, Default)]
pub struct SecretTally {
    counts: BTreeMap<BigInt, u64>,
}

impl SecretTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one subset's interpolated secret
    pub fn record(&mut self, secret: BigInt) {
        *self.counts.entry(secret).or_insert(0) += 1;
    }

    /// Returns the candidate with the highest count, with ties resolved in
    /// favor of the smallest secret value
    ///
    /// The smallest-value rule replaces the reference behavior of "whichever
    /// candidate an unordered map happens to yield first". Returns `None`
    /// when no subset contributed a vote.
    #[must_use]
    pub fn majority(&self) -> Option<(&BigInt, u64)> {
        let mut best: Option<(&BigInt, u64)> = None;
        for (secret, &count) in &self.counts {
            // Strictly-greater keeps the first (smallest) key on ties.
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((secret, count));
            }
        }
        best
    }

    /// Candidates in ascending secret order with their counts
    pub fn candidates(&self) -> impl Iterator<Item = (&BigInt, u64)> {
        self.counts.iter().map(|(secret, &count)| (secret, count))
    }

    /// Number of distinct candidate secrets seen
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}
