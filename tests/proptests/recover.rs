//! Property tests for reconstruction over genuine schemes

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use shamrock::codec;
use shamrock::domain::{Share, Threshold};
use shamrock::recon;

/// A randomly generated genuine scheme: a polynomial of degree k - 1 plus a
/// share count n >= k, with shares taken at x = 1..=n
#[derive(Clone, Debug)]
struct GenuineScheme {
    coefficients: Vec<i64>,
    share_count: usize,
}

impl GenuineScheme {
    fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    fn secret(&self) -> BigInt {
        BigInt::from(self.coefficients[0])
    }

    fn shares(&self) -> Vec<Share> {
        (1..=self.share_count as i64)
            .map(|x| Share::new(BigInt::from(x), evaluate(&self.coefficients, x)))
            .collect()
    }
}

impl Arbitrary for GenuineScheme {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep the combinatorics small: k in 1..=4, n in k..=k+3.
        let threshold = usize::arbitrary(g) % 4 + 1;
        let share_count = threshold + usize::arbitrary(g) % 4;
        let coefficients = (0..threshold)
            .map(|_| i64::arbitrary(g) % 1_000)
            .collect();

        GenuineScheme {
            coefficients,
            share_count,
        }
    }
}

/// Horner evaluation of the polynomial at x, over unbounded integers
fn evaluate(coefficients: &[i64], x: i64) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::from(0), |sum, &coefficient| {
            sum * BigInt::from(x) + BigInt::from(coefficient)
        })
}

/// Genuine shares always reconstruct the constant term, and no subset ever
/// votes for anything else
#[quickcheck]
fn prop_genuine_shares_recover_the_secret(scheme: GenuineScheme) -> bool {
    let shares = scheme.shares();
    let threshold = Threshold::new(scheme.threshold()).unwrap();

    let outcome = recon::reconstruct(&shares, threshold).unwrap();
    outcome.secret == scheme.secret() && outcome.tally.distinct() == 1
}

/// With exactly k shares there is exactly one subset to test
#[quickcheck]
fn prop_threshold_many_shares_test_a_single_subset(scheme: GenuineScheme) -> bool {
    let shares: Vec<Share> = scheme.shares().into_iter().take(scheme.threshold()).collect();
    let threshold = Threshold::new(scheme.threshold()).unwrap();

    let outcome = recon::reconstruct(&shares, threshold).unwrap();
    outcome.tested == 1 && outcome.secret == scheme.secret()
}

/// Decoding a value's digit string in any base round-trips to the value
#[quickcheck]
fn prop_digit_strings_round_trip(value: u64, base_seed: u8) -> bool {
    let base = u32::from(base_seed) % 35 + 2;
    let digits = BigInt::from(value).to_str_radix(base);

    codec::decode_digits(&digits, base).unwrap() == BigInt::from(value)
}
