//! Exact Lagrange interpolation at x = 0

use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

use crate::domain::Share;

/// Why an individual subset could not be interpolated
///
/// `NonIntegerResult` is the corruption detector: a valid scheme guarantees
/// the secret and all shares are integral, so a non-exact division means this
/// subset mixes in at least one corrupted or inconsistent share. The caller
/// discards the subset and keeps going; nothing here is fatal for the run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("subset does not interpolate to an integer secret")]
    NonIntegerResult,
    #[error("subset contains two points with the same x-coordinate")]
    RepeatedAbscissa,
}

/// Evaluates at x = 0 the unique degree-(k-1) polynomial through the k given
/// points, which is by construction the scheme's secret
///
/// For each point i the Lagrange basis at zero is
/// `prod(0 - x_j) / prod(x_i - x_j)` over j != i; the term `y_i * numerator`
/// must divide exactly by the denominator or the whole subset is rejected.
///
/// With a single point the products are empty and the result degenerates to
/// that point's y.
///
/// # Errors
/// Returns [`InterpolationError::NonIntegerResult`] if any per-term division
/// leaves a remainder, or [`InterpolationError::RepeatedAbscissa`] if two
/// points share an x-coordinate
pub fn interpolate_at_zero(points: &[&Share]) -> Result<BigInt, InterpolationError> {
    let mut secret = BigInt::zero();

    for (i, point) in points.iter().enumerate() {
        let mut numerator = BigInt::from(1);
        let mut denominator = BigInt::from(1);

        for (j, other) in points.iter().enumerate() {
            if i != j {
                numerator *= -other.x();
                denominator *= point.x() - other.x();
            }
        }

        if denominator.is_zero() {
            return Err(InterpolationError::RepeatedAbscissa);
        }

        let term = point.y() * numerator;
        if !(&term % &denominator).is_zero() {
            return Err(InterpolationError::NonIntegerResult);
        }
        secret += term / denominator;
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(x: i64, y: i64) -> Share {
        Share::new(BigInt::from(x), BigInt::from(y))
    }

    #[test]
    fn test_single_point_returns_its_y() {
        let point = share(5, 42);
        assert_eq!(interpolate_at_zero(&[&point]).unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_line_through_two_points() {
        // y = 3x + 1
        let a = share(1, 4);
        let b = share(2, 7);
        assert_eq!(interpolate_at_zero(&[&a, &b]).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_quadratic_through_three_points() {
        // y = x^2 + 3
        let points = [share(1, 4), share(2, 7), share(3, 12)];
        let refs: Vec<&Share> = points.iter().collect();
        assert_eq!(interpolate_at_zero(&refs).unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_negative_x_coordinates() {
        // y = 2x + 5 through x = -2 and x = -1
        let a = share(-2, 1);
        let b = share(-1, 3);
        assert_eq!(interpolate_at_zero(&[&a, &b]).unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_non_exact_division_is_rejected() {
        // Genuine points of y = x^2 + 3, but the term for x = 1 is
        // 4 * (2*6) / ((1-2)(1-6)) = 48/5, so this subset is discarded.
        let points = [share(1, 4), share(2, 7), share(6, 39)];
        let refs: Vec<&Share> = points.iter().collect();
        assert_eq!(
            interpolate_at_zero(&refs),
            Err(InterpolationError::NonIntegerResult)
        );
    }

    #[test]
    fn test_repeated_abscissa_is_rejected() {
        let a = share(1, 4);
        let b = share(1, 9);
        assert_eq!(
            interpolate_at_zero(&[&a, &b]),
            Err(InterpolationError::RepeatedAbscissa)
        );
    }
}
