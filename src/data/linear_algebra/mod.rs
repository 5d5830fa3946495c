//! # Linear algebra primitives
//!
//! Dense storage for the tableau, and the tolerance used to decide the sign of floating point
//! values that are subject to rounding errors.
use num_traits::Float;

pub mod matrix;

/// Magnitudes at or below this value are treated as exactly zero when testing signs.
///
/// Rounding errors accumulate during pivoting. A value that would have been zero in exact
/// arithmetic can show up as something tiny of either sign, which would break the sign tests that
/// the simplex method relies on.
pub const EPSILON: f64 = 1e-12;

/// Whether a value is positive beyond the tolerance.
///
/// # Arguments
///
/// * `value`: Value to test.
/// * `epsilon`: Tolerance, should be positive.
pub fn is_positive<F: Float>(value: F, epsilon: F) -> bool {
    debug_assert!(epsilon > F::zero());

    value > epsilon
}

/// Whether a value is negative beyond the tolerance.
pub fn is_negative<F: Float>(value: F, epsilon: F) -> bool {
    debug_assert!(epsilon > F::zero());

    value < -epsilon
}

/// Whether a value is within the tolerance from zero.
pub fn is_zero<F: Float>(value: F, epsilon: F) -> bool {
    debug_assert!(epsilon > F::zero());

    value.abs() <= epsilon
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::{EPSILON, is_negative, is_positive, is_zero};

    #[test]
    fn signs() {
        assert!(is_positive(1e-11, EPSILON));
        assert!(!is_positive(1e-13, EPSILON));
        assert!(!is_positive(-1f64, EPSILON));

        assert!(is_negative(-1e-11, EPSILON));
        assert!(!is_negative(-1e-13, EPSILON));
        assert!(!is_negative(1f64, EPSILON));

        assert!(is_zero(0f64, EPSILON));
        assert!(is_zero(-1e-13, EPSILON));
        assert!(is_zero(EPSILON, EPSILON));
        assert!(!is_zero(1e-11, EPSILON));
    }

    #[test]
    fn other_float_width() {
        assert!(is_positive(1e-3f32, 1e-6f32));
        assert!(is_zero(1e-7f32, 1e-6f32));
    }
}
