//! Confidence values
//!
//! Every result carries a single confidence in `[0.0, 1.0]`. Dataset feeds are
//! not trusted to respect that range, so values are checked or clamped at the
//! boundary.

/// Lowest valid confidence
pub const MIN_CONFIDENCE: f64 = 0.0;

/// Highest valid confidence
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Check that a confidence is finite and inside `[0, 1]`
pub fn is_valid(value: f64) -> bool {
    value.is_finite() && (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&value)
}

/// Clamp a confidence into `[0, 1]`
///
/// Non-finite input maps to `0.0`.
pub fn clamp(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_CONFIDENCE;
    }
    value.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: clamping always yields a valid confidence
        #[test]
        fn test_clamp_always_valid(value in proptest::num::f64::ANY) {
            prop_assert!(is_valid(clamp(value)));
        }

        /// Property: valid confidences are left untouched
        #[test]
        fn test_clamp_identity_in_range(value in 0.0f64..=1.0) {
            prop_assert_eq!(clamp(value), value);
        }
    }
}
