//! Numeric rule objects
//!
//! Each rule mirrors a predicate in [`crate::rules::number`] and reports the
//! offending value in the `actual` parameter.

use crate::foundation::ValidationError;
use crate::rules::number::{self, Float, Numeric};

crate::validator! {
    /// Validates that a number is greater than zero.
    pub Positive<N: Numeric> for N;
    rule(input) { number::is_positive(*input) }
    error(input) {
        ValidationError::new("positive", "Value must be positive")
            .with_param("actual", input.to_string())
    }
    fn positive();
}

crate::validator! {
    /// Validates that a number is less than zero.
    pub Negative<N: Numeric> for N;
    rule(input) { number::is_negative(*input) }
    error(input) {
        ValidationError::new("negative", "Value must be negative")
            .with_param("actual", input.to_string())
    }
    fn negative();
}

crate::validator! {
    /// Validates that a number is exactly zero.
    pub Zero<N: Numeric> for N;
    rule(input) { number::is_zero(*input) }
    error(input) {
        ValidationError::new("zero", "Value must be zero")
            .with_param("actual", input.to_string())
    }
    fn zero();
}

crate::validator! {
    /// Validates that a number is an odd whole number.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_validator::foundation::Validate;
    /// use verdict_validator::validators::odd;
    ///
    /// assert!(odd().validate(&7).is_ok());
    /// assert!(odd().validate(&7.0).is_ok());
    /// assert!(odd().validate(&7.5).is_err());
    /// ```
    pub Odd<N: Numeric> for N;
    rule(input) { number::is_odd(*input) }
    error(input) {
        ValidationError::new("odd", "Value must be odd")
            .with_param("actual", input.to_string())
    }
    fn odd();
}

crate::validator! {
    /// Validates that a number is an even whole number.
    pub Even<N: Numeric> for N;
    rule(input) { number::is_even(*input) }
    error(input) {
        ValidationError::new("even", "Value must be even")
            .with_param("actual", input.to_string())
    }
    fn even();
}

crate::validator! {
    /// Validates that a number is a prime whole number.
    pub Prime<N: Numeric> for N;
    rule(input) { number::is_prime(*input) }
    error(input) {
        ValidationError::new("prime", "Value must be prime")
            .with_param("actual", input.to_string())
    }
    fn prime();
}

crate::validator! {
    /// Validates that a float has no fractional part.
    pub Whole<F: Float> for F;
    rule(input) { number::is_whole(*input) }
    error(input) {
        ValidationError::new("whole", "Value must be a whole number")
            .with_param("actual", input.to_string())
    }
    fn whole();
}

crate::validator! {
    /// Validates that a number lies within an inclusive range.
    ///
    /// Reversed bounds reject every value.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_validator::foundation::Validate;
    /// use verdict_validator::validators::in_range;
    ///
    /// let percent = in_range(0, 100);
    /// assert!(percent.validate(&100).is_ok());
    ///
    /// let error = percent.validate(&101).unwrap_err();
    /// assert_eq!(error.code, "out_of_range");
    /// assert_eq!(error.param("max"), Some("100"));
    /// ```
    #[derive(Copy, PartialEq)]
    pub InRange<N: Numeric> { min: N, max: N } for N;
    rule(self, input) { number::is_in_range(*input, self.min, self.max) }
    error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
    fn in_range(min: N, max: N);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn sign_rules() {
        assert!(positive().validate(&1_u8).is_ok());
        assert!(positive().validate(&0_i32).is_err());
        assert!(negative().validate(&-0.5_f64).is_ok());
        assert!(zero().validate(&-0.0_f32).is_ok());
    }

    #[test]
    fn error_reports_actual_value() {
        let error = prime().validate(&21_u32).unwrap_err();
        assert_eq!(error.code, "prime");
        assert_eq!(error.param("actual"), Some("21"));
    }

    #[test]
    fn whole_only_for_floats() {
        assert!(whole().validate(&3.0_f64).is_ok());
        assert_eq!(whole().validate(&3.25_f32).unwrap_err().code, "whole");
    }

    #[test]
    fn reversed_range_rejects_everything() {
        let rule = in_range(10, 1);
        for n in 0..=11 {
            assert!(rule.validate(&n).is_err(), "{n}");
        }
    }

    #[test]
    fn phantom_rules_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Prime<u64>>(), 0);
        assert_eq!(even::<i8>(), Even::<i8>::default());
    }
}
