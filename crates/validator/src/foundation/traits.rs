//! The rule-object trait and its combinator extension.

use crate::combinators::{And, Not, Or};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A reusable rule that either accepts an input or explains why not.
///
/// `Input` may be unsized, so string rules take `str` and collection rules
/// take `[T]`.
///
/// # Examples
///
/// ```
/// use verdict_validator::foundation::{Validate, ValidationError};
///
/// struct ShortWord;
///
/// impl Validate for ShortWord {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() <= 4 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("short_word", "At most 4 characters"))
///         }
///     }
/// }
///
/// assert!(ShortWord.validate("word").is_ok());
/// assert!(ShortWord.validate("sentence").is_err());
/// ```
pub trait Validate {
    /// The type being validated.
    type Input: ?Sized;

    /// Returns `Ok(())` when `input` satisfies the rule.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean view of [`validate`](Self::validate).
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Logical combinators for every [`Validate`] implementation.
///
/// # Examples
///
/// ```
/// use verdict_validator::prelude::*;
///
/// let label = only_alphanumeric().and(lowercased());
/// assert!(label.validate("build42").is_ok());
/// assert!(label.validate("Build42").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both rules must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one rule must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Passes exactly when `self` fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn is_valid_mirrors_validate() {
        assert!(AlwaysValid.is_valid("anything"));
        assert!(!AlwaysValid.not().is_valid("anything"));
    }
}
