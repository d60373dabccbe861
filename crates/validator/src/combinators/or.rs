//! OR combinator.

use crate::foundation::{Validate, ValidationError};

/// At least one rule must pass. When both fail, both errors are nested
/// under an `or_failed` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => Err(ValidationError::new(
                    "or_failed",
                    "All alternatives failed",
                )
                .with_nested_error(left_error)
                .with_nested_error(right_error)),
            },
        }
    }
}

/// Creates an `Or` combinator.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{only_emoji, only_number};

    #[test]
    fn either_alternative_passes() {
        let rule = or(only_number(), only_emoji());
        assert!(rule.validate("123").is_ok());
        assert!(rule.validate("😀").is_ok());

        let error = rule.validate("abc").unwrap_err();
        assert_eq!(error.code, "or_failed");
        assert_eq!(error.nested.len(), 2);
    }
}
