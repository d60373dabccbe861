//! Collection rule objects

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ALL
// ============================================================================

/// Validates that a slice is non-empty and every element passes a rule.
///
/// An empty slice fails with code `empty`. Otherwise the first failing
/// element fails the whole rule with code `all`, its position in the
/// `index` parameter and the element's own error nested.
///
/// # Examples
///
/// ```
/// use verdict_validator::foundation::Validate;
/// use verdict_validator::validators::{all, prime};
///
/// let rule = all(prime::<u32>());
/// assert!(rule.validate(&[2, 3, 5]).is_ok());
/// assert_eq!(rule.validate(&[]).unwrap_err().code, "empty");
///
/// let error = rule.validate(&[2, 4, 5]).unwrap_err();
/// assert_eq!(error.param("index"), Some("1"));
/// assert_eq!(error.nested[0].code, "prime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct All<V> {
    /// The rule applied to every element.
    pub validator: V,
}

impl<V> All<V> {
    /// Creates the rule.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V, T> Validate for All<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty",
                "Collection must contain at least one element",
            ));
        }

        for (i, item) in input.iter().enumerate() {
            self.validator.validate(item).map_err(|e| {
                ValidationError::new("all", format!("Element at index {i} failed validation"))
                    .with_param("index", i.to_string())
                    .with_nested_error(e)
            })?;
        }
        Ok(())
    }
}

/// Creates an [`All`] rule.
pub fn all<V>(validator: V) -> All<V> {
    All::new(validator)
}
