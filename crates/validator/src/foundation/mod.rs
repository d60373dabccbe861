//! Rule-object building blocks.
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! The boolean predicates in [`crate::rules`] do not need any of this; it
//! exists for callers that want failures they can show to a user.

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// Runs every rule against `value` and collects all failures.
///
/// # Examples
///
/// ```
/// use verdict_validator::foundation::{Validate, validate_with_all};
/// use verdict_validator::validators::{lowercased, no_whitespace};
///
/// let rules: [&dyn Validate<Input = str>; 2] = [&lowercased(), &no_whitespace()];
/// let errors = validate_with_all("Hello World", &rules).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result()
}
