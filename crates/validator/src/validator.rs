//! The composite validator.

use crate::rules::{NumberRules, PatternRules, TextRules};

static SHARED: Validator = Validator::new();

/// One handle for every predicate family.
///
/// `Validator` holds no state. [`Validator::shared`] and
/// [`Validator::new`] are interchangeable; pick whichever suits the call
/// site (a `'static` reference to pass around, or a fresh value in a test).
///
/// # Examples
///
/// ```
/// use verdict_validator::prelude::*;
///
/// let validator = Validator::shared();
///
/// assert!(validator.is_prime(13));
/// assert!(validator.is_lowercased("hello 123"));
/// assert!(validator.matches_pattern("test@example.com", &Pattern::email()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Validator;

impl Validator {
    /// Creates a validator. Behaves exactly like [`Validator::shared`].
    pub const fn new() -> Self {
        Self
    }

    /// The process-wide validator.
    pub fn shared() -> &'static Self {
        &SHARED
    }
}

impl NumberRules for Validator {}

impl TextRules for Validator {}

impl PatternRules for Validator {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + 'static>() {}

    #[test]
    fn shareable_across_threads() {
        assert_send_sync::<Validator>();
        assert_eq!(std::mem::size_of::<Validator>(), 0);
    }

    #[test]
    fn fresh_and_shared_agree() {
        let fresh = Validator::new();
        let shared = Validator::shared();

        assert_eq!(fresh.is_even(4), shared.is_even(4));
        assert_eq!(fresh.only_emoji("😀"), shared.only_emoji("😀"));
        assert_eq!(
            fresh.matches_regex("abc", "^a"),
            shared.matches_regex("abc", "^a")
        );
    }

    #[test]
    fn usable_from_many_threads() {
        let handles: Vec<_> = (0_i64..8)
            .map(|n| std::thread::spawn(move || Validator::shared().is_prime(n * 2 + 1)))
            .collect();

        let results: Vec<bool> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(results, [false, true, true, true, false, true, true, false]);
    }
}
