//! Pattern rule objects

use crate::foundation::ValidationError;
use crate::rules::pattern::{PasswordPolicy, Pattern, PatternError, compile_regex, matches_pattern};

crate::validator! {
    /// Validates that text satisfies a structured [`Pattern`].
    ///
    /// Fails with `invalid_format`, naming the pattern in `expected`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Matches { pattern: Pattern } for str;
    rule(self, input) { matches_pattern(input, &self.pattern) }
    error(self, input) { ValidationError::invalid_format(self.pattern.name()) }
    new(pattern: Pattern) { Self { pattern } }
    fn matches(pattern: Pattern);
}

/// Creates a [`Matches`] rule for e-mail addresses.
pub fn email() -> Matches {
    Matches::new(Pattern::email())
}

/// Creates a [`Matches`] rule for passwords meeting `policy`.
///
/// # Examples
///
/// ```
/// use verdict_validator::foundation::Validate;
/// use verdict_validator::rules::PasswordPolicy;
/// use verdict_validator::validators::password;
///
/// let rule = password(PasswordPolicy::default().requiring_number());
/// assert!(rule.validate("hunter42x").is_ok());
/// assert!(rule.validate("hunterxyz").is_err());
/// ```
pub fn password(policy: PasswordPolicy) -> Matches {
    Matches::new(Pattern::password_with(policy))
}

crate::validator! {
    /// Validates that a regular expression matches somewhere in the text.
    ///
    /// The expression is compiled once, up front, so an invalid one is
    /// reported by the constructor instead of silently never matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict_validator::foundation::Validate;
    /// use verdict_validator::validators::matches_regex;
    ///
    /// let rule = matches_regex(r"^\d{3}-\d{4}$").unwrap();
    /// assert!(rule.validate("555-0199").is_ok());
    /// assert!(matches_regex("(unclosed").is_err());
    /// ```
    pub MatchesRegex { regex: fancy_regex::Regex } for str;
    rule(self, input) {
        match self.regex.is_match(input) {
            Ok(matched) => matched,
            Err(error) => {
                tracing::debug!(%error, pattern = self.regex.as_str(), "regex gave up, treating as no match");
                false
            }
        }
    }
    error(self, input) {
        ValidationError::new("matches_regex", "Text must match the regular expression")
            .with_param("pattern", self.regex.as_str().to_owned())
    }
    new(pattern: &str) -> PatternError {
        let regex = compile_regex(pattern)?;
        Ok(Self { regex })
    }
    fn matches_regex(pattern: &str) -> PatternError;
}
