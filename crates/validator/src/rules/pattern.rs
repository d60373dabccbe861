//! Structured text patterns and regular-expression matching.
//!
//! A [`Pattern`] compiles to exactly one canonical regular expression
//! ([`pattern_to_regex_string`]). Matching is a search, not a full match;
//! the canonical expressions carry their own `^`/`$` anchors.
//!
//! The password expression needs look-ahead, which the `regex` crate does
//! not support, so compilation goes through `fancy-regex`.
//!
//! [`matches_regex`] and [`matches_pattern`] never fail: an expression that
//! does not compile, or that gives up while matching, simply does not match.
//! Callers that need to tell the two apart use [`try_matches_regex`].

use std::fmt;
use std::num::NonZeroUsize;

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// CANONICAL EXPRESSIONS
// ============================================================================

const EMAIL_REGEX: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

const NO_WHITESPACE: &str = r"(?!.*\s)";
const NEEDS_LOWERCASE: &str = r"(?=.*?[a-z])";
const NEEDS_UPPERCASE: &str = r"(?=.*?[A-Z])";
const NEEDS_DIGIT: &str = r"(?=.*?[0-9])";
const NEEDS_SYMBOL: &str = r"(?=.*?[!@#$%^&*_\-+=.,?:])";

const DEFAULT_MIN_LENGTH: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => panic!("default password length must be non-zero"),
};

// ============================================================================
// ERRORS
// ============================================================================

/// Why a regular expression could not be evaluated.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The expression is not valid syntax.
    #[error("invalid regular expression `{pattern}`: {source}")]
    Compile {
        /// The expression as given.
        pattern: String,
        /// The engine's diagnosis.
        #[source]
        source: fancy_regex::Error,
    },

    /// The expression compiled but the backtracking engine gave up on the
    /// input (backtrack limit exceeded).
    #[error("regular expression `{pattern}` aborted while matching: {source}")]
    Match {
        /// The expression as given.
        pattern: String,
        /// The engine's diagnosis.
        #[source]
        source: fancy_regex::Error,
    },
}

// ============================================================================
// PASSWORD POLICY
// ============================================================================

/// Requirements for [`Pattern::Password`].
///
/// A lowercase ASCII letter is always required and white space is always
/// rejected; the flags add requirements on top of that.
///
/// Deserializes with every field optional, falling back to the defaults
/// (`min_length` 8, no extra requirements):
///
/// ```
/// use verdict_validator::rules::pattern::PasswordPolicy;
///
/// let policy: PasswordPolicy =
///     serde_json::from_str(r#"{ "min_length": 12, "requires_symbol": true }"#).unwrap();
/// assert_eq!(policy.min_length.get(), 12);
/// assert!(policy.requires_symbol);
/// assert!(!policy.requires_uppercase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: NonZeroUsize,
    /// At least one `A-Z`.
    pub requires_uppercase: bool,
    /// At least one `0-9`.
    pub requires_number: bool,
    /// At least one of `!@#$%^&*_-+=.,?:`.
    pub requires_symbol: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            requires_uppercase: false,
            requires_number: false,
            requires_symbol: false,
        }
    }
}

impl PasswordPolicy {
    /// Default policy with a different minimum length. Zero is raised to 1.
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            min_length: NonZeroUsize::new(min_length).unwrap_or(NonZeroUsize::MIN),
            ..Self::default()
        }
    }

    /// Every requirement switched on.
    pub fn strong(min_length: usize) -> Self {
        Self::with_min_length(min_length)
            .requiring_uppercase()
            .requiring_number()
            .requiring_symbol()
    }

    /// Also require an uppercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn requiring_uppercase(mut self) -> Self {
        self.requires_uppercase = true;
        self
    }

    /// Also require a digit.
    #[must_use = "builder methods must be chained or built"]
    pub fn requiring_number(mut self) -> Self {
        self.requires_number = true;
        self
    }

    /// Also require a symbol.
    #[must_use = "builder methods must be chained or built"]
    pub fn requiring_symbol(mut self) -> Self {
        self.requires_symbol = true;
        self
    }

    fn to_regex(self) -> String {
        let mut regex = String::with_capacity(96);
        regex.push('^');
        regex.push_str(NO_WHITESPACE);
        regex.push_str(NEEDS_LOWERCASE);
        if self.requires_uppercase {
            regex.push_str(NEEDS_UPPERCASE);
        }
        if self.requires_number {
            regex.push_str(NEEDS_DIGIT);
        }
        if self.requires_symbol {
            regex.push_str(NEEDS_SYMBOL);
        }
        regex.push_str(&format!(".{{{},}}$", self.min_length));
        regex
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// A named, parameterized text rule.
///
/// ```
/// use verdict_validator::rules::pattern::{Pattern, PasswordPolicy};
///
/// assert_eq!(
///     Pattern::password().to_regex(),
///     r"^(?!.*\s)(?=.*?[a-z]).{8,}$",
/// );
/// assert_eq!(
///     Pattern::password_with(PasswordPolicy::with_min_length(4).requiring_number()).to_regex(),
///     r"^(?!.*\s)(?=.*?[a-z])(?=.*?[0-9]).{4,}$",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    /// A simplified e-mail address: local part, `@`, domain, and a
    /// top-level domain of at least two letters.
    Email,
    /// A password meeting a [`PasswordPolicy`].
    Password(PasswordPolicy),
}

impl Pattern {
    /// The e-mail pattern.
    pub const fn email() -> Self {
        Self::Email
    }

    /// A password pattern with the default policy.
    pub fn password() -> Self {
        Self::Password(PasswordPolicy::default())
    }

    /// A password pattern with a custom policy.
    pub const fn password_with(policy: PasswordPolicy) -> Self {
        Self::Password(policy)
    }

    /// Short lowercase name, matching the serialized `kind` tag.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password(_) => "password",
        }
    }

    /// The canonical regular expression.
    pub fn to_regex(&self) -> String {
        pattern_to_regex_string(self)
    }

    /// Compiles the canonical regular expression.
    pub fn compile(&self) -> Result<Regex, PatternError> {
        tracing::trace!(pattern = ?self, "compiling structured pattern");
        compile_regex(&self.to_regex())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str(EMAIL_REGEX),
            Self::Password(policy) => f.write_str(&policy.to_regex()),
        }
    }
}

/// The canonical regular expression of `pattern`.
pub fn pattern_to_regex_string(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Email => EMAIL_REGEX.to_owned(),
        Pattern::Password(policy) => policy.to_regex(),
    }
}

// ============================================================================
// MATCHING
// ============================================================================

/// Compiles `pattern`.
pub fn compile_regex(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Compile {
        pattern: pattern.to_owned(),
        source,
    })
}

/// Whether `pattern` matches anywhere in `text`, with failures surfaced.
pub fn try_matches_regex(text: &str, pattern: &str) -> Result<bool, PatternError> {
    let regex = compile_regex(pattern)?;
    regex.is_match(text).map_err(|source| PatternError::Match {
        pattern: pattern.to_owned(),
        source,
    })
}

/// Whether `pattern` matches anywhere in `text`.
///
/// An invalid expression is "no match", never an error.
///
/// ```
/// use verdict_validator::rules::pattern::matches_regex;
///
/// assert!(matches_regex("order-1234", r"\d{4}"));
/// assert!(!matches_regex("anything", r"(unclosed"));
/// ```
pub fn matches_regex(text: &str, pattern: &str) -> bool {
    match try_matches_regex(text, pattern) {
        Ok(matched) => matched,
        Err(error) => {
            tracing::debug!(%error, "regular expression unusable, treating as no match");
            false
        }
    }
}

/// Whether `text` satisfies `pattern`.
pub fn matches_pattern(text: &str, pattern: &Pattern) -> bool {
    matches_regex(text, &pattern.to_regex())
}

// ============================================================================
// CAPABILITY TRAIT
// ============================================================================

/// The pattern capability of a validator. Provided methods forward to this
/// module's free functions.
pub trait PatternRules {
    /// See [`matches_regex`].
    fn matches_regex(&self, text: &str, pattern: &str) -> bool {
        matches_regex(text, pattern)
    }

    /// See [`matches_pattern`].
    fn matches_pattern(&self, text: &str, pattern: &Pattern) -> bool {
        matches_pattern(text, pattern)
    }
}
