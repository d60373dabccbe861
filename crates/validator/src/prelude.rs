//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict_validator::prelude::*;` import that brings
//! in the composite [`Validator`], the capability traits, every built-in
//! rule object and the combinators.
//!
//! The free predicate functions are left out; reach them through
//! [`crate::rules`] so that `only_emoji` in scope always means the rule
//! object.
//!
//! # Examples
//!
//! ```
//! use verdict_validator::prelude::*;
//!
//! assert!(Validator::shared().is_in_range(5, 1, 10));
//! assert!(in_range(1, 10).validate(&5).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, validate_with_all,
};

// ============================================================================
// RULES: Predicate families and the composite validator
// ============================================================================

pub use crate::Validator;
pub use crate::rules::{
    Float, NumberRules, Numeric, Parity, PasswordPolicy, Pattern, PatternError, PatternRules,
    TextProfile, TextRules,
};

// ============================================================================
// VALIDATORS: All built-in rule objects
// ============================================================================

pub use crate::validators::{
    All, Even, InRange, Lowercased, Matches, MatchesRegex, Negative, NoWhitespace, NonEmpty, Odd,
    OnlyAlphabet, OnlyAlphanumeric, OnlyEmoji, OnlyNumber, OnlySymbol, Positive, Prime,
    Uppercased, Whole, Zero, all, email, even, in_range, lowercased, matches, matches_regex,
    negative, no_whitespace, non_empty, odd, only_alphabet, only_alphanumeric, only_emoji,
    only_number, only_symbol, password, positive, prime, uppercased, whole, zero,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};
