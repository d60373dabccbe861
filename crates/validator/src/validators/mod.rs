//! Built-in rule objects
//!
//! Every predicate in [`crate::rules`] has a rule-object counterpart here
//! that reports *why* an input failed. Rules compose with
//! [`ValidateExt`](crate::foundation::ValidateExt).
//!
//! # Categories
//!
//! - **Numeric**: sign, parity, primality, wholeness, inclusive range
//! - **Collection**: [`all`] over a slice
//! - **String**: emptiness, case, character classes, white space
//! - **Pattern**: e-mail, password policy, arbitrary regular expressions
//!
//! # Examples
//!
//! ```
//! use verdict_validator::prelude::*;
//!
//! let handle = non_empty(true).and(only_alphanumeric()).and(lowercased());
//! assert!(handle.validate("rustacean").is_ok());
//!
//! let lottery = all(prime::<u32>().and(in_range(1, 49)));
//! assert!(lottery.validate(&[2, 3, 5, 7, 11, 13]).is_ok());
//! assert!(lottery.validate(&[2, 3, 5, 7, 11, 53]).is_err());
//! ```

pub mod collection;
pub mod numeric;
pub mod pattern;
pub mod string;

// ============================================================================
// RE-EXPORTS: Numeric validators
// ============================================================================

pub use numeric::{
    Even, InRange, Negative, Odd, Positive, Prime, Whole, Zero, even, in_range, negative, odd,
    positive, prime, whole, zero,
};

// ============================================================================
// RE-EXPORTS: Collection validators
// ============================================================================

pub use collection::{All, all};

// ============================================================================
// RE-EXPORTS: String validators
// ============================================================================

pub use string::{
    Lowercased, NoWhitespace, NonEmpty, OnlyAlphabet, OnlyAlphanumeric, OnlyEmoji, OnlyNumber,
    OnlySymbol, Uppercased, lowercased, no_whitespace, non_empty, only_alphabet,
    only_alphanumeric, only_emoji, only_number, only_symbol, uppercased,
};

// ============================================================================
// RE-EXPORTS: Pattern validators
// ============================================================================

pub use pattern::{Matches, MatchesRegex, email, matches, matches_regex, password};
