//! # verdict-validator
//!
//! Stateless predicates over numbers, unicode text and text patterns, plus
//! composable rule objects that explain their failures.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict_validator::prelude::*;
//!
//! let validator = Validator::shared();
//!
//! assert!(validator.all_prime(&[2, 3, 5, 7]));
//! assert!(!validator.all_prime::<u32>(&[]));
//! assert!(validator.only_emoji("👍🏽🎉"));
//! assert!(validator.matches_pattern("Password123", &Pattern::password()));
//! ```
//!
//! ## Predicates
//!
//! The [`rules`] module holds three families of plain `bool` predicates,
//! each also reachable as methods on [`Validator`]:
//!
//! - **Numbers**: [`rules::number`], sign, parity, primality, wholeness, range
//! - **Text**: [`rules::text`], case and unicode character classes
//! - **Patterns**: [`rules::pattern`], e-mail, password policy, regex search
//!
//! ## Rule Objects
//!
//! [`validators`] wraps every predicate as a [`Validate`](foundation::Validate)
//! implementation that returns a [`ValidationError`](foundation::ValidationError)
//! with a code and parameters. Compose them with `.and()` / `.or()` / `.not()`:
//!
//! ```rust
//! use verdict_validator::prelude::*;
//!
//! let slug = only_alphanumeric().and(lowercased());
//! let error = slug.validate("Hello").unwrap_err();
//! assert_eq!(error.code, "lowercased");
//! ```
//!
//! Use the [`validator!`] macro to declare new rules the same way the
//! built-in ones are declared.

// Rule objects return `ValidationError` by value on the hot path.
#![allow(clippy::result_large_err)]
// And<Or<Not<...>, ...>, ...> nests deeply by construction.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validator;
pub mod validators;

pub use rules::{
    Float, NumberRules, Numeric, Parity, PasswordPolicy, Pattern, PatternError, PatternRules,
    TextProfile, TextRules,
};
pub use validator::Validator;
