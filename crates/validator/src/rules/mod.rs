//! The three predicate families.
//!
//! Each module exposes plain functions plus a capability trait whose
//! provided methods forward to them:
//!
//! - [`number`]: [`NumberRules`] over integers and floats
//! - [`text`]: [`TextRules`] over unicode strings
//! - [`pattern`]: [`PatternRules`] over regular expressions and [`Pattern`]s
//!
//! [`Validator`](crate::Validator) implements all three.

pub mod number;
pub mod pattern;
pub mod text;

pub use number::{Float, NumberRules, Numeric, Parity};
pub use pattern::{PasswordPolicy, Pattern, PatternError, PatternRules, pattern_to_regex_string};
pub use text::{TextProfile, TextRules};
