//! Logical composition of rule objects.
//!
//! Usually reached through [`ValidateExt`](crate::foundation::ValidateExt)
//! rather than constructed by hand.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
