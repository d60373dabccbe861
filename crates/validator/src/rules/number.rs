//! Numeric classification and range predicates.
//!
//! Integers and floats share one set of predicates through the sealed
//! [`Numeric`] trait. Floats only have a parity, and can only be prime,
//! when they are whole: `2.5` is neither odd, even, nor prime.
//!
//! Every `all_*` predicate returns `false` for an empty slice. An "all"
//! check here means "at least one element, and every element qualifies".
//!
//! ```
//! use verdict_validator::rules::number;
//!
//! assert!(number::is_prime(97));
//! assert!(number::is_prime(97.0));
//! assert!(!number::is_prime(97.5));
//! assert!(!number::all_positive::<i32>(&[]));
//! ```

use std::fmt;

/// Whether a whole number is odd or even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Divisible by two.
    Even,
    /// Not divisible by two.
    Odd,
}

mod sealed {
    pub trait Sealed {}
}

/// A number the predicates in this module accept.
///
/// Implemented for the primitive integers up to 64 bits and for `f32`/`f64`.
/// The trait is sealed.
pub trait Numeric: Copy + PartialOrd + fmt::Display + fmt::Debug + sealed::Sealed {
    /// The additive identity.
    const ZERO: Self;

    /// The parity of a whole value, `None` for fractional floats, NaN and
    /// infinities.
    fn parity(self) -> Option<Parity>;

    /// The value as a candidate for primality testing.
    ///
    /// `None` for negative numbers, fractional floats, and floats beyond
    /// the `u64` range; none of those can be prime. Whole floats are
    /// truncated.
    fn prime_candidate(self) -> Option<u64>;
}

/// Floating-point numbers, the only domain with a notion of wholeness.
pub trait Float: Numeric {
    /// True when the fractional remainder over 1 is exactly zero.
    fn is_whole(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            const ZERO: Self = 0;

            #[inline]
            fn parity(self) -> Option<Parity> {
                Some(if self % 2 == 0 { Parity::Even } else { Parity::Odd })
            }

            #[inline]
            fn prime_candidate(self) -> Option<u64> {
                u64::try_from(self).ok()
            }
        }
    )+};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// 2^64, the first float past the u64 range.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

macro_rules! impl_float {
    ($($t:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn parity(self) -> Option<Parity> {
                if !self.is_whole() {
                    return None;
                }
                Some(if self % 2.0 == 0.0 { Parity::Even } else { Parity::Odd })
            }

            #[inline]
            fn prime_candidate(self) -> Option<u64> {
                let value = f64::from(self);
                if !self.is_whole() || value < 0.0 || value >= U64_LIMIT {
                    return None;
                }
                Some(value as u64)
            }
        }

        impl Float for $t {
            #[inline]
            fn is_whole(self) -> bool {
                self % 1.0 == 0.0
            }
        }
    )+};
}

impl_float!(f32, f64);

// ============================================================================
// SINGLE VALUES
// ============================================================================

/// `n > 0`.
pub fn is_positive<N: Numeric>(n: N) -> bool {
    n > N::ZERO
}

/// `n < 0`.
pub fn is_negative<N: Numeric>(n: N) -> bool {
    n < N::ZERO
}

/// `n == 0`. Floats compare exactly, so `-0.0` is zero and `0.1` is not.
pub fn is_zero<N: Numeric>(n: N) -> bool {
    n == N::ZERO
}

/// Odd whole number.
pub fn is_odd<N: Numeric>(n: N) -> bool {
    n.parity() == Some(Parity::Odd)
}

/// Even whole number.
pub fn is_even<N: Numeric>(n: N) -> bool {
    n.parity() == Some(Parity::Even)
}

/// Prime whole number.
pub fn is_prime<N: Numeric>(n: N) -> bool {
    n.prime_candidate().is_some_and(is_prime_u64)
}

/// Float with no fractional part.
pub fn is_whole<F: Float>(n: F) -> bool {
    n.is_whole()
}

/// `min <= n <= max`. Reversed bounds match nothing.
pub fn is_in_range<N: Numeric>(n: N, min: N, max: N) -> bool {
    min <= n && n <= max
}

/// Trial division by 2, 3 and then `6k ± 1` up to `floor(sqrt(n))`.
fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // `i <= n / i` is `i * i <= n` without the overflow.
    let mut i: u64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

// ============================================================================
// COLLECTIONS
// ============================================================================

/// Non-empty and every element satisfies `predicate`.
#[inline]
fn all_non_empty<N: Copy>(nums: &[N], predicate: impl Fn(N) -> bool) -> bool {
    !nums.is_empty() && nums.iter().copied().all(predicate)
}

/// Every element is positive. Empty ⇒ `false`.
pub fn all_positive<N: Numeric>(nums: &[N]) -> bool {
    all_non_empty(nums, is_positive)
}

/// Every element is negative. Empty ⇒ `false`.
pub fn all_negative<N: Numeric>(nums: &[N]) -> bool {
    all_non_empty(nums, is_negative)
}

/// Every element is odd. Empty ⇒ `false`.
pub fn all_odd<N: Numeric>(nums: &[N]) -> bool {
    all_non_empty(nums, is_odd)
}

/// Every element is even. Empty ⇒ `false`.
pub fn all_even<N: Numeric>(nums: &[N]) -> bool {
    all_non_empty(nums, is_even)
}

/// Every element is prime. Empty ⇒ `false`.
pub fn all_prime<N: Numeric>(nums: &[N]) -> bool {
    all_non_empty(nums, is_prime)
}

/// Every element is zero. Empty ⇒ `false`.
pub fn all_zero<N: Numeric>(nums: &[N]) -> bool {
    all_non_empty(nums, is_zero)
}

/// Every element is whole. Empty ⇒ `false`.
pub fn all_whole<F: Float>(nums: &[F]) -> bool {
    all_non_empty(nums, is_whole)
}

/// Every element lies in `[min, max]`. Empty ⇒ `false`.
pub fn all_in_range<N: Numeric>(nums: &[N], min: N, max: N) -> bool {
    all_non_empty(nums, |n| is_in_range(n, min, max))
}

// ============================================================================
// CAPABILITY TRAIT
// ============================================================================

/// The numeric capability of a validator.
///
/// Every method has a provided body forwarding to this module's free
/// functions, so an implementor only writes `impl NumberRules for T {}`.
pub trait NumberRules {
    /// See [`is_positive`].
    fn is_positive<N: Numeric>(&self, n: N) -> bool {
        is_positive(n)
    }

    /// See [`is_negative`].
    fn is_negative<N: Numeric>(&self, n: N) -> bool {
        is_negative(n)
    }

    /// See [`is_zero`].
    fn is_zero<N: Numeric>(&self, n: N) -> bool {
        is_zero(n)
    }

    /// See [`is_odd`].
    fn is_odd<N: Numeric>(&self, n: N) -> bool {
        is_odd(n)
    }

    /// See [`is_even`].
    fn is_even<N: Numeric>(&self, n: N) -> bool {
        is_even(n)
    }

    /// See [`is_prime`].
    fn is_prime<N: Numeric>(&self, n: N) -> bool {
        is_prime(n)
    }

    /// See [`is_whole`].
    fn is_whole<F: Float>(&self, n: F) -> bool {
        is_whole(n)
    }

    /// See [`is_in_range`].
    fn is_in_range<N: Numeric>(&self, n: N, min: N, max: N) -> bool {
        is_in_range(n, min, max)
    }

    /// See [`all_positive`].
    fn all_positive<N: Numeric>(&self, nums: &[N]) -> bool {
        all_positive(nums)
    }

    /// See [`all_negative`].
    fn all_negative<N: Numeric>(&self, nums: &[N]) -> bool {
        all_negative(nums)
    }

    /// See [`all_odd`].
    fn all_odd<N: Numeric>(&self, nums: &[N]) -> bool {
        all_odd(nums)
    }

    /// See [`all_even`].
    fn all_even<N: Numeric>(&self, nums: &[N]) -> bool {
        all_even(nums)
    }

    /// See [`all_prime`].
    fn all_prime<N: Numeric>(&self, nums: &[N]) -> bool {
        all_prime(nums)
    }

    /// See [`all_zero`].
    fn all_zero<N: Numeric>(&self, nums: &[N]) -> bool {
        all_zero(nums)
    }

    /// See [`all_whole`].
    fn all_whole<F: Float>(&self, nums: &[F]) -> bool {
        all_whole(nums)
    }

    /// See [`all_in_range`].
    fn all_in_range<N: Numeric>(&self, nums: &[N], min: N, max: N) -> bool {
        all_in_range(nums, min, max)
    }
}
