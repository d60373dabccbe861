//! Integration tests for the numeric predicates, through the composite
//! `Validator` the way a consumer calls them.

use rstest::rstest;
use verdict_validator::prelude::*;

fn validator() -> Validator {
    Validator::new()
}

// ============================================================================
// INTEGERS: single values
// ============================================================================

#[rstest]
#[case(1, true)]
#[case(5, true)]
#[case(i64::MAX, true)]
#[case(0, false)]
#[case(-1, false)]
#[case(-5, false)]
#[case(i64::MIN, false)]
fn positive_int(#[case] n: i64, #[case] expected: bool) {
    assert_eq!(validator().is_positive(n), expected);
}

#[rstest]
#[case(-1, true)]
#[case(-5, true)]
#[case(i64::MIN, true)]
#[case(0, false)]
#[case(1, false)]
#[case(i64::MAX, false)]
fn negative_int(#[case] n: i64, #[case] expected: bool) {
    assert_eq!(validator().is_negative(n), expected);
}

#[rstest]
#[case(1, true)]
#[case(5, true)]
#[case(-1, true)]
#[case(-5, true)]
#[case(0, false)]
#[case(2, false)]
#[case(-2, false)]
#[case(-4, false)]
fn odd_int(#[case] n: i64, #[case] expected: bool) {
    assert_eq!(validator().is_odd(n), expected);
}

#[rstest]
#[case(0, true)]
#[case(2, true)]
#[case(-2, true)]
#[case(-4, true)]
#[case(1, false)]
#[case(5, false)]
#[case(-1, false)]
#[case(-5, false)]
fn even_int(#[case] n: i64, #[case] expected: bool) {
    assert_eq!(validator().is_even(n), expected);
}

#[rstest]
#[case(2, true)]
#[case(3, true)]
#[case(5, true)]
#[case(7, true)]
#[case(11, true)]
#[case(13, true)]
#[case(17, true)]
#[case(97, true)]
#[case(0, false)]
#[case(1, false)]
#[case(4, false)]
#[case(6, false)]
#[case(8, false)]
#[case(25, false)]
#[case(49, false)]
#[case(-1, false)]
#[case(-4, false)]
#[case(-7, false)]
fn prime_int(#[case] n: i64, #[case] expected: bool) {
    assert_eq!(validator().is_prime(n), expected);
}

#[test]
fn zero_int() {
    let v = validator();
    assert!(v.is_zero(0));
    assert!(!v.is_zero(1));
    assert!(!v.is_zero(-1));
}

#[rstest]
#[case(5, 1, 10, true)]
#[case(-5, -10, -1, true)]
#[case(1, 1, 10, true)]
#[case(10, 1, 10, true)]
#[case(0, 1, 10, false)]
#[case(11, 1, 10, false)]
#[case(5, 10, 1, false)]
fn in_range_int(#[case] n: i64, #[case] min: i64, #[case] max: i64, #[case] expected: bool) {
    assert_eq!(validator().is_in_range(n, min, max), expected);
}

#[test]
fn every_integer_width_is_accepted() {
    let v = validator();
    assert!(v.is_prime(7_i8));
    assert!(v.is_prime(251_u8));
    assert!(v.is_even(i16::MIN));
    assert!(v.is_odd(u32::MAX));
    assert!(v.is_prime(4_294_967_291_u64));
    assert!(v.is_positive(usize::MAX));
    assert!(v.is_negative(isize::MIN));
}

// ============================================================================
// INTEGERS: collections
// ============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], true)]
#[case(&[100], true)]
#[case(&[], false)]
#[case(&[1, 2, 0, 4, 5], false)]
#[case(&[1, 2, -1, 4, 5], false)]
fn all_positive_ints(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(validator().all_positive(nums), expected);
}

#[rstest]
#[case(&[-1, -2, -3, -4, -5], true)]
#[case(&[-100], true)]
#[case(&[], false)]
#[case(&[-1, -2, 0, -4, -5], false)]
#[case(&[-1, -2, 1, -4, -5], false)]
fn all_negative_ints(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(validator().all_negative(nums), expected);
}

#[rstest]
#[case(&[1, 3, 5, 7, 9], true)]
#[case(&[-1, -3, -5], true)]
#[case(&[], false)]
#[case(&[1, 2, 3, 5, 7], false)]
#[case(&[2, 4, 6], false)]
fn all_odd_ints(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(validator().all_odd(nums), expected);
}

#[rstest]
#[case(&[0, 2, 4, 6, 8], true)]
#[case(&[-2, -4, -6], true)]
#[case(&[], false)]
#[case(&[1, 2, 4, 6, 8], false)]
#[case(&[1, 3, 5], false)]
fn all_even_ints(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(validator().all_even(nums), expected);
}

#[rstest]
#[case(&[2, 3, 5, 7, 11], true)]
#[case(&[2], true)]
#[case(&[], false)]
#[case(&[2, 3, 4, 5, 7], false)]
#[case(&[1, 2, 3], false)]
fn all_prime_ints(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(validator().all_prime(nums), expected);
}

#[rstest]
#[case(&[0, 0, 0], true)]
#[case(&[0], true)]
#[case(&[], false)]
#[case(&[0, 0, 1], false)]
#[case(&[1, 2, 3], false)]
fn all_zero_ints(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(validator().all_zero(nums), expected);
}

#[rstest]
#[case(&[1, 5, 10], true)]
#[case(&[5], true)]
#[case(&[], false)]
#[case(&[0, 5, 10], false)]
#[case(&[1, 5, 11], false)]
fn all_in_range_ints(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(validator().all_in_range(nums, 1, 10), expected);
}

// ============================================================================
// FLOATS: single values
// ============================================================================

#[rstest]
#[case(1.0, true)]
#[case(0.1, true)]
#[case(f64::MAX, true)]
#[case(f64::MIN_POSITIVE, true)]
#[case(f64::from_bits(1), true)]
#[case(0.0, false)]
#[case(-1.0, false)]
#[case(-0.1, false)]
#[case(f64::MIN, false)]
#[case(-f64::MIN_POSITIVE, false)]
#[case(-f64::from_bits(1), false)]
fn positive_float(#[case] n: f64, #[case] expected: bool) {
    assert_eq!(validator().is_positive(n), expected);
}

#[rstest]
#[case(-1.0, true)]
#[case(-0.1, true)]
#[case(f64::MIN, true)]
#[case(-f64::MIN_POSITIVE, true)]
#[case(-f64::from_bits(1), true)]
#[case(0.0, false)]
#[case(1.0, false)]
#[case(0.1, false)]
#[case(f64::MAX, false)]
fn negative_float(#[case] n: f64, #[case] expected: bool) {
    assert_eq!(validator().is_negative(n), expected);
}

#[rstest]
#[case(1.0, true)]
#[case(3.0, true)]
#[case(-1.0, true)]
#[case(-3.0, true)]
#[case(0.0, false)]
#[case(2.0, false)]
#[case(-4.0, false)]
#[case(1.5, false)]
#[case(2.5, false)]
fn odd_float(#[case] n: f64, #[case] expected: bool) {
    assert_eq!(validator().is_odd(n), expected);
}

#[rstest]
#[case(0.0, true)]
#[case(2.0, true)]
#[case(4.0, true)]
#[case(-2.0, true)]
#[case(-4.0, true)]
#[case(1.0, false)]
#[case(-3.0, false)]
#[case(1.5, false)]
#[case(2.5, false)]
fn even_float(#[case] n: f64, #[case] expected: bool) {
    assert_eq!(validator().is_even(n), expected);
}

#[rstest]
#[case(2.0, true)]
#[case(3.0, true)]
#[case(5.0, true)]
#[case(7.0, true)]
#[case(11.0, true)]
#[case(13.0, true)]
#[case(17.0, true)]
#[case(97.0, true)]
#[case(0.0, false)]
#[case(1.0, false)]
#[case(4.0, false)]
#[case(6.0, false)]
#[case(-1.0, false)]
#[case(-7.0, false)]
#[case(2.5, false)]
#[case(3.7, false)]
fn prime_float(#[case] n: f64, #[case] expected: bool) {
    assert_eq!(validator().is_prime(n), expected);
}

#[rstest]
#[case(0.0, true)]
#[case(1.0, false)]
#[case(0.1, false)]
#[case(-0.1, false)]
#[case(-1.0, false)]
fn zero_float(#[case] n: f64, #[case] expected: bool) {
    assert_eq!(validator().is_zero(n), expected);
}

#[rstest]
#[case(0.0, true)]
#[case(1.0, true)]
#[case(-2.0, true)]
#[case(1e300, true)]
#[case(0.1, false)]
#[case(1.5, false)]
#[case(-0.1, false)]
#[case(-1.5, false)]
#[case(f64::INFINITY, false)]
fn whole_float(#[case] n: f64, #[case] expected: bool) {
    assert_eq!(validator().is_whole(n), expected);
}

#[rstest]
#[case(5.0, 1.0, 10.0, true)]
#[case(-5.0, -10.0, -1.0, true)]
#[case(7.5, 1.5, 10.5, true)]
#[case(-7.5, -10.5, -1.5, true)]
#[case(1.0, 1.0, 10.0, true)]
#[case(10.0, 1.0, 10.0, true)]
#[case(0.0, 1.0, 10.0, false)]
#[case(11.0, 1.0, 10.0, false)]
fn in_range_float(#[case] n: f64, #[case] min: f64, #[case] max: f64, #[case] expected: bool) {
    assert_eq!(validator().is_in_range(n, min, max), expected);
}

#[test]
fn f32_follows_the_same_rules() {
    let v = validator();
    assert!(v.is_prime(13.0_f32));
    assert!(!v.is_prime(13.5_f32));
    assert!(v.is_whole(-8.0_f32));
    assert!(v.all_even(&[2.0_f32, 4.0]));
}

// ============================================================================
// FLOATS: collections
// ============================================================================

#[rstest]
#[case(&[1.5, 2.5, 3.0, 4.5, 5.5], true)]
#[case(&[100.5], true)]
#[case(&[], false)]
#[case(&[1.0, 2.5, 0.0, 4.5, 5.0], false)]
#[case(&[1.0, 2.5, -1.0, 4.5, 5.0], false)]
fn all_positive_floats(#[case] nums: &[f64], #[case] expected: bool) {
    assert_eq!(validator().all_positive(nums), expected);
}

#[rstest]
#[case(&[-1.5, -2.5, -3.0, -4.5, -5.5], true)]
#[case(&[-100.5], true)]
#[case(&[], false)]
#[case(&[-1.0, -2.5, 0.0, -4.5, -5.0], false)]
#[case(&[-1.0, -2.5, 1.0, -4.5, -5.0], false)]
fn all_negative_floats(#[case] nums: &[f64], #[case] expected: bool) {
    assert_eq!(validator().all_negative(nums), expected);
}

#[rstest]
#[case(&[1.0, 3.0, 5.0, 7.0, 9.0], true)]
#[case(&[-1.0, -3.0, -5.0], true)]
#[case(&[], false)]
#[case(&[2.0, 3.0, 5.0, 7.0], false)]
#[case(&[1.5, 3.0, 5.0, 7.0], false)]
fn all_odd_floats(#[case] nums: &[f64], #[case] expected: bool) {
    assert_eq!(validator().all_odd(nums), expected);
}

#[rstest]
#[case(&[0.0, 2.0, 4.0, 6.0, 8.0], true)]
#[case(&[-2.0, -4.0, -6.0], true)]
#[case(&[], false)]
#[case(&[1.0, 4.0, 6.0, 8.0], false)]
#[case(&[2.5, 4.0, 6.0, 8.0], false)]
fn all_even_floats(#[case] nums: &[f64], #[case] expected: bool) {
    assert_eq!(validator().all_even(nums), expected);
}

#[rstest]
#[case(&[2.0, 3.0, 5.0, 7.0, 11.0], true)]
#[case(&[2.0], true)]
#[case(&[], false)]
#[case(&[2.5], false)]
#[case(&[2.0, 3.0, 4.0, 5.0, 7.0], false)]
#[case(&[1.0, 2.0, 3.0], false)]
fn all_prime_floats(#[case] nums: &[f64], #[case] expected: bool) {
    assert_eq!(validator().all_prime(nums), expected);
}

#[rstest]
#[case(&[0.0, 0.0, 0.0], true)]
#[case(&[0.0], true)]
#[case(&[], false)]
#[case(&[0.0, 0.0, 1.5], false)]
#[case(&[1.0, 2.0, 3.0], false)]
fn all_zero_floats(#[case] nums: &[f64], #[case] expected: bool) {
    assert_eq!(validator().all_zero(nums), expected);
}

#[rstest]
#[case(&[1.0, 2.0, 3.0], true)]
#[case(&[0.0, -2.0, -3.0], true)]
#[case(&[], false)]
#[case(&[1.0, 2.5, 3.0], false)]
#[case(&[1.5, 2.7, 3.9], false)]
fn all_whole_floats(#[case] nums: &[f64], #[case] expected: bool) {
    assert_eq!(validator().all_whole(nums), expected);
}

#[rstest]
#[case(&[1.0, 5.0, 10.0], 1.0, 10.0, true)]
#[case(&[5.0], 1.0, 10.0, true)]
#[case(&[5.5], 1.5, 10.5, true)]
#[case(&[], 1.0, 10.0, false)]
#[case(&[1.0, 5.0, 10.5], 1.0, 10.0, false)]
#[case(&[0.5, 5.0, 10.0], 1.0, 10.0, false)]
fn all_in_range_floats(
    #[case] nums: &[f64],
    #[case] min: f64,
    #[case] max: f64,
    #[case] expected: bool,
) {
    assert_eq!(validator().all_in_range(nums, min, max), expected);
}
