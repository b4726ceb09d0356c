//! Rounding integers to a number of significant decimal digits.

use rk_core::{Magnitude, Result, RoundingRule};

use crate::integer::{checked_round_i64, round_i64};

/// Number of decimal digits in `|value|`. Zero has one digit.
///
/// # Example
/// ```
/// use rk_math::significant::decimal_digits;
///
/// assert_eq!(decimal_digits(2468), 4);
/// assert_eq!(decimal_digits(-7), 1);
/// assert_eq!(decimal_digits(i64::MIN), 19);
/// ```
pub fn decimal_digits(value: Magnitude) -> u32 {
    value.unsigned_abs().checked_ilog10().map_or(1, |p| p + 1)
}

/// Round `value` so that it keeps at most `digits` significant decimal
/// digits.
///
/// This rounds to a multiple of `10^(decimal_digits(value) - digits)`, so the
/// result saturates exactly like [`round_i64`] when the rounded value does
/// not fit in `i64`. A `digits` of zero or less leaves `value` unchanged.
///
/// # Example
/// ```
/// use rk_core::RoundingRule;
/// use rk_math::round_to_significant_digits;
///
/// assert_eq!(round_to_significant_digits(2468, 2, RoundingRule::ToNearestOrEven), 2500);
/// assert_eq!(round_to_significant_digits(9999, 1, RoundingRule::Up), 10_000);
/// assert_eq!(round_to_significant_digits(9999, 4, RoundingRule::Up), 9999);
/// ```
pub fn round_to_significant_digits(
    value: Magnitude,
    digits: i32,
    rule: RoundingRule,
) -> Magnitude {
    match significant_increment(value, digits) {
        Some(increment) => round_i64(value, increment, rule),
        None => value,
    }
}

/// Like [`round_to_significant_digits`], but an unrepresentable result is
/// an error instead of being clamped.
///
/// # Errors
/// Returns [`rk_core::Error::Overflow`] when the rounded value does not fit
/// in `i64`.
pub fn checked_round_to_significant_digits(
    value: Magnitude,
    digits: i32,
    rule: RoundingRule,
) -> Result<Magnitude> {
    match significant_increment(value, digits) {
        Some(increment) => checked_round_i64(value, increment, rule),
        None => Ok(value),
    }
}

fn significant_increment(value: Magnitude, digits: i32) -> Option<Magnitude> {
    if digits <= 0 {
        return None;
    }
    // At most 18, since an i64 has at most 19 digits.
    let exponent = decimal_digits(value).saturating_sub(digits.unsigned_abs());
    Some(10_i64.pow(exponent))
}
