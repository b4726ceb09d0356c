//! Rounding 64-bit integers to a multiple of an increment.
//!
//! The arithmetic runs in `i128`, so `quotient * step` can always be formed.
//! Only the final narrowing back to `i64` can go out of range, and that is
//! where saturation (or, for the checked variant, the overflow error)
//! happens.

use rk_core::{Error, Magnitude, Result, RoundingRule, WideMagnitude};

use crate::domain::round_to_step;
use crate::round::RoundToIncrement;

/// Round `value` to the nearest multiple of `increment` under `rule`.
///
/// The sign of `increment` is ignored, and `i64::MIN` is treated as
/// `i64::MAX` since its magnitude has no `i64` representation. A zero
/// increment maps every value to `0`. Results beyond the `i64` range clamp
/// to `i64::MIN` or `i64::MAX`.
///
/// # Example
/// ```
/// use rk_core::RoundingRule;
/// use rk_math::round_i64;
///
/// assert_eq!(round_i64(18, 10, RoundingRule::Down), 10);
/// assert_eq!(round_i64(18, 10, RoundingRule::Up), 20);
/// assert_eq!(round_i64(5, 10, RoundingRule::ToNearestOrEven), 0);
/// assert_eq!(round_i64(i64::MAX - 5, 10, RoundingRule::Up), i64::MAX);
/// ```
pub fn round_i64(value: Magnitude, increment: Magnitude, rule: RoundingRule) -> Magnitude {
    match round_wide(value, increment, rule) {
        Some(rounded) => saturate(rounded),
        None => 0,
    }
}

/// Like [`round_i64`], but an unrepresentable result is an error instead of
/// being clamped.
///
/// # Errors
/// Returns [`Error::Overflow`] when the rounded value does not fit in `i64`.
pub fn checked_round_i64(
    value: Magnitude,
    increment: Magnitude,
    rule: RoundingRule,
) -> Result<Magnitude> {
    match round_wide(value, increment, rule) {
        Some(rounded) => {
            Magnitude::try_from(rounded).map_err(|_| Error::overflow(value, increment))
        }
        None => Ok(0),
    }
}

/// The magnitude of `increment`, clamped to `i64::MAX`.
fn step_of(increment: Magnitude) -> Magnitude {
    increment.checked_abs().unwrap_or(Magnitude::MAX)
}

/// Clamp a wide result into the `i64` range.
fn saturate(wide: WideMagnitude) -> Magnitude {
    Magnitude::try_from(wide).unwrap_or_else(|_| {
        rk_core::trace!("rounded value {wide} saturated to the i64 range");
        if wide < 0 {
            Magnitude::MIN
        } else {
            Magnitude::MAX
        }
    })
}

// `None` is the zero-increment case.
fn round_wide(
    value: Magnitude,
    increment: Magnitude,
    rule: RoundingRule,
) -> Option<WideMagnitude> {
    let step = step_of(increment);
    if step == 0 {
        return None;
    }
    Some(round_to_step(
        WideMagnitude::from(value),
        WideMagnitude::from(step),
        rule,
    ))
}

impl RoundToIncrement for i64 {
    fn round_to_increment(self, increment: i64, rule: RoundingRule) -> i64 {
        round_i64(self, increment, rule)
    }
}
