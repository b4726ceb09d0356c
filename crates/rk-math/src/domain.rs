//! The generic rounding core.
//!
//! The six rules are implemented once, in [`round_to_step`], against the
//! small arithmetic capability described by [`RoundingDomain`]. Each numeric
//! domain supplies an adapter:
//!
//! * `i128` carries both `i64` magnitudes and second/attosecond durations.
//!   It is wide enough that `quotient * step` never overflows for either.
//! * `f64` works in quotient space: the float rounder divides by the
//!   increment first and then rounds with a step of `1.0`.

use std::cmp::Ordering;

use num_traits::Signed;
use rk_core::RoundingRule;

/// The arithmetic a numeric domain must provide to be rounded by
/// [`round_to_step`].
pub trait RoundingDomain: Copy + PartialOrd + Signed {
    /// `self / step`, truncated toward zero to an integral value.
    fn div_trunc(self, step: Self) -> Self;

    /// Whether an integral value is odd.
    fn is_odd(self) -> bool;

    /// Addition that clamps at the domain's bounds instead of overflowing.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Multiplication that clamps at the domain's bounds instead of
    /// overflowing.
    fn saturating_mul(self, rhs: Self) -> Self;
}

impl RoundingDomain for i128 {
    #[inline]
    fn div_trunc(self, step: i128) -> i128 {
        self / step
    }

    #[inline]
    fn is_odd(self) -> bool {
        self % 2 != 0
    }

    #[inline]
    fn saturating_add(self, rhs: i128) -> i128 {
        i128::saturating_add(self, rhs)
    }

    #[inline]
    fn saturating_mul(self, rhs: i128) -> i128 {
        i128::saturating_mul(self, rhs)
    }
}

impl RoundingDomain for f64 {
    #[inline]
    fn div_trunc(self, step: f64) -> f64 {
        (self / step).trunc()
    }

    // Every float at or above 2^53 is an even integer, so this is exact
    // across the whole range.
    #[inline]
    fn is_odd(self) -> bool {
        self % 2.0 != 0.0
    }

    #[inline]
    fn saturating_add(self, rhs: f64) -> f64 {
        self + rhs
    }

    #[inline]
    fn saturating_mul(self, rhs: f64) -> f64 {
        self * rhs
    }
}

/// Round `value` to a multiple of `step` using `rule`.
///
/// `step` must be strictly positive. Values that are already a multiple of
/// `step` come back unchanged under every rule.
///
/// # Example
/// ```
/// use rk_core::RoundingRule;
/// use rk_math::domain::round_to_step;
///
/// assert_eq!(round_to_step(15_i128, 10, RoundingRule::ToNearestOrEven), 20);
/// assert_eq!(round_to_step(5_i128, 10, RoundingRule::ToNearestOrEven), 0);
/// assert_eq!(round_to_step(-12_i128, 10, RoundingRule::Down), -20);
/// ```
pub fn round_to_step<T: RoundingDomain>(value: T, step: T, rule: RoundingRule) -> T {
    debug_assert!(step > T::zero(), "rounding step must be positive");
    let quotient = value.div_trunc(step);
    let truncated = quotient.saturating_mul(step);
    let remainder = value - truncated;
    if remainder.is_zero() {
        return value;
    }
    // |remainder| < step, so doubling it stays in range for both adapters.
    let twice = remainder.abs() + remainder.abs();
    let half = twice.partial_cmp(&step).unwrap_or(Ordering::Less);
    if rule.expands(value.is_negative(), half, quotient.is_odd()) {
        quotient.saturating_add(value.signum()).saturating_mul(step)
    } else {
        truncated
    }
}
