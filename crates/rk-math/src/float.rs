//! Rounding floating-point values to an increment or to decimal places.
//!
//! Both entry points reduce to rounding a quotient to a whole number with
//! [`round_to_step`] and a step of `1.0`, then scaling back. A quotient that
//! picked up error in the division and lands within a few ULPs of an
//! integer is snapped to it first, otherwise `0.3` rounded down to a
//! multiple of `0.1` would come out as `0.2`. Exact quotients are never
//! snapped, and neither are quotients so large that the tolerance would
//! swallow a real fraction of the increment.
//!
//! NaN and infinite values are outside the domain. The infallible functions
//! pass a non-finite value through unchanged and return NaN for a
//! non-finite increment; [`try_round_f64`] reports both as errors.

use std::cmp::Ordering;

use rk_core::{ensure, Error, Real, Result, RoundingRule};

use crate::comparison::close_enough;
use crate::domain::round_to_step;
use crate::round::RoundToIncrement;

/// How many relative ULPs a quotient may sit away from an integer and still
/// be treated as that integer.
const SNAP_ULPS: u32 = 4;

/// The widest snap tolerance allowed, as a fraction of one increment.
const SNAP_LIMIT: Real = 1.0 / 1024.0;

/// Round `value` to a multiple of `increment` under `rule`.
///
/// The sign of `increment` is ignored and a zero increment yields `0.0`.
/// Values that are already (within rounding error) a multiple of the
/// increment are returned unchanged.
///
/// # Example
/// ```
/// use approx::assert_abs_diff_eq;
/// use rk_core::RoundingRule;
/// use rk_math::round_f64;
///
/// assert_abs_diff_eq!(round_f64(123.5678, 0.01, RoundingRule::Up), 123.57, epsilon = 1e-9);
/// assert_abs_diff_eq!(round_f64(123.5678, 5.0, RoundingRule::Down), 120.0);
/// ```
pub fn round_f64(value: Real, increment: Real, rule: RoundingRule) -> Real {
    if !value.is_finite() {
        rk_core::debug!("not rounding non-finite value {value}");
        return value;
    }
    if !increment.is_finite() {
        rk_core::debug!("rounding {value} to non-finite increment {increment}");
        return Real::NAN;
    }
    let step = increment.abs();
    if step == 0.0 {
        return 0.0;
    }
    let quotient = value / step;
    let exact = quotient.mul_add(step, -value) == 0.0;
    match round_quotient(quotient, exact, rule) {
        Quotient::Exact => value,
        Quotient::Rounded(n) => n * step,
    }
}

/// Like [`round_f64`], but non-finite operands and a zero increment are
/// errors.
///
/// # Errors
/// Returns [`Error::NonFinite`] if either operand is NaN or infinite and
/// [`Error::Precondition`] if `increment` is zero.
pub fn try_round_f64(value: Real, increment: Real, rule: RoundingRule) -> Result<Real> {
    if !value.is_finite() {
        return Err(Error::NonFinite(value));
    }
    if !increment.is_finite() {
        return Err(Error::NonFinite(increment));
    }
    ensure!(increment != 0.0, "rounding increment must be non-zero");
    Ok(round_f64(value, increment, rule))
}

/// Round `value` to `places` fractional decimal digits under `rule`.
///
/// This is rounding to a multiple of `10^-places`, computed by scaling with
/// the exact power `10^places` instead of multiplying by the inexact
/// `10^-places`. A negative `places` rounds to tens, hundreds and so on.
///
/// When `10^|places|` exceeds the `f64` range, a positive `places` leaves
/// `value` unchanged. A negative one puts every finite value strictly
/// between zero and the next grid point, which is infinite: rules that move
/// away from zero give an infinity with the sign of `value`, and the others
/// give `0.0`.
///
/// # Example
/// ```
/// use approx::assert_abs_diff_eq;
/// use rk_core::RoundingRule;
/// use rk_math::round_f64_to_places;
///
/// assert_abs_diff_eq!(round_f64_to_places(1.2345, 2, RoundingRule::Up), 1.24);
/// assert_abs_diff_eq!(round_f64_to_places(1.235, 2, RoundingRule::ToNearestOrEven), 1.24);
/// assert_abs_diff_eq!(round_f64_to_places(1234.0, -2, RoundingRule::Down), 1200.0);
/// ```
pub fn round_f64_to_places(value: Real, places: i32, rule: RoundingRule) -> Real {
    if !value.is_finite() {
        rk_core::debug!("not rounding non-finite value {value}");
        return value;
    }
    let scale = 10_f64.powi(places.saturating_abs());
    if scale.is_infinite() {
        return beyond_range(value, places, rule);
    }
    let (quotient, exact) = if places >= 0 {
        let quotient = value * scale;
        (quotient, value.mul_add(scale, -quotient) == 0.0)
    } else {
        let quotient = value / scale;
        (quotient, quotient.mul_add(scale, -value) == 0.0)
    };
    match round_quotient(quotient, exact, rule) {
        Quotient::Exact => value,
        Quotient::Rounded(n) if places >= 0 => n / scale,
        Quotient::Rounded(n) => n * scale,
    }
}

enum Quotient {
    /// The value already sits on the grid.
    Exact,
    /// The whole number of steps to scale back by.
    Rounded(Real),
}

// `exact` is whether the quotient was formed without rounding error.
fn round_quotient(quotient: Real, exact: bool, rule: RoundingRule) -> Quotient {
    let nearest = quotient.round();
    if quotient == nearest {
        return Quotient::Exact;
    }
    let tolerance = nearest.abs() * Real::EPSILON * Real::from(SNAP_ULPS);
    if !exact && tolerance <= SNAP_LIMIT && close_enough(quotient, nearest, SNAP_ULPS) {
        return Quotient::Exact;
    }
    Quotient::Rounded(round_to_step(quotient, 1.0, rule))
}

// Decimal places whose power of ten does not fit in an `f64`.
fn beyond_range(value: Real, places: i32, rule: RoundingRule) -> Real {
    if places >= 0 || value == 0.0 {
        return value;
    }
    rk_core::debug!("rounding {value} to 10^{} overflows the f64 range", -i64::from(places));
    if rule.expands(value < 0.0, Ordering::Less, false) {
        Real::INFINITY.copysign(value)
    } else {
        0.0
    }
}

impl RoundToIncrement for f64 {
    fn round_to_increment(self, increment: f64, rule: RoundingRule) -> f64 {
        round_f64(self, increment, rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn snaps_representation_error() {
        assert_eq!(round_f64(0.3, 0.1, RoundingRule::Down), 0.3);
        assert_eq!(round_f64(0.3, 0.1, RoundingRule::Up), 0.3);
        assert_eq!(round_f64(1.1, 0.1, RoundingRule::TowardZero), 1.1);
    }

    #[test]
    fn exact_quotients_are_not_snapped() {
        let half = 2_251_799_813_685_248.5;
        assert_eq!(round_f64(half, 1.0, RoundingRule::Down), 2_251_799_813_685_248.0);
        assert_eq!(round_f64(half, 1.0, RoundingRule::Up), 2_251_799_813_685_249.0);
        assert_eq!(round_f64(half, -1.0, RoundingRule::ToNearestOrEven), 2_251_799_813_685_248.0);

        let nudged = 3.000_000_000_000_000_4;
        assert_eq!(round_f64(nudged, 1.0, RoundingRule::Down), 3.0);
        assert_eq!(round_f64(nudged, 1.0, RoundingRule::Up), 4.0);
    }

    #[test]
    fn large_quotients_keep_their_fraction() {
        let value = 1_000_000.000_000_000_5;
        let down = round_f64(value, 1e-9, RoundingRule::Down);
        assert!(down < value);
        assert_abs_diff_eq!(down, 1_000_000.0, epsilon = 1e-9);
        assert!(round_f64(value, 1e-9, RoundingRule::Up) > value);
    }

    #[test]
    fn negative_values_follow_direction() {
        assert_abs_diff_eq!(round_f64(-8.599, 0.1, RoundingRule::Down), -8.6, epsilon = 1e-9);
        assert_abs_diff_eq!(round_f64(-8.599, 0.1, RoundingRule::Up), -8.5, epsilon = 1e-9);
        assert_abs_diff_eq!(round_f64(-8.599, 0.1, RoundingRule::TowardZero), -8.5, epsilon = 1e-9);
        assert_abs_diff_eq!(round_f64(-8.599, 0.1, RoundingRule::AwayFromZero), -8.6, epsilon = 1e-9);
    }

    #[test]
    fn ties() {
        assert_eq!(round_f64(2.5, 1.0, RoundingRule::ToNearestOrEven), 2.0);
        assert_eq!(round_f64(2.5, 1.0, RoundingRule::ToNearestOrAwayFromZero), 3.0);
        assert_eq!(round_f64(-7.5, 5.0, RoundingRule::ToNearestOrEven), -10.0);
        assert_eq!(round_f64(-7.5, 5.0, RoundingRule::ToNearestOrAwayFromZero), -10.0);
        assert_eq!(round_f64(12.5, 5.0, RoundingRule::ToNearestOrEven), 10.0);
    }

    #[test]
    fn increment_sign_and_zero() {
        assert_eq!(round_f64(17.0, -5.0, RoundingRule::Up), 20.0);
        assert_eq!(round_f64(17.0, 0.0, RoundingRule::Up), 0.0);
        assert_eq!(round_f64(-17.0, -0.0, RoundingRule::Down), 0.0);
    }

    #[test]
    fn non_finite() {
        assert!(round_f64(Real::NAN, 1.0, RoundingRule::Up).is_nan());
        assert_eq!(round_f64(Real::INFINITY, 1.0, RoundingRule::Down), Real::INFINITY);
        assert!(round_f64(1.0, Real::INFINITY, RoundingRule::Down).is_nan());
        assert!(round_f64_to_places(Real::NAN, 2, RoundingRule::Down).is_nan());

        assert!(matches!(
            try_round_f64(Real::NAN, 1.0, RoundingRule::Up),
            Err(Error::NonFinite(_))
        ));
        assert_eq!(
            try_round_f64(1.0, Real::NEG_INFINITY, RoundingRule::Up),
            Err(Error::NonFinite(Real::NEG_INFINITY))
        );
        assert!(matches!(
            try_round_f64(1.0, 0.0, RoundingRule::Up),
            Err(Error::Precondition(_))
        ));
        assert_eq!(try_round_f64(7.0, 2.0, RoundingRule::Down), Ok(6.0));
    }

    #[test]
    fn decimal_places() {
        assert_abs_diff_eq!(round_f64_to_places(1.2345, 2, RoundingRule::ToNearestOrAwayFromZero), 1.23);
        assert_abs_diff_eq!(round_f64_to_places(1.2355, 2, RoundingRule::ToNearestOrAwayFromZero), 1.24);
        assert_abs_diff_eq!(round_f64_to_places(-1.2301, 2, RoundingRule::Down), -1.24);
        assert_abs_diff_eq!(round_f64_to_places(-1.2301, 2, RoundingRule::Up), -1.23);
        assert_abs_diff_eq!(round_f64_to_places(1.3333333333333333, 3, RoundingRule::Down), 1.333);
        assert_eq!(round_f64_to_places(1.25, 0, RoundingRule::Up), 2.0);
        assert_eq!(round_f64_to_places(1250.0, -2, RoundingRule::ToNearestOrEven), 1200.0);
        assert_eq!(round_f64_to_places(0.1, 1, RoundingRule::Up), 0.1);
    }

    #[test]
    fn places_beyond_f64_range() {
        assert_eq!(round_f64_to_places(1234.0, -400, RoundingRule::TowardZero), 0.0);
        assert_eq!(round_f64_to_places(1234.0, -400, RoundingRule::Down), 0.0);
        assert_eq!(round_f64_to_places(1234.0, -400, RoundingRule::Up), Real::INFINITY);
        assert_eq!(round_f64_to_places(-1234.0, -400, RoundingRule::Down), Real::NEG_INFINITY);
        assert_eq!(round_f64_to_places(-1234.0, -400, RoundingRule::AwayFromZero), Real::NEG_INFINITY);
        assert_eq!(round_f64_to_places(-1234.0, -400, RoundingRule::ToNearestOrAwayFromZero), 0.0);
        assert_eq!(round_f64_to_places(0.0, -400, RoundingRule::Up), 0.0);
        assert_eq!(round_f64_to_places(1234.5, 400, RoundingRule::Down), 1234.5);
        assert_eq!(round_f64_to_places(0.0, 400, RoundingRule::Down), 0.0);
    }
}
