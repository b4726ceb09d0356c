//! Rounding durations to a multiple of another duration.
//!
//! Both operands are normalized to a single `i128` count of attoseconds, so
//! an increment with a fractional second is handled exactly like a whole
//! one. The widest duration is under 2^63 seconds, or about 9.3 × 10^36
//! attoseconds, which leaves `i128` ample headroom for `quotient * step`.

use rk_core::{Error, Result, RoundingRule};
use rk_math::{round_to_step, RoundToIncrement};

use crate::duration::SignedDuration;
use crate::time_unit::TimeUnit;

/// Round `value` to the nearest multiple of `increment` under `rule`.
///
/// The sign of `increment` is ignored and a zero increment yields
/// [`SignedDuration::ZERO`]. Results beyond the representable range clamp
/// to [`SignedDuration::MIN`] or [`SignedDuration::MAX`].
///
/// # Example
/// ```
/// use rk_core::RoundingRule;
/// use rk_time::{round_duration, SignedDuration};
///
/// let secs = SignedDuration::from_secs;
/// assert_eq!(round_duration(secs(18), secs(10), RoundingRule::Down), secs(10));
/// assert_eq!(round_duration(secs(-15), secs(10), RoundingRule::ToNearestOrEven), secs(-20));
/// assert_eq!(
///     round_duration(SignedDuration::from_millis(1_250), SignedDuration::from_millis(500), RoundingRule::Up),
///     SignedDuration::from_millis(1_500),
/// );
/// ```
pub fn round_duration(
    value: SignedDuration,
    increment: SignedDuration,
    rule: RoundingRule,
) -> SignedDuration {
    match round_attos(value, increment, rule) {
        Some((rounded, _)) => saturate(rounded),
        None => SignedDuration::ZERO,
    }
}

/// Like [`round_duration`], and also report whether the result is an even
/// multiple of `increment`.
///
/// Formatters use the flag to decide ties in a coarser unit the same way
/// they were decided in the finer one. Zero counts as even, including the
/// degenerate zero-increment result.
pub fn round_duration_with_parity(
    value: SignedDuration,
    increment: SignedDuration,
    rule: RoundingRule,
) -> (SignedDuration, bool) {
    match round_attos(value, increment, rule) {
        Some((rounded, step)) => (saturate(rounded), (rounded / step) % 2 == 0),
        None => (SignedDuration::ZERO, true),
    }
}

/// Like [`round_duration`], but an unrepresentable result is an error
/// instead of being clamped.
///
/// # Errors
/// Returns [`Error::Overflow`] when the rounded duration is out of range.
pub fn checked_round_duration(
    value: SignedDuration,
    increment: SignedDuration,
    rule: RoundingRule,
) -> Result<SignedDuration> {
    match round_attos(value, increment, rule) {
        Some((rounded, _)) => SignedDuration::try_from_attos(rounded)
            .ok_or_else(|| Error::overflow(value, increment)),
        None => Ok(SignedDuration::ZERO),
    }
}

// Returns the rounded attoseconds and the step used, or `None` for a zero
// increment.
fn round_attos(
    value: SignedDuration,
    increment: SignedDuration,
    rule: RoundingRule,
) -> Option<(i128, i128)> {
    let step = increment.as_attos().abs();
    if step == 0 {
        return None;
    }
    Some((round_to_step(value.as_attos(), step, rule), step))
}

fn saturate(attos: i128) -> SignedDuration {
    SignedDuration::try_from_attos(attos).unwrap_or_else(|| {
        rk_core::trace!("rounded duration of {attos} attoseconds saturated");
        SignedDuration::from_attos(attos)
    })
}

impl SignedDuration {
    /// Round to a multiple of `increment`. See [`round_duration`].
    pub fn round(self, increment: SignedDuration, rule: RoundingRule) -> SignedDuration {
        round_duration(self, increment, rule)
    }

    /// Round to a multiple of `count` units, e.g. to the nearest 15 minutes.
    ///
    /// # Example
    /// ```
    /// use rk_core::RoundingRule;
    /// use rk_time::{SignedDuration, TimeUnit};
    ///
    /// let d = SignedDuration::from_secs(22 * 60 + 31);
    /// assert_eq!(
    ///     d.round_to_unit(TimeUnit::Minutes, 15, RoundingRule::ToNearestOrAwayFromZero),
    ///     SignedDuration::from_secs(30 * 60),
    /// );
    /// ```
    pub fn round_to_unit(self, unit: TimeUnit, count: i64, rule: RoundingRule) -> SignedDuration {
        round_duration(self, unit.duration() * count, rule)
    }
}

impl RoundToIncrement for SignedDuration {
    fn round_to_increment(self, increment: SignedDuration, rule: RoundingRule) -> SignedDuration {
        round_duration(self, increment, rule)
    }
}
