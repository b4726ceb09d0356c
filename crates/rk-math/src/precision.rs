//! Rounding to a number of fractional digits of a value expressed in some
//! base unit.
//!
//! A duration formatter that shows "1.33 minutes" for 80 seconds needs the
//! seconds value that "1.33 minutes" stands for: `80 / 60` is rounded to two
//! decimal places and scaled back by 60, giving 79.8 seconds. The result is
//! split into whole units and billionths so it can be fed straight into
//! second/nanosecond style APIs.

use rk_core::{ensure, Error, Real, Result, RoundingRule};

use crate::float::round_f64_to_places;

/// Billionths per whole unit.
pub const BILLIONTHS_PER_UNIT: i64 = 1_000_000_000;

/// A rounded value split into whole units and billionths of a unit.
///
/// `billionths` has the sign of the value and a magnitude below
/// [`BILLIONTHS_PER_UNIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Precision {
    /// Whole units, truncated toward zero.
    pub whole: i64,
    /// Remaining fraction, in billionths of a unit.
    pub billionths: i64,
}

impl Precision {
    /// Round `value` to `digits` fractional digits of `base`-sized units.
    ///
    /// See [`round_to_precision`].
    pub fn round(value: Real, digits: i32, base: i64, rule: RoundingRule) -> Precision {
        if base == 0 {
            rk_core::debug!("rounding {value} to precision in a zero base");
            return Precision::default();
        }
        let base = base as Real;
        let rounded = round_f64_to_places(value / base, digits, rule) * base;
        Precision::from_f64(rounded)
    }

    /// Split `value` into whole units and billionths.
    ///
    /// Conversion saturates: infinities map to `i64::MIN`/`i64::MAX` whole
    /// units and NaN maps to zero.
    pub fn from_f64(value: Real) -> Precision {
        let whole = value.trunc();
        let billionths = ((value - whole) * BILLIONTHS_PER_UNIT as Real).round() as i64;
        let whole = whole as i64;
        if billionths.abs() >= BILLIONTHS_PER_UNIT {
            return Precision {
                whole: whole.saturating_add(billionths.signum()),
                billionths: 0,
            };
        }
        Precision { whole, billionths }
    }

    /// The value this pair stands for.
    pub fn as_f64(self) -> Real {
        self.whole as Real + self.billionths as Real / BILLIONTHS_PER_UNIT as Real
    }
}

impl From<Precision> for (i64, i64) {
    fn from(p: Precision) -> (i64, i64) {
        (p.whole, p.billionths)
    }
}

/// Round `value` to `digits` fractional decimal digits after expressing it in
/// units of `base`, and return the result in the original scale as
/// `(whole, billionths)`.
///
/// A zero `base` has no meaningful result and yields `(0, 0)`.
///
/// # Example
/// ```
/// use rk_core::RoundingRule;
/// use rk_math::round_to_precision;
///
/// // 80 seconds is 1.333... minutes.
/// assert_eq!(round_to_precision(80.0, 0, 60, RoundingRule::Down), (60, 0));
/// assert_eq!(round_to_precision(80.0, 2, 60, RoundingRule::Down), (79, 800_000_000));
/// assert_eq!(round_to_precision(80.0, 2, 60, RoundingRule::Up), (80, 400_000_000));
/// ```
pub fn round_to_precision(
    value: Real,
    digits: i32,
    base: i64,
    rule: RoundingRule,
) -> (i64, i64) {
    Precision::round(value, digits, base, rule).into()
}

/// Like [`round_to_precision`], but rejects operands it cannot round
/// meaningfully.
///
/// # Errors
/// Returns [`Error::NonFinite`] for a NaN or infinite `value` and
/// [`Error::Precondition`] for a zero `base`.
pub fn try_round_to_precision(
    value: Real,
    digits: i32,
    base: i64,
    rule: RoundingRule,
) -> Result<(i64, i64)> {
    if !value.is_finite() {
        return Err(Error::NonFinite(value));
    }
    ensure!(base != 0, "precision base must be non-zero");
    Ok(round_to_precision(value, digits, base, rule))
}
