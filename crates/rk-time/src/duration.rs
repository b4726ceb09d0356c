//! `SignedDuration`: a signed span of time held as whole seconds plus
//! attoseconds.
//!
//! Seconds cover the full `i64` range and the attosecond part carries
//! sub-second precision without floating-point error. Arithmetic that needs
//! both parts at once goes through a single `i128` count of attoseconds,
//! which holds every representable duration exactly.

/// Attoseconds in one second.
pub const ATTOS_PER_SEC: i64 = 1_000_000_000_000_000_000;

const ATTOS_PER_SEC_WIDE: i128 = ATTOS_PER_SEC as i128;
const ATTOS_PER_MILLI: i64 = 1_000_000_000_000_000;
const ATTOS_PER_MICRO: i64 = 1_000_000_000_000;
const ATTOS_PER_NANO: i64 = 1_000_000_000;

/// A signed duration of whole seconds and attoseconds.
///
/// Invariants: `|attos| < ATTOS_PER_SEC`, and when both parts are non-zero
/// they share a sign. This makes the derived ordering numeric.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i64, i64)", into = "(i64, i64)"))]
pub struct SignedDuration {
    secs: i64,
    attos: i64,
}

impl SignedDuration {
    /// The zero duration.
    pub const ZERO: SignedDuration = SignedDuration { secs: 0, attos: 0 };

    /// The largest representable duration.
    pub const MAX: SignedDuration = SignedDuration {
        secs: i64::MAX,
        attos: ATTOS_PER_SEC - 1,
    };

    /// The smallest (most negative) representable duration.
    pub const MIN: SignedDuration = SignedDuration {
        secs: i64::MIN,
        attos: -(ATTOS_PER_SEC - 1),
    };

    /// Create a duration from seconds and attoseconds.
    ///
    /// The parts may have mixed signs and `attos` may exceed one second;
    /// they are normalized. Totals beyond the representable range saturate.
    pub fn new(secs: i64, attos: i64) -> Self {
        Self::from_attos(i128::from(secs) * ATTOS_PER_SEC_WIDE + i128::from(attos))
    }

    /// Create a duration of whole seconds.
    pub const fn from_secs(secs: i64) -> Self {
        Self { secs, attos: 0 }
    }

    /// Create a duration from milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self {
            secs: millis / 1_000,
            attos: (millis % 1_000) * ATTOS_PER_MILLI,
        }
    }

    /// Create a duration from microseconds.
    pub const fn from_micros(micros: i64) -> Self {
        Self {
            secs: micros / 1_000_000,
            attos: (micros % 1_000_000) * ATTOS_PER_MICRO,
        }
    }

    /// Create a duration from nanoseconds.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self {
            secs: nanos / 1_000_000_000,
            attos: (nanos % 1_000_000_000) * ATTOS_PER_NANO,
        }
    }

    /// Create a duration from a total count of attoseconds, saturating at
    /// [`SignedDuration::MIN`] and [`SignedDuration::MAX`].
    pub fn from_attos(attos: i128) -> Self {
        Self::try_from_attos(attos).unwrap_or(if attos < 0 { Self::MIN } else { Self::MAX })
    }

    /// Create a duration from a total count of attoseconds, or `None` if it
    /// is out of range.
    pub fn try_from_attos(attos: i128) -> Option<Self> {
        let secs = i64::try_from(attos / ATTOS_PER_SEC_WIDE).ok()?;
        // |remainder| < ATTOS_PER_SEC, which fits in an i64.
        let attos = (attos % ATTOS_PER_SEC_WIDE) as i64;
        Some(Self { secs, attos })
    }

    /// Whole seconds, truncated toward zero.
    pub const fn as_secs(&self) -> i64 {
        self.secs
    }

    /// The sub-second part in attoseconds. Has the sign of the duration.
    pub const fn subsec_attos(&self) -> i64 {
        self.attos
    }

    /// The sub-second part in nanoseconds, truncated toward zero.
    pub const fn subsec_nanos(&self) -> i64 {
        self.attos / ATTOS_PER_NANO
    }

    /// The whole duration as a count of attoseconds.
    pub fn as_attos(&self) -> i128 {
        i128::from(self.secs) * ATTOS_PER_SEC_WIDE + i128::from(self.attos)
    }

    /// The duration in seconds as a float. Loses precision for large values.
    pub fn as_secs_f64(&self) -> f64 {
        self.secs as f64 + self.attos as f64 / ATTOS_PER_SEC as f64
    }

    /// `true` if this is the zero duration.
    pub const fn is_zero(&self) -> bool {
        self.secs == 0 && self.attos == 0
    }

    /// `true` if this duration is less than zero.
    pub const fn is_negative(&self) -> bool {
        self.secs < 0 || self.attos < 0
    }

    /// `-1`, `0` or `1` according to the sign of the duration.
    pub const fn signum(&self) -> i64 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// The absolute value. `MIN.abs()` saturates to `MAX`.
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Checked addition.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::try_from_attos(self.as_attos() + rhs.as_attos())
    }

    /// Checked subtraction.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::try_from_attos(self.as_attos() - rhs.as_attos())
    }
}

impl std::ops::Neg for SignedDuration {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_attos(-self.as_attos())
    }
}

impl std::ops::Add for SignedDuration {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_attos(self.as_attos() + rhs.as_attos())
    }
}

impl std::ops::Sub for SignedDuration {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_attos(self.as_attos() - rhs.as_attos())
    }
}

impl std::ops::Mul<i64> for SignedDuration {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        Self::from_attos(self.as_attos().saturating_mul(i128::from(rhs)))
    }
}

impl std::ops::Mul<SignedDuration> for i64 {
    type Output = SignedDuration;
    fn mul(self, rhs: SignedDuration) -> SignedDuration {
        rhs * self
    }
}

impl From<(i64, i64)> for SignedDuration {
    fn from((secs, attos): (i64, i64)) -> Self {
        Self::new(secs, attos)
    }
}

impl From<SignedDuration> for (i64, i64) {
    fn from(d: SignedDuration) -> (i64, i64) {
        (d.secs, d.attos)
    }
}

impl std::fmt::Display for SignedDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}{}", self.secs.unsigned_abs())?;
        if self.attos != 0 {
            let frac = format!("{:018}", self.attos.unsigned_abs());
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        write!(f, "s")
    }
}

impl std::fmt::Debug for SignedDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SignedDuration({self})")
    }
}
