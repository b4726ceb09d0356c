//! Rounding rules.
//!
//! A [`RoundingRule`] only selects a candidate. The rounders in `rk-math` and
//! `rk-time` find the two grid points around a value and ask
//! [`RoundingRule::expands`] which one to keep.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// The policy that picks between the two multiples of an increment that
/// bracket a value.
///
/// In the documentation for each variant, the "truncated" candidate is the
/// multiple between zero and the value, and the "expanded" candidate is the
/// next multiple further away from zero.
///
/// # Example
///
/// ```
/// use rk_core::RoundingRule;
///
/// let rule: RoundingRule = "toward-zero".parse()?;
/// assert_eq!(rule, RoundingRule::TowardZero);
/// assert_eq!(RoundingRule::default(), RoundingRule::ToNearestOrEven);
/// # Ok::<(), rk_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RoundingRule {
    /// Rounds toward negative infinity (floor to the grid).
    Down,
    /// Rounds toward positive infinity (ceiling to the grid).
    Up,
    /// Rounds toward zero. Acts like `Down` for non-negative values and like
    /// `Up` for negative ones.
    TowardZero,
    /// Rounds away from zero. Acts like `Up` for non-negative values and like
    /// `Down` for negative ones.
    AwayFromZero,
    /// Rounds to the nearest multiple. On a tie, picks the multiple whose
    /// quotient by the increment is even, e.g. `5` rounds to `0` and `15`
    /// rounds to `20` with an increment of `10`.
    #[default]
    ToNearestOrEven,
    /// Rounds to the nearest multiple. On a tie, picks the one farther from
    /// zero. This is how rounding is usually taught in school.
    ToNearestOrAwayFromZero,
}

impl RoundingRule {
    /// All rules, in declaration order.
    pub const ALL: [RoundingRule; 6] = [
        RoundingRule::Down,
        RoundingRule::Up,
        RoundingRule::TowardZero,
        RoundingRule::AwayFromZero,
        RoundingRule::ToNearestOrEven,
        RoundingRule::ToNearestOrAwayFromZero,
    ];

    /// Decide whether the truncated candidate must move one step away from
    /// zero.
    ///
    /// Callers only ask this when the remainder is non-zero. `negative` is
    /// the sign of the value being rounded. `half` compares twice the
    /// remainder's magnitude against the step: `Less` means the truncated
    /// candidate is nearer, `Equal` is an exact tie and `Greater` means the
    /// expanded candidate is nearer. `truncated_is_odd` is the parity of the
    /// truncated quotient, which only matters for ties under
    /// `ToNearestOrEven`.
    #[inline]
    pub fn expands(self, negative: bool, half: Ordering, truncated_is_odd: bool) -> bool {
        match self {
            RoundingRule::Down => negative,
            RoundingRule::Up => !negative,
            RoundingRule::TowardZero => false,
            RoundingRule::AwayFromZero => true,
            RoundingRule::ToNearestOrAwayFromZero => half != Ordering::Less,
            RoundingRule::ToNearestOrEven => match half {
                Ordering::Less => false,
                Ordering::Equal => truncated_is_odd,
                Ordering::Greater => true,
            },
        }
    }

    /// The kebab-case name of this rule, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            RoundingRule::Down => "down",
            RoundingRule::Up => "up",
            RoundingRule::TowardZero => "toward-zero",
            RoundingRule::AwayFromZero => "away-from-zero",
            RoundingRule::ToNearestOrEven => "to-nearest-or-even",
            RoundingRule::ToNearestOrAwayFromZero => "to-nearest-or-away-from-zero",
        }
    }
}

impl std::fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingRule {
    type Err = Error;

    /// Parse a rule name. Matching ignores ASCII case and the `-`/`_`
    /// separators, so `toward-zero`, `TOWARD_ZERO` and `towardZero` all work.
    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        RoundingRule::ALL
            .into_iter()
            .find(|rule| rule.name().replace('-', "") == folded)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown rounding rule `{s}`")))
    }
}
