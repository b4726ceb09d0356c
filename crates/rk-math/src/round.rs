//! Method-call form of increment rounding.

use rk_core::RoundingRule;

/// A value that can be snapped to a multiple of an increment of the same
/// type.
///
/// Implemented here for `i64` and `f64`, and for `SignedDuration` in
/// `rk-time`. Implementations are total: overflow saturates and a zero
/// increment yields zero.
///
/// # Example
/// ```
/// use rk_core::RoundingRule;
/// use rk_math::RoundToIncrement;
///
/// assert_eq!(18_i64.round_to_increment(10, RoundingRule::Down), 10);
/// assert_eq!(18_i64.round_to_increment(-10, RoundingRule::Up), 20);
/// ```
pub trait RoundToIncrement: Sized {
    /// Round `self` to a multiple of `increment` using `rule`.
    ///
    /// The sign of `increment` is ignored.
    fn round_to_increment(self, increment: Self, rule: RoundingRule) -> Self;
}
