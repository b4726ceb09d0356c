//! Floating-point comparison helpers.
//!
//! The float rounder uses [`close_enough`] to recognise quotients such as
//! `0.3 / 0.1 == 2.9999999999999996` as the integer they stand for.

use rk_core::Real;

/// Return `true` if `|a - b| <= n * epsilon` where `epsilon` is the
/// machine-epsilon relative to `max(|a|, |b|)`.
///
/// # Example
/// ```
/// use rk_math::comparison::close_enough;
///
/// assert!(close_enough(0.3 / 0.1, 3.0, 4));
/// assert!(!close_enough(2.5, 3.0, 4));
/// ```
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = (a.abs().max(b.abs())) * Real::EPSILON * Real::from(n);
    (a - b).abs() <= eps
}
