//! # rk-time
//!
//! Signed durations of whole seconds plus attoseconds, fixed-length time
//! units, and rounding of durations to a multiple of another duration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Second/attosecond durations.
pub mod duration;

/// Duration rounding.
pub mod round;

/// Fixed-length time units.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use duration::{SignedDuration, ATTOS_PER_SEC};
pub use round::{checked_round_duration, round_duration, round_duration_with_parity};
pub use time_unit::TimeUnit;
