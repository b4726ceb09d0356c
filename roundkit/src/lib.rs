//! # roundkit
//!
//! Rounding to an increment under six standard rules, for `i64`, `f64` and
//! second/attosecond durations, with saturation instead of overflow.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use roundkit::{RoundingRule, RoundToIncrement, SignedDuration};
//!
//! assert_eq!(18_i64.round_to_increment(10, RoundingRule::Up), 20);
//! assert_eq!(roundkit::round_to_significant_digits(2468, 2, RoundingRule::ToNearestOrEven), 2500);
//! assert_eq!(roundkit::round_to_precision(80.0, 2, 60, RoundingRule::Down), (79, 800_000_000));
//!
//! let d = SignedDuration::from_millis(1_499);
//! assert_eq!(d.round(SignedDuration::from_secs(1), RoundingRule::ToNearestOrEven), SignedDuration::from_secs(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Rounding rules, error definitions and logging macros.
pub use rk_core as core;

/// Integer, float, precision and significant-digit rounding.
pub use rk_math as math;

/// Durations and duration rounding.
pub use rk_time as time;

pub use rk_core::{Error, Result, RoundingRule};
pub use rk_math::{
    checked_round_i64, checked_round_to_significant_digits, round_f64, round_f64_to_places,
    round_i64, round_to_precision, round_to_significant_digits, try_round_f64,
    try_round_to_precision, Precision, RoundToIncrement,
};
pub use rk_time::{
    checked_round_duration, round_duration, round_duration_with_parity, SignedDuration, TimeUnit,
};
