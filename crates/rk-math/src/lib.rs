//! # rk-math
//!
//! Rounding to an increment, to decimal places and to significant digits,
//! for `i64` and `f64` values.
//!
//! Every rule is implemented once in [`domain::round_to_step`]; the modules
//! here adapt it to each numeric type and add the derived operations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// The generic rounding core.
pub mod domain;

/// Floating-point increment and decimal-place rounding.
pub mod float;

/// Integer increment rounding.
pub mod integer;

/// Rounding to fractional digits of a base unit.
pub mod precision;

/// The `RoundToIncrement` method trait.
pub mod round;

/// Significant-digit rounding.
pub mod significant;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use domain::{round_to_step, RoundingDomain};
pub use float::{round_f64, round_f64_to_places, try_round_f64};
pub use integer::{checked_round_i64, round_i64};
pub use precision::{round_to_precision, try_round_to_precision, Precision};
pub use round::RoundToIncrement;
pub use significant::{checked_round_to_significant_digits, round_to_significant_digits};
