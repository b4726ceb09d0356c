//! # rk-core
//!
//! Core types and error definitions for roundkit.
//!
//! This crate holds the pieces shared by every rounding domain in the
//! workspace: the [`RoundingRule`] selector and its tie-break decision, the
//! error type, and the logging macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Logging macros over the optional `log` facade.
pub mod logging;

/// Rounding rules and the shared tie-break decision.
pub mod rule;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used by the continuous rounders.
pub type Real = f64;

/// Signed integer magnitude rounded by the integer rounder.
pub type Magnitude = i64;

/// Wide intermediate used wherever `quotient * step` may exceed 64 bits.
pub type WideMagnitude = i128;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rule::RoundingRule;
