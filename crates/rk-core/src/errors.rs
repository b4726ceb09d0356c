//! Error types for roundkit.
//!
//! Every rounding entry point is total: it saturates or degenerates instead
//! of failing. Errors only come out of the `checked_*` and `try_*` variants,
//! which surface those edges to callers that would rather know.

use thiserror::Error;

/// The top-level error type used throughout roundkit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument, e.g. an unknown rounding rule name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The rounded result is not representable in the operand's type.
    #[error("rounding {value} to a multiple of {increment} overflows")]
    Overflow {
        /// The value that was being rounded.
        value: String,
        /// The increment it was being rounded to.
        increment: String,
    },

    /// A floating-point operand was NaN or infinite.
    #[error("non-finite operand: {0}")]
    NonFinite(f64),
}

impl Error {
    /// Build an [`Error::Overflow`] from any displayable operand pair.
    pub fn overflow(
        value: impl std::fmt::Display,
        increment: impl std::fmt::Display,
    ) -> Error {
        Error::Overflow {
            value: value.to_string(),
            increment: increment.to_string(),
        }
    }
}

/// Shorthand `Result` type used throughout roundkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rk_core::{ensure, errors::Error};
/// fn positive_base(base: i64) -> rk_core::errors::Result<i64> {
///     ensure!(base != 0, "base must be non-zero, got {base}");
///     Ok(base)
/// }
/// assert!(positive_base(60).is_ok());
/// assert!(positive_base(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
