//! Logging macros.
//!
//! These forward to the `log` crate when the `logging` feature is enabled
//! and expand to nothing otherwise. The feature check happens in the crate
//! that invokes the macro, so every workspace crate that logs has its own
//! `logging` feature forwarding to `rk-core/logging`.

#[doc(hidden)]
#[cfg(feature = "logging")]
pub use log as __log;

#[doc(hidden)]
#[macro_export]
macro_rules! __log_enabled {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

/// Log at debug level.
#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => { $crate::__log_enabled!($crate::logging::__log::debug!($($tt)*)) }
}

/// Log at trace level.
#[macro_export]
macro_rules! trace {
    ($($tt:tt)*) => { $crate::__log_enabled!($crate::logging::__log::trace!($($tt)*)) }
}
