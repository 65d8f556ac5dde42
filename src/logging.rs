// src/logging.rs
// Crate-level logging shorthands over the `log` facade.
// The library never installs a logger; the host application does.

#[doc(hidden)]
pub use ::log::{debug, error, info, warn};

/// Target used for every record emitted by this crate.
pub const TARGET: &str = "kes_matches";

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::logging::info!(target: $crate::logging::TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::logging::debug!(target: $crate::logging::TARGET, $($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::logging::warn!(target: $crate::logging::TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::logging::error!(target: $crate::logging::TARGET, $($arg)*)
    };
}
