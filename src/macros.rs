//! Small crate-wide convenience macros.
//!
//! The logging macros format their arguments like `format!` and forward to
//! [`crate::logging`], which writes to the browser console on wasm32 and to
//! stderr on native test builds.

/// Debug-level console output.  Compiled out of release builds.
///
/// ```rust,ignore
/// debug_log!("navigate: {}", route.id());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::logging::debug(&format!($($arg)*));
        }
    };
}

/// Warning-level console output.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::warn(&format!($($arg)*))
    };
}

/// Error-level console output.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logging::error(&format!($($arg)*))
    };
}
