//! Constructor macros for [`BacktraceError`](crate::BacktraceError).
//!
//! - [`macro@crate::backtrace_error`] - Builds a carrier from a format
//!   string, optionally with an explicit condition.
//! - [`macro@crate::raise`] - Same arms, but early-returns
//!   `Err(error.into())` from the enclosing function.

/// Builds a [`BacktraceError`](crate::BacktraceError), capturing the stack
/// at the call site.
///
/// # Syntax
///
/// - `backtrace_error!("fmt", args...)` - condition defaults to
///   [`UNSPECIFIED_CONDITION`](crate::UNSPECIFIED_CONDITION)
/// - `backtrace_error!(condition: EXPR, "fmt", args...)` - explicit
///   condition
///
/// # Examples
///
/// ```
/// use backtrace_error::backtrace_error;
///
/// let missing = "config.toml";
/// let err = backtrace_error!(condition: "MissingFile", "cannot open {missing}");
/// assert_eq!(err.condition(), "MissingFile");
/// assert_eq!(err.message(), "cannot open config.toml");
/// ```
#[macro_export]
macro_rules! backtrace_error {
    (condition: $condition:expr, $($arg:tt)*) => {
        $crate::BacktraceError::with_condition($condition, format!($($arg)*))
    };
    ($($arg:tt)*) => {
        $crate::BacktraceError::new(format!($($arg)*))
    };
}

/// Raises a [`BacktraceError`](crate::BacktraceError): builds it, converts it
/// with `.into()`, and returns it as `Err` from the enclosing function.
///
/// # Examples
///
/// ```
/// use backtrace_error::{raise, BacktraceError};
///
/// fn check(x: i32) -> Result<i32, BacktraceError> {
///     if x <= 0 {
///         raise!(condition: "BadInput", "x must be positive, got {x}");
///     }
///     Ok(x)
/// }
///
/// assert_eq!(check(-1).unwrap_err().condition(), "BadInput");
/// assert_eq!(check(2).unwrap(), 2);
/// ```
#[macro_export]
macro_rules! raise {
    (condition: $condition:expr, $($arg:tt)*) => {
        return Err($crate::backtrace_error!(condition: $condition, $($arg)*).into())
    };
    ($($arg:tt)*) => {
        return Err($crate::backtrace_error!($($arg)*).into())
    };
}
