//! Error type that captures a symbolized stack backtrace at the exact moment
//! the error is raised, for later printing by whatever handler consumes it.
//!
//! Construction consults a process-wide (or injected) [`CapturePolicy`]; when
//! enabled, the selected walker produces the backtrace text that is frozen
//! into the carrier. Capture failures never raise: they render as sentinel or
//! partial text, so attaching diagnostics can never break the error path
//! reporting the primary failure.
//!
//! # Examples
//!
//! ## Raising and catching
//!
//! ```
//! use backtrace_error::{enable_backtraces, raise, BacktraceError};
//!
//! fn parse_port(raw: &str) -> Result<u16, BacktraceError> {
//!     match raw.parse() {
//!         Ok(port) => Ok(port),
//!         Err(_) => raise!(condition: "BadInput", "invalid port: {raw}"),
//!     }
//! }
//!
//! enable_backtraces();
//! let err = parse_port("not-a-port").unwrap_err();
//! assert_eq!(err.condition(), "BadInput");
//! assert!(err.backtrace().starts_with("Obtained "));
//! ```
//!
//! ## Disabling capture
//!
//! ```
//! use backtrace_error::{disable_backtraces, BacktraceError, DISABLED_SENTINEL};
//!
//! disable_backtraces();
//! let err = BacktraceError::new("io failure");
//! assert_eq!(err.backtrace(), DISABLED_SENTINEL);
//! ```
//!
//! ## Injecting a policy
//!
//! ```
//! use backtrace_error::{BacktraceError, CapturePolicy};
//!
//! let policy = CapturePolicy::new();
//! policy.set_enabled(true);
//! let err = BacktraceError::with_policy(&policy, "Timeout", "backend timed out");
//! assert!(!err.backtrace().is_empty());
//! ```
/// Backtrace capture: walkers, symbolization, and policy dispatch.
pub mod capture;
/// Constructor macros for raising carriers.
pub mod macros;
/// Process-wide capture policy and strategy selection.
pub mod policy;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Core traits for backtrace capture.
pub mod traits;
/// Error carrier types.
pub mod types;

pub use capture::symbolize::demangle;
pub use capture::{capture_backtrace, NativeWalker, DISABLED_SENTINEL, UNSUPPORTED_SENTINEL};
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use capture::DebuggerWalker;
pub use policy::{
    backtrace_strategy, backtraces_enabled, disable_backtraces, enable_backtraces,
    set_backtrace_strategy, CapturePolicy, CaptureStrategy, PolicyError,
};
pub use traits::StackWalker;
pub use types::{BacktraceError, UNSPECIFIED_CONDITION};
