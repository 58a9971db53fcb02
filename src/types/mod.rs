//! Error carrier types.

pub mod backtrace_error;

pub use backtrace_error::{BacktraceError, UNSPECIFIED_CONDITION};
