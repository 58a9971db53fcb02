//! Convenience re-exports for quick starts.
//!
//! ```
//! use backtrace_error::prelude::*;
//!
//! enable_backtraces();
//! let err = BacktraceError::new("something went sideways");
//! assert!(!err.backtrace().is_empty());
//! ```

pub use crate::policy::{
    backtrace_strategy, backtraces_enabled, disable_backtraces, enable_backtraces,
    set_backtrace_strategy, CapturePolicy, CaptureStrategy, PolicyError,
};
pub use crate::traits::StackWalker;
pub use crate::types::{BacktraceError, UNSPECIFIED_CONDITION};
