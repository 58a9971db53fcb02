//! The error carrier: classification, message, and frozen backtrace text.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capture::capture_backtrace;
use crate::policy::CapturePolicy;

/// Classification stored when a carrier is constructed without one.
pub const UNSPECIFIED_CONDITION: &str = "UnspecifiedError";

/// Error value that captures the active call stack at the moment it is
/// constructed.
///
/// Three string fields, set once in the constructor and never mutated:
/// a short machine-oriented `condition`, a human-oriented `message`, and the
/// `backtrace` text (or a sentinel explaining why none was captured). The
/// backtrace reflects the stack exactly as of the constructor call; no
/// further computation happens after construction, and the accessors return
/// the identical strings every time.
///
/// # Examples
///
/// ```
/// use backtrace_error::{enable_backtraces, BacktraceError};
///
/// enable_backtraces();
/// let err = BacktraceError::with_condition("BadInput", "x must be positive");
/// assert_eq!(err.condition(), "BadInput");
/// assert_eq!(err.message(), "x must be positive");
/// assert!(err.backtrace().starts_with("Obtained "));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktraceError {
    condition: String,
    message: String,
    backtrace: String,
}

impl BacktraceError {
    /// Creates a carrier with the [`UNSPECIFIED_CONDITION`] classification.
    ///
    /// Consults the process-wide [`CapturePolicy`] and captures immediately.
    #[inline]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::with_policy(CapturePolicy::global(), UNSPECIFIED_CONDITION, message)
    }

    /// Creates a carrier with an explicit classification.
    ///
    /// Consults the process-wide [`CapturePolicy`] and captures immediately.
    #[inline]
    pub fn with_condition<C, M>(condition: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self::with_policy(CapturePolicy::global(), condition, message)
    }

    /// Creates a carrier under an injected policy.
    ///
    /// This is the form the other constructors delegate to; tests use it to
    /// substitute a deterministic policy without touching process state.
    ///
    /// # Examples
    ///
    /// ```
    /// use backtrace_error::{BacktraceError, CapturePolicy, DISABLED_SENTINEL};
    ///
    /// let policy = CapturePolicy::new();
    /// policy.set_enabled(false);
    /// let err = BacktraceError::with_policy(&policy, "Timeout", "backend timed out");
    /// assert_eq!(err.backtrace(), DISABLED_SENTINEL);
    /// ```
    pub fn with_policy<C, M>(policy: &CapturePolicy, condition: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Self {
            condition: condition.into(),
            message: message.into(),
            backtrace: capture_backtrace(policy),
        }
    }

    /// Short machine-oriented classification of the error condition.
    #[inline]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Human-oriented description of the error condition.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Backtrace text captured at construction.
    ///
    /// Multi-line plain text: a header `"Obtained N stack frames."` followed
    /// by `N` lines `"[i]: <frame>"`, or a sentinel one-liner when capture
    /// was disabled, unsupported, or degraded.
    #[inline]
    pub fn backtrace(&self) -> &str {
        &self.backtrace
    }
}

impl fmt::Display for BacktraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.condition, self.message)
    }
}

impl std::error::Error for BacktraceError {}
