//! Backtrace capture: walkers, symbolization, and policy dispatch.
//!
//! [`capture_backtrace`] is the single entry point consulted by the error
//! carrier's constructors. It reads the policy once, dispatches to the
//! selected [`StackWalker`](crate::traits::StackWalker), and always returns
//! finished text: every capture failure is absorbed here and rendered as a
//! sentinel, so producing diagnostics can never raise a secondary error on
//! top of the primary one being reported.

#[cfg(any(target_os = "linux", target_os = "macos"))]
pub mod debugger;
pub mod native;
pub mod symbolize;

#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use debugger::DebuggerWalker;
pub use native::NativeWalker;

use crate::policy::{CapturePolicy, CaptureStrategy};
use crate::traits::StackWalker;

/// Text stored in place of a backtrace while capture is disabled.
pub const DISABLED_SENTINEL: &str = "Backtraces temporarily disabled.";

/// Text stored when the selected strategy has no walker on this platform.
pub const UNSUPPORTED_SENTINEL: &str = "Backtrace not supported on this platform.";

/// Captures backtrace text for the calling thread under the given policy.
///
/// Reads `enabled` and `strategy` with one atomic load each, so a capture
/// racing with a policy change uses one consistent strategy value.
///
/// # Examples
///
/// ```
/// use backtrace_error::{capture_backtrace, CapturePolicy};
///
/// let policy = CapturePolicy::new();
/// policy.set_enabled(true);
/// assert!(capture_backtrace(&policy).starts_with("Obtained "));
/// ```
pub fn capture_backtrace(policy: &CapturePolicy) -> String {
    if !policy.is_enabled() {
        return DISABLED_SENTINEL.to_string();
    }
    let strategy = policy.strategy();
    #[cfg(feature = "tracing")]
    tracing::debug!(%strategy, "capturing backtrace");
    match strategy {
        CaptureStrategy::NativeRuntime => NativeWalker.capture(),
        #[cfg(any(target_os = "linux", target_os = "macos"))]
        CaptureStrategy::ExternalDebugger => DebuggerWalker.capture(),
        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        CaptureStrategy::ExternalDebugger => UNSUPPORTED_SENTINEL.to_string(),
    }
}
