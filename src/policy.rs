//! Process-wide capture policy: whether backtraces are captured at all, and
//! which walker produces them.
//!
//! The policy is two independent atomic slots, so concurrent captures read a
//! consistent value of each with a single load and setters can race with
//! captures without tearing. A change takes effect on the next capture; it is
//! never retroactive to already-constructed errors.
//!
//! Most callers use the process-wide instance through the free functions
//! ([`enable_backtraces`], [`set_backtrace_strategy`], ...). Tests and
//! embedders that need deterministic behavior construct their own
//! [`CapturePolicy`] and pass it to
//! [`BacktraceError::with_policy`](crate::BacktraceError::with_policy).

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy used to produce backtrace text at capture time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CaptureStrategy {
    /// Walk the stack in-process through the program's own runtime. Fast,
    /// but limited to symbols the binary exports.
    NativeRuntime = 0,
    /// Attach an external debugger to the running process and return its
    /// stack dump. Slow, requires the debugger to be installed, works on
    /// binaries without exported symbols. Linux (`gdb`) and macOS (`lldb`)
    /// only.
    ExternalDebugger = 1,
}

impl CaptureStrategy {
    /// Strategies valid on the platform this binary was compiled for.
    ///
    /// `NativeRuntime` is supported everywhere; `ExternalDebugger` only
    /// where a platform debugger exists to delegate to.
    #[inline]
    pub fn supported() -> &'static [CaptureStrategy] {
        #[cfg(any(target_os = "linux", target_os = "macos"))]
        {
            &[CaptureStrategy::NativeRuntime, CaptureStrategy::ExternalDebugger]
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            &[CaptureStrategy::NativeRuntime]
        }
    }

    /// Returns whether this strategy is valid on the current platform.
    #[inline]
    pub fn is_supported(self) -> bool {
        Self::supported().contains(&self)
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => CaptureStrategy::NativeRuntime,
            _ => CaptureStrategy::ExternalDebugger,
        }
    }
}

impl fmt::Display for CaptureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureStrategy::NativeRuntime => f.write_str("NativeRuntime"),
            CaptureStrategy::ExternalDebugger => f.write_str("ExternalDebugger"),
        }
    }
}

/// Rejection from a policy-setting operation.
///
/// Raised synchronously from [`CapturePolicy::set_strategy`] so a
/// misconfiguration surfaces at the call that caused it, instead of as an
/// unhelpful sentinel string deep inside some later capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The requested strategy is not in the current platform's valid set.
    UnsupportedStrategy {
        /// The rejected strategy.
        strategy: CaptureStrategy,
        /// The running platform, as reported by `std::env::consts::OS`.
        platform: &'static str,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::UnsupportedStrategy { strategy, platform } => write!(
                f,
                "capture strategy {strategy} is not supported on platform {platform}"
            ),
        }
    }
}

impl std::error::Error for PolicyError {}

/// Process-wide (or injected) capture configuration.
///
/// Defaults: captures enabled in debug builds and disabled in optimized
/// builds (a throughput/diagnostics tradeoff), strategy
/// [`CaptureStrategy::NativeRuntime`].
///
/// # Examples
///
/// ```
/// use backtrace_error::{CapturePolicy, CaptureStrategy};
///
/// let policy = CapturePolicy::new();
/// policy.set_enabled(true);
/// policy.set_strategy(CaptureStrategy::NativeRuntime).unwrap();
/// assert_eq!(policy.strategy(), CaptureStrategy::NativeRuntime);
/// ```
#[derive(Debug)]
pub struct CapturePolicy {
    enabled: AtomicBool,
    strategy: AtomicU8,
}

impl CapturePolicy {
    /// Creates a policy with the build-profile defaults.
    #[inline]
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(cfg!(debug_assertions)),
            strategy: AtomicU8::new(CaptureStrategy::NativeRuntime as u8),
        }
    }

    /// The process-wide policy consulted by
    /// [`BacktraceError::new`](crate::BacktraceError::new) and the free
    /// functions in this module.
    #[inline]
    pub fn global() -> &'static CapturePolicy {
        static GLOBAL: CapturePolicy = CapturePolicy::new();
        &GLOBAL
    }

    /// Enables or disables capture, effective on the next capture.
    #[inline]
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Returns whether captures are currently enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Selects the walker used by subsequent captures.
    ///
    /// Rejects strategies outside the current platform's valid set with
    /// [`PolicyError::UnsupportedStrategy`], leaving the active strategy
    /// unchanged. Callers must acknowledge the rejection; silently falling
    /// back would hide the misconfiguration far from its cause.
    pub fn set_strategy(&self, strategy: CaptureStrategy) -> Result<(), PolicyError> {
        if !strategy.is_supported() {
            return Err(PolicyError::UnsupportedStrategy {
                strategy,
                platform: std::env::consts::OS,
            });
        }
        self.strategy.store(strategy as u8, Ordering::Relaxed);
        Ok(())
    }

    /// Returns the currently selected strategy.
    #[inline]
    pub fn strategy(&self) -> CaptureStrategy {
        CaptureStrategy::from_raw(self.strategy.load(Ordering::Relaxed))
    }
}

impl Default for CapturePolicy {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Enables backtrace capture process-wide.
#[inline]
pub fn enable_backtraces() {
    CapturePolicy::global().set_enabled(true);
}

/// Disables backtrace capture process-wide.
///
/// Errors constructed while disabled carry the disabled sentinel instead of
/// backtrace text.
#[inline]
pub fn disable_backtraces() {
    CapturePolicy::global().set_enabled(false);
}

/// Returns whether backtrace capture is enabled process-wide.
#[inline]
pub fn backtraces_enabled() -> bool {
    CapturePolicy::global().is_enabled()
}

/// Sets the process-wide capture strategy.
///
/// See [`CapturePolicy::set_strategy`] for the validity rules.
#[inline]
pub fn set_backtrace_strategy(strategy: CaptureStrategy) -> Result<(), PolicyError> {
    CapturePolicy::global().set_strategy(strategy)
}

/// Returns the process-wide capture strategy.
#[inline]
pub fn backtrace_strategy() -> CaptureStrategy {
    CapturePolicy::global().strategy()
}
