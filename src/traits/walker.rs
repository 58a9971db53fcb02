/// Capability interface implemented by every backtrace producer.
///
/// A walker turns the current call stack into finished report text. Capture
/// must always succeed from the caller's perspective: degraded captures
/// (missing symbols, missing debugger, empty stack) are rendered as sentinel
/// or partial text, never surfaced as errors, so that producing diagnostics
/// can never complicate the error path being diagnosed.
pub trait StackWalker {
    /// Produces backtrace text for the calling thread's stack.
    fn capture(&self) -> String;
}
