//! Raises the same error under each capture configuration: disabled, the
//! in-process walker, and (where available) the external debugger.

use backtrace_error::prelude::*;
use backtrace_error::raise;

fn baz() -> Result<(), BacktraceError> {
    raise!(condition: "BazBorked", "baz is done");
}

fn bar() -> Result<(), BacktraceError> {
    baz()
}

fn foo() -> Result<(), BacktraceError> {
    bar()
}

fn try_it() {
    if let Err(err) = foo() {
        println!(
            "Caught BacktraceError:\n\tcondition: {}\n\tmessage: {}\n\tbacktrace:\n{}",
            err.condition(),
            err.message(),
            err.backtrace()
        );
    }
}

fn main() {
    println!("===== backtraces disabled =====");
    disable_backtraces();
    try_it();

    println!("\n===== CaptureStrategy::NativeRuntime =====");
    enable_backtraces();
    set_backtrace_strategy(CaptureStrategy::NativeRuntime)
        .expect("NativeRuntime is supported everywhere");
    try_it();

    if CaptureStrategy::ExternalDebugger.is_supported() {
        println!("\n===== CaptureStrategy::ExternalDebugger =====");
        set_backtrace_strategy(CaptureStrategy::ExternalDebugger)
            .expect("support checked above");
        try_it();
    }
}
