//! A numerical computation that raises a classified error with a backtrace,
//! caught and printed at the top level.

use backtrace_error::{enable_backtraces, raise, BacktraceError};

fn compute_ratio(denominator: f64) -> Result<f64, BacktraceError> {
    if denominator == 0.0 {
        raise!(condition: "UnrecoverableNumericalError", "denominator == 0");
    }
    Ok((2.0 * denominator + denominator).sqrt() / denominator)
}

fn computation() -> Result<f64, BacktraceError> {
    compute_ratio(0.0)
}

fn main() {
    enable_backtraces();
    match computation() {
        Ok(ratio) => println!("ratio = {ratio}"),
        Err(err) => println!(
            "Caught BacktraceError:\n\tcondition: {}\n\tmessage: {}\n\tbacktrace:\n{}",
            err.condition(),
            err.message(),
            err.backtrace()
        ),
    }
}
