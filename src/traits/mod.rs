//! Core traits for backtrace capture.

mod walker;

pub use walker::StackWalker;
