//! External-debugger stack walker.
//!
//! Attaches the platform debugger (`gdb` on Linux, `lldb` on macOS) to the
//! running process and returns its all-thread stack dump verbatim. Works on
//! binaries without exported dynamic symbols, at the cost of debugger startup
//! and attach time (hundreds of milliseconds to seconds). The debugger
//! demangles symbols itself, so this path skips the in-process resolver.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::traits::StackWalker;

/// Sentinel returned when the output pipe to the debugger cannot be set up.
pub const BAD_PIPE: &str = "[Bad Pipe]";

/// Walker that delegates to an external debugger process.
///
/// The calling thread blocks until the debugger exits; a hung debugger blocks
/// indefinitely. Pipe and child handles are scoped to one capture and are
/// closed and reaped on every exit path.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebuggerWalker;

impl StackWalker for DebuggerWalker {
    fn capture(&self) -> String {
        capture()
    }
}

pub(crate) fn capture() -> String {
    let pid = std::process::id();
    let exe = std::env::current_exe()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| String::from("<unknown>"));

    let mut text = format!("Stack trace for exename={exe} pid={pid}\n");
    match debugger_command(&exe, pid).stdin(Stdio::null()).output() {
        Ok(output) => {
            text.push_str(&String::from_utf8_lossy(&output.stdout));
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            text
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            // Debugger binary not installed. Report the partial text rather
            // than raising a secondary error from the capture path.
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, "debugger not found, backtrace truncated");
            text
        }
        Err(_error) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_error, "failed to spawn debugger");
            BAD_PIPE.to_string()
        }
    }
}

#[cfg(target_os = "linux")]
fn debugger_command(exe: &str, pid: u32) -> Command {
    let mut command = Command::new("gdb");
    command
        .args([
            "--batch",
            "-n",
            "-ex",
            "info threads",
            "-ex",
            "thread apply all info stack full",
        ])
        .arg(exe)
        .arg(pid.to_string());
    command
}

#[cfg(target_os = "macos")]
fn debugger_command(_exe: &str, pid: u32) -> Command {
    let mut command = Command::new("lldb");
    command
        .args(["--batch", "--no-lldbinit", "-o", "thread backtrace all", "-o", "detach"])
        .arg("-p")
        .arg(pid.to_string());
    command
}
