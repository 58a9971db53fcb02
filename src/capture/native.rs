//! In-process stack walker built on the `backtrace` crate.
//!
//! Walks the calling thread's stack, resolves every return address to a
//! descriptive line, demangles the symbol inside it, trims the capture
//! machinery's own frames, and renders the report consumed by
//! [`BacktraceError::backtrace`](crate::BacktraceError::backtrace).

use std::ffi::c_void;
use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::capture::symbolize;
use crate::traits::StackWalker;

/// Upper bound on raw frames collected per capture.
const MAX_FRAMES: usize = 250;

/// Fallback trim count when no frame symbols are available.
///
/// Matches the minimum depth of the capture call chain (walker, dispatch,
/// carrier constructor). The primary trim is symbol-based, so this constant
/// only matters on stripped binaries; it must track the chain depth if that
/// ever changes.
const MACHINERY_FRAMES: usize = 3;

/// One raw frame as supplied by the runtime, alive for a single capture.
struct RawFrame {
    ip: usize,
    symbol_addr: usize,
}

/// Walker that introspects the current process through its own runtime.
///
/// Fast and dependency-free at run time, but limited to whatever symbols the
/// binary exports. Partial output on stripped binaries is expected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeWalker;

impl StackWalker for NativeWalker {
    fn capture(&self) -> String {
        capture()
    }
}

pub(crate) fn capture() -> String {
    let mut raw: SmallVec<[RawFrame; 32]> = SmallVec::new();
    backtrace::trace(|frame| {
        raw.push(RawFrame {
            ip: frame.ip() as usize,
            symbol_addr: frame.symbol_address() as usize,
        });
        raw.len() < MAX_FRAMES
    });

    let exe = executable_name();
    let mut lines: SmallVec<[String; 32]> = SmallVec::with_capacity(raw.len());
    for frame in &raw {
        lines.push(symbolize::rewrite_line(&describe(frame, &exe)));
    }

    let skip = machinery_frame_count(&lines);
    render(&lines[skip..])
}

/// Formats one frame as `<exe>(<mangled>+<offset>) [<ip>]`, degrading to
/// `<exe>() [<ip>]` when the runtime has no symbol for the address.
fn describe(frame: &RawFrame, exe: &str) -> String {
    let mut name: Option<String> = None;
    backtrace::resolve(frame.ip as *mut c_void, |symbol| {
        if name.is_none() {
            name = symbol.name().and_then(|n| n.as_str().map(String::from));
        }
    });

    match name {
        Some(symbol) if !symbol.is_empty() => {
            let offset = frame.ip.saturating_sub(frame.symbol_addr);
            format!("{exe}({symbol}+{offset:#x}) [{ip:#x}]", ip = frame.ip)
        }
        _ => format!("{exe}() [{ip:#x}]", ip = frame.ip),
    }
}

/// Number of leading frames belonging to the capture machinery itself.
///
/// Recognized by symbol name, so the trim stays correct if the capture call
/// chain gains or loses a frame. Frames below the first unrecognized line are
/// treated as user code. Falls back to [`MACHINERY_FRAMES`] when symbols are
/// missing entirely.
fn machinery_frame_count(lines: &[String]) -> usize {
    let recognized = lines
        .iter()
        .take_while(|line| is_machinery_frame(line))
        .count();
    if recognized > 0 {
        recognized
    } else {
        MACHINERY_FRAMES.min(lines.len())
    }
}

fn is_machinery_frame(line: &str) -> bool {
    const MARKERS: &[&str] = &[
        "backtrace::backtrace::",
        "backtrace::trace",
        "backtrace_error::capture",
        "BacktraceError::with_policy",
        "BacktraceError::with_condition",
        "BacktraceError::new",
    ];
    MARKERS.iter().any(|marker| line.contains(marker))
}

/// Renders the retained frames: a header reporting the count, then one
/// `[index]: <line>` per frame. Zero frames yields the header alone.
fn render(lines: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Obtained {} stack frames.", lines.len());
    for (index, line) in lines.iter().enumerate() {
        let _ = writeln!(out, "[{index}]: {line}");
    }
    out
}

fn executable_name() -> String {
    std::env::current_exe()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| String::from("<unknown>"))
}
