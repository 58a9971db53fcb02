//! Best-effort symbol demangling for captured frames.
//!
//! Descriptive frame lines follow the classic `backtrace_symbols` shape,
//! `<binary>(<mangled>+<offset>) [<address>]`. [`rewrite_line`] swaps the
//! mangled span for its demangled form and leaves everything else alone.

use rustc_demangle::try_demangle;

/// Demangles a symbol name, returning the input unchanged when it does not
/// parse as a mangled name.
///
/// Hash suffixes are stripped from demangled output. This never fails: a
/// plain (already readable) name simply passes through.
///
/// # Examples
///
/// ```
/// use backtrace_error::demangle;
///
/// assert_eq!(demangle("_ZN4testE"), "test");
/// assert_eq!(demangle("main"), "main");
/// ```
pub fn demangle(name: &str) -> String {
    match try_demangle(name) {
        Ok(symbol) => format!("{symbol:#}"),
        Err(_) => name.to_string(),
    }
}

/// Replaces the mangled-symbol span of one descriptive frame line with its
/// demangled form.
///
/// The span is located heuristically: the text between the first `(` and the
/// nearest `+` after it. Lines without that pattern are returned unchanged.
pub fn rewrite_line(line: &str) -> String {
    let open = match line.find('(') {
        Some(index) => index,
        None => return line.to_string(),
    };
    let rest = &line[open + 1..];
    let plus = match rest.find('+') {
        Some(index) => index,
        None => return line.to_string(),
    };
    if plus == 0 {
        return line.to_string();
    }
    format!("{}{}{}", &line[..=open], demangle(&rest[..plus]), &rest[plus..])
}
