use std::{ffi::OsString, os::unix::ffi::OsStrExt};

/// Bytes that separate arguments on a command line.
pub const SEPARATORS: &[u8] = b" \t\n\x0B\x0C\r";

pub fn is_separator(byte: u8) -> bool {
    SEPARATORS.contains(&byte)
}

/// Splits a raw input line into its argument vector.
///
/// Runs of separators collapse, so the result never holds empty arguments.
/// Bytes between separators are kept as they are, valid UTF-8 or not; no
/// quoting, escaping or substitution is performed.
pub fn split(line: &[u8]) -> Vec<OsString> {
    line.split(|&b| is_separator(b))
        .filter(|token| !token.is_empty())
        .map(|token| std::ffi::OsStr::from_bytes(token).to_os_string())
        .collect()
}
