// Copyright 2026 Oxide Computer Company

//! Decoding `git ls-files -z` output.

use std::path::PathBuf;

/// Splits NUL-separated output into records.
///
/// A single trailing NUL is dropped, and empty records are skipped, so empty
/// output yields no records rather than one empty one.
pub(crate) fn parse_records(raw: &[u8]) -> impl Iterator<Item = &[u8]> {
    let raw = raw.strip_suffix(b"\0").unwrap_or(raw);
    raw.split(|&b| b == 0).filter(|record| !record.is_empty())
}

/// Converts a record emitted by git into a relative native path.
///
/// git always separates components with `/`. On Unix the bytes are the file
/// name bytes, so they convert losslessly.
#[cfg(unix)]
pub(crate) fn decode_record(record: &[u8]) -> PathBuf {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    PathBuf::from(OsStr::from_bytes(record))
}

/// Converts a record emitted by git into a relative native path.
///
/// git emits UTF-8 on non-Unix platforms; components are re-joined with the
/// native separator.
#[cfg(not(unix))]
pub(crate) fn decode_record(record: &[u8]) -> PathBuf {
    String::from_utf8_lossy(record)
        .split('/')
        .filter(|component| !component.is_empty())
        .collect()
}
