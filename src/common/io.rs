//! Bounded, read-only file access used by the detectors.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::common::Result;

/// Upper bound on the buffer reserved before reading.
const PREFIX_CAPACITY_HINT: usize = 64 * 1024;

/// Read at most `limit` bytes from the start of the file.
///
/// Short files yield a short buffer; a missing file is an error.
pub fn read_prefix<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(limit.min(PREFIX_CAPACITY_HINT));
    file.take(u64::try_from(limit).unwrap_or(u64::MAX)).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Whether `path` names an existing directory.
#[inline]
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Whether the file at `path` begins with `prefix`.
///
/// Unreadable or short files do not match.
pub fn file_starts_with<P: AsRef<Path>>(path: P, prefix: &[u8]) -> bool {
    match read_prefix(path, prefix.len()) {
        Ok(head) => head == prefix,
        Err(_) => false,
    }
}
