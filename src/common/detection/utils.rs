//! Utility functions shared by the detectors.

use memchr::memmem;

/// Check if `data` starts with `signature`.
///
/// Shorter buffers never match. Signatures are raw bytes and may contain NULs.
#[inline]
pub fn signature_matches(data: &[u8], signature: &[u8]) -> bool {
    data.len() >= signature.len() && &data[..signature.len()] == signature
}

/// Find the first occurrence of `needle` in `haystack`.
#[inline]
pub fn find_pattern(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    memmem::find(haystack, needle)
}

/// ASCII case-insensitive `ends_with`.
#[inline]
pub fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    let (s, suffix) = (s.as_bytes(), suffix.as_bytes());
    s.len() >= suffix.len() && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Strip trailing spaces, tabs and line breaks.
#[inline]
pub fn trim_trailing_ws(data: &[u8]) -> &[u8] {
    let end = data
        .iter()
        .rposition(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .map_or(0, |i| i + 1);
    &data[..end]
}

/// Read at most `limit` bytes of a named entry from a ZIP archive.
///
/// The entry is inflated only as far as `limit`, so an oversized entry costs
/// no more than a small one.
#[cfg(feature = "zip-containers")]
pub fn read_zip_file<R: std::io::Read + std::io::Seek>(
    archive: &mut zip::ZipArchive<R>,
    file_name: &str,
    limit: usize,
) -> crate::common::Result<Vec<u8>> {
    use std::io::Read;

    let file = archive.by_name(file_name)?;
    let capacity = file.size().min(limit as u64) as usize;
    let mut buffer = Vec::with_capacity(capacity);
    file.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}
