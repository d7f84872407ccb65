//! PDF detection.
//!
//! The `%PDF-` header does not have to be at offset 0: readers accept
//! leading garbage (print-job preambles, mail headers) before it, within the
//! first kilobyte. Leading bytes that are themselves a recognised format
//! (an archive, PostScript, an image) are not garbage; a stored ZIP holding a
//! PDF is still a ZIP.

use std::path::Path;

use super::postscript::{EPS_BINARY_MAGIC, PS_HEADER};
use super::raster::detect_image_format;
use super::signatures::match_signature;
use super::utils::{ends_with_ignore_case, find_pattern, signature_matches};

/// PDF header marker.
pub const PDF_HEADER: &[u8] = b"%PDF-";

/// How far into the file the header may start.
pub const PDF_HEADER_WINDOW: usize = 1024;

/// Check whether `data` carries a PDF header within `window` bytes.
pub fn is_pdf_content_within(data: &[u8], window: usize) -> bool {
    if signature_matches(data, PDF_HEADER) {
        return true;
    }
    if starts_with_other_format(data) {
        return false;
    }
    // the marker itself may straddle the window boundary
    let end = data.len().min(window.saturating_add(PDF_HEADER.len() - 1));
    find_pattern(&data[..end], PDF_HEADER).is_some_and(|pos| pos < window)
}

/// Whether the leading bytes already identify some other format.
fn starts_with_other_format(data: &[u8]) -> bool {
    signature_matches(data, PS_HEADER)
        || signature_matches(data, EPS_BINARY_MAGIC)
        || match_signature(data).is_some()
        || detect_image_format(data).is_some()
}

/// Check whether `data` looks like the start of a PDF file.
///
/// # Examples
///
/// ```rust
/// use filekind::common::detection::pdf::is_pdf_file_content;
///
/// assert!(is_pdf_file_content(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n"));
/// assert!(!is_pdf_file_content(b"%!PS-Adobe-3.0"));
/// ```
#[inline]
pub fn is_pdf_file_content(data: &[u8]) -> bool {
    is_pdf_content_within(data, PDF_HEADER_WINDOW)
}

/// Check whether a file name denotes a PDF.
///
/// Besides `.pdf`, accepts the names spoolers and browsers give PDFs while
/// they are still being written (`.pdf.tmp`, `.pdf.part`).
pub fn is_pdf_file_name<P: AsRef<Path>>(path: P) -> bool {
    let name = path.as_ref().to_string_lossy();
    [".pdf", ".pdf.tmp", ".pdf.part"]
        .iter()
        .any(|suffix| ends_with_ignore_case(&name, suffix))
}
