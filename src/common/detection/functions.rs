//! Core file kind detection functions.
//!
//! Two independent entry points:
//! - by name ([`file_kind_from_file_name`]): extension table, then the PDF
//!   name probe. Never touches file content.
//! - by content ([`detect_file_kind`]): a bounded prefix read run through
//!   the PDF, PostScript, image and signature probes in that order, then
//!   container inspection for ZIP and unrecognised files.
//!
//! Neither path reports errors. Missing, empty or unreadable inputs are
//! simply not recognised.

use std::path::Path;

use tracing::{debug, trace};

use super::config::SniffOptions;
use super::extensions::{match_extension, verify_extension_table};
use super::pdf::{is_pdf_content_within, is_pdf_file_name};
use super::postscript::is_ps_file_content;
use super::raster::detect_image_format;
use super::signatures::match_signature;
use super::types::FileKind;
use super::{epub, palmdb, xps};
use crate::common::io::{is_directory, read_prefix};

/// Content sniffer carrying its [`SniffOptions`].
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Sniffer {
    options: SniffOptions,
}

impl Sniffer {
    /// Create a sniffer with the given options.
    pub fn new(options: SniffOptions) -> Self {
        Self { options }
    }

    /// The options in use
    #[inline]
    pub fn options(&self) -> &SniffOptions {
        &self.options
    }

    /// Classify a buffer by its leading bytes only.
    ///
    /// Probes run in a fixed order and the first hit wins: PDF, PostScript,
    /// raster image, then the archive signature table. FB2 is never sniffed
    /// from content.
    pub fn sniff_data(&self, data: &[u8]) -> Option<FileKind> {
        if is_pdf_content_within(data, self.options.pdf_header_window) {
            return Some(FileKind::Pdf);
        }
        if is_ps_file_content(data) {
            return Some(FileKind::Ps);
        }
        if let Some(kind) = detect_image_format(data) {
            return Some(kind);
        }
        match_signature(data)
    }

    /// Classify the file or directory at `path` by its content.
    pub fn sniff_file<P: AsRef<Path>>(&self, path: P) -> Option<FileKind> {
        let path = path.as_ref();

        if is_directory(path) {
            // TODO: recognise image folders and unpacked XPS once those engines accept directories
            return epub::is_epub_dir(path).then_some(FileKind::Epub);
        }

        let head = match read_prefix(path, self.options.prefix_len) {
            Ok(head) if !head.is_empty() => head,
            Ok(_) => {
                trace!(path = %path.display(), "empty file");
                return None;
            },
            Err(err) => {
                trace!(path = %path.display(), error = %err, "unreadable file");
                return None;
            },
        };

        let mut res = self.sniff_data(&head);
        if self.options.inspect_containers {
            res = refine(
                res,
                || xps::is_xps_archive(path),
                || epub::is_epub_file(path),
                || palmdb::is_mobi_file(path),
            );
        }
        debug!(path = %path.display(), kind = ?res, "sniffed file");
        res
    }

    /// Classify a complete in-memory file, including container inspection.
    pub fn sniff_bytes(&self, bytes: &[u8]) -> Option<FileKind> {
        if bytes.is_empty() {
            return None;
        }
        let head = &bytes[..bytes.len().min(self.options.prefix_len)];
        let res = self.sniff_data(head);
        if !self.options.inspect_containers {
            return res;
        }
        refine(
            res,
            || xps::is_xps_archive_bytes(bytes),
            || epub::is_epub_archive_bytes(bytes),
            || palmdb::is_mobi_bytes(bytes),
        )
    }
}

/// Upgrade a signature result using container inspection.
///
/// A ZIP may turn out to be XPS or EPUB. The EPUB check runs after the XPS
/// check and wins when both match. A file nothing recognised may still be a
/// Mobipocket PalmDB, which has no leading magic.
fn refine(
    mut res: Option<FileKind>,
    is_xps: impl FnOnce() -> bool,
    is_epub: impl FnOnce() -> bool,
    is_mobi: impl FnOnce() -> bool,
) -> Option<FileKind> {
    if res == Some(FileKind::Zip) {
        if is_xps() {
            debug!("zip upgraded to xps");
            res = Some(FileKind::Xps);
        }
        if is_epub() {
            debug!(previous = ?res, "zip upgraded to epub");
            res = Some(FileKind::Epub);
        }
    }
    if res.is_none() && is_mobi() {
        res = Some(FileKind::Mobi);
    }
    res
}

/// Detect the file kind from a buffer of leading bytes.
///
/// Only the magic-number stage runs; ZIP stays ZIP.
///
/// # Examples
///
/// ```rust
/// use filekind::{FileKind, detect_file_kind_from_data};
///
/// assert_eq!(detect_file_kind_from_data(b"%PDF-1.7\n"), Some(FileKind::Pdf));
/// assert_eq!(detect_file_kind_from_data(b"PK\x03\x04"), Some(FileKind::Zip));
/// assert_eq!(detect_file_kind_from_data(b""), None);
/// ```
pub fn detect_file_kind_from_data(data: &[u8]) -> Option<FileKind> {
    Sniffer::default().sniff_data(data)
}

/// Detect the file kind of a complete in-memory file.
///
/// Like [`detect_file_kind`], but ZIP and PalmDB inspection run against the
/// buffer instead of the filesystem.
pub fn detect_file_kind_from_bytes(bytes: &[u8]) -> Option<FileKind> {
    Sniffer::default().sniff_bytes(bytes)
}

/// Detect the file kind of the file or directory at `path` from its content.
///
/// Reads at most 2048 leading bytes, plus one archive entry or one PalmDB
/// header when container inspection applies.
///
/// # Examples
///
/// ```rust,no_run
/// use filekind::detect_file_kind;
///
/// if let Some(kind) = detect_file_kind("download.bin") {
///     println!("Detected kind: {}", kind);
/// }
/// ```
pub fn detect_file_kind<P: AsRef<Path>>(path: P) -> Option<FileKind> {
    Sniffer::default().sniff_file(path)
}

/// Determine the file kind from the path alone.
///
/// Directories are [`FileKind::Dir`]. Otherwise the extension table decides,
/// falling back to the PDF name probe for names it doesn't cover.
///
/// # Panics
///
/// The first call validates the extension table and panics if it is
/// inconsistent.
///
/// # Examples
///
/// ```rust
/// use filekind::{FileKind, file_kind_from_file_name};
///
/// assert_eq!(file_kind_from_file_name("report.PDF"), Some(FileKind::Pdf));
/// assert_eq!(file_kind_from_file_name("archive.fb2.zip"), Some(FileKind::Fb2));
/// assert_eq!(file_kind_from_file_name("notes.txt"), None);
/// ```
pub fn file_kind_from_file_name<P: AsRef<Path>>(path: P) -> Option<FileKind> {
    verify_extension_table();

    let path = path.as_ref();
    if is_directory(path) {
        return Some(FileKind::Dir);
    }
    if let Some(kind) = match_extension(&path.to_string_lossy()) {
        return Some(kind);
    }
    is_pdf_file_name(path).then_some(FileKind::Pdf)
}
