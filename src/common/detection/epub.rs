//! EPUB detection.
//!
//! An EPUB is a ZIP archive with a `mimetype` entry. The OCF spec wants that
//! entry stored first, but plenty of real books don't, so position is not
//! checked. Renamed iBooks files carry their own mimetype and are accepted
//! too.

use std::path::Path;

use crate::common::io::file_starts_with;

/// Name of the entry (or file, for unpacked books) holding the media type.
pub const MIMETYPE_ENTRY: &str = "mimetype";

/// Media type of an EPUB publication.
pub const EPUB_MIMETYPE: &[u8] = b"application/epub+zip";

/// Media type of an iBooks publication.
pub const IBOOKS_MIMETYPE: &[u8] = b"application/x-ibooks+zip";

/// How much of the `mimetype` entry is read.
const MIMETYPE_READ_LIMIT: usize = 256;

/// Check whether the content of a `mimetype` entry identifies an EPUB.
///
/// Trailing whitespace is ignored; leading whitespace is not.
pub fn is_epub_mimetype(content: &[u8]) -> bool {
    let content = super::utils::trim_trailing_ws(content);
    content == EPUB_MIMETYPE || content == IBOOKS_MIMETYPE
}

/// Check whether the ZIP archive in `bytes` is an EPUB.
#[cfg(feature = "zip-containers")]
pub fn is_epub_archive_bytes(bytes: &[u8]) -> bool {
    is_epub_reader(std::io::Cursor::new(bytes))
}

/// Check whether the file at `path` is an EPUB archive.
#[cfg(feature = "zip-containers")]
pub fn is_epub_file<P: AsRef<Path>>(path: P) -> bool {
    match std::fs::File::open(path) {
        Ok(file) => is_epub_reader(std::io::BufReader::new(file)),
        Err(_) => false,
    }
}

#[cfg(feature = "zip-containers")]
fn is_epub_reader<R: std::io::Read + std::io::Seek>(reader: R) -> bool {
    let result = zip::ZipArchive::new(reader)
        .map_err(crate::common::Error::from)
        .and_then(|mut archive| {
            super::utils::read_zip_file(&mut archive, MIMETYPE_ENTRY, MIMETYPE_READ_LIMIT)
        });
    match result {
        Ok(content) => is_epub_mimetype(&content),
        Err(err) => {
            tracing::trace!(error = %err, "no usable mimetype entry");
            false
        },
    }
}

#[cfg(not(feature = "zip-containers"))]
pub fn is_epub_archive_bytes(_bytes: &[u8]) -> bool {
    false
}

#[cfg(not(feature = "zip-containers"))]
pub fn is_epub_file<P: AsRef<Path>>(_path: P) -> bool {
    false
}

/// Check whether the directory at `path` is an unpacked EPUB.
///
/// Only the `mimetype` file is looked at, and only its prefix.
pub fn is_epub_dir<P: AsRef<Path>>(path: P) -> bool {
    file_starts_with(path.as_ref().join(MIMETYPE_ENTRY), EPUB_MIMETYPE)
}
