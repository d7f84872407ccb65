//! XPS / OpenXPS package detection.
//!
//! An XPS document is an OPC package: a ZIP archive whose package
//! relationships live at `_rels/.rels`. Large parts may be split into
//! interleaved pieces (`[0].piece`, ..., `[n].last.piece`).

use std::path::Path;

/// Entry names that mark the package relationships part.
pub const PACKAGE_RELS_ENTRIES: [&str; 3] = [
    "_rels/.rels",
    "_rels/.rels/[0].piece",
    "_rels/.rels/[0].last.piece",
];

/// Check whether the ZIP archive in `bytes` is an XPS package.
#[cfg(feature = "zip-containers")]
pub fn is_xps_archive_bytes(bytes: &[u8]) -> bool {
    is_xps_reader(std::io::Cursor::new(bytes))
}

/// Check whether the file at `path` is an XPS package.
#[cfg(feature = "zip-containers")]
pub fn is_xps_archive<P: AsRef<Path>>(path: P) -> bool {
    match std::fs::File::open(path) {
        Ok(file) => is_xps_reader(std::io::BufReader::new(file)),
        Err(_) => false,
    }
}

#[cfg(feature = "zip-containers")]
fn is_xps_reader<R: std::io::Read + std::io::Seek>(reader: R) -> bool {
    match zip::ZipArchive::new(reader) {
        Ok(archive) => PACKAGE_RELS_ENTRIES
            .iter()
            .any(|name| archive.index_for_name(name).is_some()),
        Err(err) => {
            tracing::trace!(error = %err, "not a readable ZIP archive");
            false
        },
    }
}

#[cfg(not(feature = "zip-containers"))]
pub fn is_xps_archive_bytes(_bytes: &[u8]) -> bool {
    false
}

#[cfg(not(feature = "zip-containers"))]
pub fn is_xps_archive<P: AsRef<Path>>(_path: P) -> bool {
    false
}
