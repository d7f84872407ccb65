//! File name suffix table.
//!
//! Matching is a case-insensitive `ends_with` that stops at the first hit,
//! so compound suffixes such as `.fb2.zip` must precede `.zip`. The order of
//! [`FILE_EXTENSIONS`] is part of its meaning.

use once_cell::sync::Lazy;

use super::types::FileKind;
use super::utils::ends_with_ignore_case;

/// A file name suffix (including the leading dot) and its kind.
#[derive(Debug, Clone, Copy)]
pub struct FileExtension {
    pub suffix: &'static str,
    pub kind: FileKind,
}

const fn ext(suffix: &'static str, kind: FileKind) -> FileExtension {
    FileExtension { suffix, kind }
}

/// Extension table, in match order.
pub static FILE_EXTENSIONS: [FileExtension; 39] = [
    // compound suffixes first so they aren't classified by their tail
    ext(".fb2.zip", FileKind::Fb2),
    ext(".ps.gz", FileKind::Ps),
    ext(".ps", FileKind::Ps),
    ext(".eps", FileKind::Ps),
    ext(".vbkm", FileKind::Vbkm),
    ext(".fb2", FileKind::Fb2),
    ext(".fb2z", FileKind::Fb2),
    ext(".zfb2", FileKind::Fb2),
    ext(".cbz", FileKind::Cbz),
    ext(".cbr", FileKind::Cbr),
    ext(".cb7", FileKind::Cb7),
    ext(".cbt", FileKind::Cbt),
    ext(".zip", FileKind::Zip),
    ext(".rar", FileKind::Rar),
    ext(".7z", FileKind::SevenZip),
    ext(".tar", FileKind::Tar),
    ext(".pdf", FileKind::Pdf),
    ext(".xps", FileKind::Xps),
    ext(".oxps", FileKind::Xps),
    ext(".chm", FileKind::Chm),
    ext(".png", FileKind::Png),
    ext(".jpg", FileKind::Jpeg),
    ext(".jpeg", FileKind::Jpeg),
    ext(".gif", FileKind::Gif),
    ext(".tif", FileKind::Tiff),
    ext(".tiff", FileKind::Tiff),
    ext(".bmp", FileKind::Bmp),
    ext(".tga", FileKind::Tga),
    ext(".jxr", FileKind::Jxr),
    ext(".hdp", FileKind::Hdp),
    ext(".wdp", FileKind::Wdp),
    ext(".webp", FileKind::WebP),
    ext(".epub", FileKind::Epub),
    ext(".mobi", FileKind::Mobi),
    ext(".prc", FileKind::Mobi),
    ext(".azw", FileKind::Mobi),
    ext(".azw1", FileKind::Mobi),
    ext(".azw3", FileKind::Mobi),
    ext(".jp2", FileKind::Jp2),
];

/// Find the kind of the first suffix `file_name` ends with.
pub fn match_extension(file_name: &str) -> Option<FileKind> {
    FILE_EXTENSIONS
        .iter()
        .find(|e| ends_with_ignore_case(file_name, e.suffix))
        .map(|e| e.kind)
}

/// Problems found by [`check_extension_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A probe file name resolved to the wrong kind
    Misresolved {
        file_name: &'static str,
        expected: FileKind,
        got: Option<FileKind>,
    },
    /// A suffix can never match because an earlier one is its tail
    Shadowed {
        suffix: &'static str,
        shadowed_by: &'static str,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Misresolved {
                file_name,
                expected,
                got,
            } => write!(f, "{} resolved to {:?}, expected {}", file_name, got, expected),
            TableError::Shadowed {
                suffix,
                shadowed_by,
            } => write!(f, "suffix {} is shadowed by earlier {}", suffix, shadowed_by),
        }
    }
}

/// Validate the ordering and alignment of [`FILE_EXTENSIONS`].
pub fn check_extension_table() -> Result<(), TableError> {
    // first and last entries, with mixed case
    let probes: [(&'static str, FileKind); 3] = [
        ("foo.JP2", FileKind::Jp2),
        ("FOO.Fb2.Zip", FileKind::Fb2),
        ("notes.Ps.GZ", FileKind::Ps),
    ];
    for (file_name, expected) in probes {
        let got = match_extension(file_name);
        if got != Some(expected) {
            return Err(TableError::Misresolved {
                file_name,
                expected,
                got,
            });
        }
    }

    for (i, later) in FILE_EXTENSIONS.iter().enumerate() {
        for earlier in &FILE_EXTENSIONS[..i] {
            if ends_with_ignore_case(later.suffix, earlier.suffix) {
                return Err(TableError::Shadowed {
                    suffix: later.suffix,
                    shadowed_by: earlier.suffix,
                });
            }
        }
    }
    Ok(())
}

static EXTENSION_TABLE_VERIFIED: Lazy<()> = Lazy::new(|| {
    if let Err(err) = check_extension_table() {
        panic!("extension table is inconsistent: {}", err);
    }
});

/// Run [`check_extension_table`] once per process.
///
/// # Panics
///
/// Panics if the table is inconsistent. That is a bug in this crate, not a
/// property of any input.
#[inline]
pub fn verify_extension_table() {
    Lazy::force(&EXTENSION_TABLE_VERIFIED);
}
