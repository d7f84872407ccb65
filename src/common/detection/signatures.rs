//! Magic-number signatures for archive and container formats.
//!
//! Entries are tested in table order and the first match wins. A longer
//! signature that shares a prefix with a shorter one must come first if the
//! two map to different kinds.

use super::types::FileKind;
use super::utils::signature_matches;

/// A leading byte sequence and the kind it identifies.
#[derive(Debug, Clone, Copy)]
pub struct FileSignature {
    pub magic: &'static [u8],
    pub kind: FileKind,
}

const fn sig(magic: &'static [u8], kind: FileKind) -> FileSignature {
    FileSignature { magic, kind }
}

/// Signature table, in match order.
pub static FILE_SIGNATURES: [FileSignature; 6] = [
    // RAR 1.5-4.x
    sig(b"Rar!\x1A\x07\x00", FileKind::Rar),
    // RAR 5.0
    sig(b"Rar!\x1A\x07\x01\x00", FileKind::Rar),
    sig(b"7z\xBC\xAF\x27\x1C", FileKind::SevenZip),
    sig(b"PK\x03\x04", FileKind::Zip),
    sig(b"ITSF", FileKind::Chm),
    sig(b"AT&T", FileKind::DjVu),
];

/// Match `data` against the signature table.
///
/// Buffers shorter than four bytes never match.
pub fn match_signature(data: &[u8]) -> Option<FileKind> {
    if data.len() < 4 {
        return None;
    }
    FILE_SIGNATURES
        .iter()
        .find(|s| signature_matches(data, s.magic))
        .map(|s| s.kind)
}
