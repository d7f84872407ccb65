//! Raster image recognition from header bytes.
//!
//! Mainstream formats go through `image::guess_format`; JPEG XR, JPEG 2000
//! and TGA have no entry there and are checked here. No pixels are decoded.

use std::path::Path;

use image::ImageFormat;

use super::extensions::match_extension;
use super::types::{FileKind, is_image_engine_kind};
use super::utils::signature_matches;
use crate::common::io::read_prefix;

const JXR_SIGNATURES: [&[u8]; 2] = [b"II\xBC\x00", b"II\xBC\x01"];
const JP2_SIGNATURE: &[u8] = b"\x00\x00\x00\x0CjP  \r\n\x87\n";
const J2K_CODESTREAM_SIGNATURE: &[u8] = &[0xFF, 0x4F, 0xFF, 0x51];
const TGA_FOOTER_SIGNATURE: &[u8] = b"TRUEVISION-XFILE.\0";
const TGA_HEADER_LEN: usize = 18;

/// Identify the raster image format of `data`.
///
/// Returns one of Bmp, Gif, Jpeg, Jxr, Png, Tga, Tiff, WebP or Jp2.
///
/// # Examples
///
/// ```rust
/// use filekind::common::detection::raster::detect_image_format;
/// use filekind::FileKind;
///
/// let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
/// assert_eq!(detect_image_format(png), Some(FileKind::Png));
/// assert_eq!(detect_image_format(b"plain text"), None);
/// ```
pub fn detect_image_format(data: &[u8]) -> Option<FileKind> {
    if let Some(kind) = guess_common_format(data) {
        return Some(kind);
    }
    if JXR_SIGNATURES.iter().any(|sig| signature_matches(data, sig)) {
        return Some(FileKind::Jxr);
    }
    if signature_matches(data, JP2_SIGNATURE) || signature_matches(data, J2K_CODESTREAM_SIGNATURE)
    {
        return Some(FileKind::Jp2);
    }
    if is_tga(data) {
        return Some(FileKind::Tga);
    }
    None
}

fn guess_common_format(data: &[u8]) -> Option<FileKind> {
    match image::guess_format(data).ok()? {
        ImageFormat::Bmp => Some(FileKind::Bmp),
        ImageFormat::Gif => Some(FileKind::Gif),
        ImageFormat::Jpeg => Some(FileKind::Jpeg),
        ImageFormat::Png => Some(FileKind::Png),
        ImageFormat::Tiff => Some(FileKind::Tiff),
        ImageFormat::WebP => Some(FileKind::WebP),
        // formats the image engine doesn't render
        _ => None,
    }
}

/// TGA has no leading magic. Accept either the TGA 2.0 footer (only
/// visible when the whole file is buffered) or a plausible header.
fn is_tga(data: &[u8]) -> bool {
    if data.len() < TGA_HEADER_LEN {
        return false;
    }
    if data.ends_with(TGA_FOOTER_SIGNATURE) {
        return true;
    }

    let cmap_type = data[1];
    let image_type = data[2];
    let width = u16::from_le_bytes([data[12], data[13]]);
    let height = u16::from_le_bytes([data[14], data[15]]);
    let bits_per_pixel = data[16];
    let descriptor = data[17];

    let cmap_ok = match image_type {
        // color-mapped, raw or RLE
        1 | 9 => cmap_type == 1,
        // true-color and grayscale, raw or RLE
        2 | 3 | 10 | 11 => cmap_type == 0,
        _ => false,
    };
    cmap_ok
        && width > 0
        && height > 0
        && matches!(bits_per_pixel, 8 | 15 | 16 | 24 | 32)
        && descriptor & 0xC0 == 0
}

/// Check whether the image engine can open the file at `path`.
///
/// With `sniff`, the leading bytes decide; a file that can't be read falls
/// back to its name. Without `sniff`, only the name is consulted.
pub fn is_image_engine_supported_file<P: AsRef<Path>>(path: P, sniff: bool) -> bool {
    let path = path.as_ref();
    if sniff
        && let Ok(head) = read_prefix(path, 2048)
        && !head.is_empty()
    {
        return detect_image_format(&head).is_some();
    }
    match_extension(&path.to_string_lossy()).is_some_and(is_image_engine_kind)
}
