//! File kind enumeration and kind groups.

use std::fmt;

/// Document, image and archive formats that can be identified.
///
/// Kinds are compared by value only. The text returned by [`FileKind::name`]
/// exists for diagnostics and must not be parsed or matched by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileKind {
    /// Portable Document Format (.pdf)
    Pdf,
    /// PostScript / Encapsulated PostScript (.ps, .eps, .ps.gz)
    Ps,
    /// Virtual bookmark collection (.vbkm)
    Vbkm,
    /// XML Paper Specification (.xps, .oxps)
    Xps,
    /// DjVu document (.djvu)
    DjVu,
    /// Compiled HTML Help (.chm)
    Chm,
    /// Portable Network Graphics (.png)
    Png,
    /// JPEG image (.jpg, .jpeg)
    Jpeg,
    /// Graphics Interchange Format (.gif)
    Gif,
    /// Tagged Image File Format (.tif, .tiff)
    Tiff,
    /// Windows bitmap (.bmp)
    Bmp,
    /// Truevision TGA (.tga)
    Tga,
    /// JPEG XR (.jxr)
    Jxr,
    /// HD Photo (.hdp)
    Hdp,
    /// Windows Media Photo (.wdp)
    Wdp,
    /// WebP image (.webp)
    WebP,
    /// JPEG 2000 (.jp2)
    Jp2,
    /// ZIP comic book archive (.cbz)
    Cbz,
    /// RAR comic book archive (.cbr)
    Cbr,
    /// 7-Zip comic book archive (.cb7)
    Cb7,
    /// TAR comic book archive (.cbt)
    Cbt,
    /// ZIP archive (.zip)
    Zip,
    /// RAR archive (.rar)
    Rar,
    /// 7-Zip archive (.7z)
    SevenZip,
    /// TAR archive (.tar)
    Tar,
    /// FictionBook (.fb2, .fb2.zip, .fb2z, .zfb2)
    Fb2,
    /// A directory
    Dir,
    /// EPUB ebook (.epub)
    Epub,
    /// Mobipocket ebook (.mobi, .prc, .azw, .azw1, .azw3)
    Mobi,
}

impl FileKind {
    /// Every kind, in declaration order.
    pub const ALL: [FileKind; 29] = [
        FileKind::Pdf,
        FileKind::Ps,
        FileKind::Vbkm,
        FileKind::Xps,
        FileKind::DjVu,
        FileKind::Chm,
        FileKind::Png,
        FileKind::Jpeg,
        FileKind::Gif,
        FileKind::Tiff,
        FileKind::Bmp,
        FileKind::Tga,
        FileKind::Jxr,
        FileKind::Hdp,
        FileKind::Wdp,
        FileKind::WebP,
        FileKind::Jp2,
        FileKind::Cbz,
        FileKind::Cbr,
        FileKind::Cb7,
        FileKind::Cbt,
        FileKind::Zip,
        FileKind::Rar,
        FileKind::SevenZip,
        FileKind::Tar,
        FileKind::Fb2,
        FileKind::Dir,
        FileKind::Epub,
        FileKind::Mobi,
    ];

    /// Diagnostic name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pdf => "filePDF",
            Self::Ps => "filePS",
            Self::Vbkm => "fileVbkm",
            Self::Xps => "fileXPS",
            Self::DjVu => "fileDjVu",
            Self::Chm => "fileChm",
            Self::Png => "filePng",
            Self::Jpeg => "fileJpeg",
            Self::Gif => "fileGif",
            Self::Tiff => "fileTiff",
            Self::Bmp => "fileBmp",
            Self::Tga => "fileTga",
            Self::Jxr => "fileJxr",
            Self::Hdp => "fileHdp",
            Self::Wdp => "fileWdp",
            Self::WebP => "fileWebp",
            Self::Jp2 => "fileJp2",
            Self::Cbz => "fileCbz",
            Self::Cbr => "fileCbr",
            Self::Cb7 => "fileCb7",
            Self::Cbt => "fileCbt",
            Self::Zip => "fileZip",
            Self::Rar => "fileRar",
            Self::SevenZip => "file7Z",
            Self::Tar => "fileTar",
            Self::Fb2 => "fileFb2",
            Self::Dir => "fileDir",
            Self::Epub => "fileEpub",
            Self::Mobi => "fileMobi",
        }
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed set of [`FileKind`]s sharing an engine or container family.
///
/// Membership is a single mask test. Sets are built in const context and
/// never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSet {
    bits: u32,
}

impl KindSet {
    /// Create an empty set
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[FileKind]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        Self { bits }
    }

    /// Check whether `kind` belongs to this set
    #[inline]
    pub const fn contains(self, kind: FileKind) -> bool {
        (self.bits & kind.bit()) != 0
    }

    /// Number of kinds in the set
    #[inline]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = FileKind> {
        FileKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

/// Kinds rendered by the raster image engine.
pub const IMAGE_ENGINE_KINDS: KindSet = KindSet::of(&[
    FileKind::Png,
    FileKind::Jpeg,
    FileKind::Gif,
    FileKind::Tiff,
    FileKind::Bmp,
    FileKind::Tga,
    FileKind::Jxr,
    FileKind::Hdp,
    FileKind::Wdp,
    FileKind::WebP,
    FileKind::Jp2,
]);

/// Kinds opened by the comic book / archive engine.
pub const CBX_ENGINE_KINDS: KindSet = KindSet::of(&[
    FileKind::Cbz,
    FileKind::Cbr,
    FileKind::Cb7,
    FileKind::Cbt,
    FileKind::Zip,
    FileKind::Rar,
    FileKind::SevenZip,
    FileKind::Tar,
]);

/// Whether `kind` is handled by the image engine.
#[inline]
pub fn is_image_engine_kind(kind: FileKind) -> bool {
    IMAGE_ENGINE_KINDS.contains(kind)
}

/// Whether `kind` is a comic book or plain archive format.
#[inline]
pub fn is_cbx_engine_kind(kind: FileKind) -> bool {
    CBX_ENGINE_KINDS.contains(kind)
}
