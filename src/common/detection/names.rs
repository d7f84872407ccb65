//! Name-only probes for kinds that are never sniffed from content here.

use std::path::Path;

use super::utils::ends_with_ignore_case;

/// Check whether the file name denotes a DjVu document.
pub fn is_djvu_file_name<P: AsRef<Path>>(path: P) -> bool {
    ends_with_ignore_case(&path.as_ref().to_string_lossy(), ".djvu")
}

/// Check whether the file name denotes a multi-document bookmark file.
pub fn is_engine_multi_file_name<P: AsRef<Path>>(path: P) -> bool {
    ends_with_ignore_case(&path.as_ref().to_string_lossy(), ".vbkm")
}
