//! File kind detection.
//!
//! Identifies document, image and archive formats from a file name, from
//! leading content bytes, or by looking inside ZIP and PalmDB containers.
//! Only the minimal amount of data required for identification is read.

// Submodule declarations
pub mod config;
pub mod epub;
pub mod extensions;
pub mod functions;
pub mod names;
pub mod palmdb;
pub mod pdf;
pub mod postscript;
pub mod raster;
pub mod signatures;
pub mod types;
pub mod utils;
pub mod xps;

// Re-exports
pub use config::SniffOptions;
pub use epub::{is_epub_dir, is_epub_file};
pub use extensions::{match_extension, verify_extension_table};
pub use functions::{
    Sniffer, detect_file_kind, detect_file_kind_from_bytes, detect_file_kind_from_data,
    file_kind_from_file_name,
};
pub use names::{is_djvu_file_name, is_engine_multi_file_name};
pub use palmdb::{PdbDocType, PdbReader, is_mobi_file};
pub use pdf::{is_pdf_file_content, is_pdf_file_name};
pub use postscript::is_ps_file_content;
pub use raster::{detect_image_format, is_image_engine_supported_file};
pub use signatures::match_signature;
pub use types::{
    CBX_ENGINE_KINDS, FileKind, IMAGE_ENGINE_KINDS, KindSet, is_cbx_engine_kind,
    is_image_engine_kind,
};
pub use xps::is_xps_archive;
