//! filekind - identify document formats by name and by content
//!
//! This library decides which of a fixed set of document, image and archive
//! formats a file is. It combines three strategies:
//!
//! - **File name**: an ordered, case-insensitive suffix table
//!   (`.fb2.zip` is FB2, not ZIP)
//! - **Magic numbers**: PDF, PostScript, raster image headers and archive
//!   signatures read from a bounded prefix of the file
//! - **Container inspection**: ZIP files are opened to tell EPUB and XPS
//!   apart from plain archives; PalmDB headers reveal Mobipocket books
//!
//! Classification never fails. A missing, empty, truncated or unrecognised
//! input yields `None`.
//!
//! # Example - Classify by name
//!
//! ```
//! use filekind::{FileKind, file_kind_from_file_name};
//!
//! assert_eq!(file_kind_from_file_name("report.PDF"), Some(FileKind::Pdf));
//! assert_eq!(file_kind_from_file_name("book.fb2.zip"), Some(FileKind::Fb2));
//! ```
//!
//! # Example - Classify by content
//!
//! ```no_run
//! use filekind::{detect_file_kind, is_image_engine_kind};
//!
//! match detect_file_kind("download.bin") {
//!     Some(kind) if is_image_engine_kind(kind) => println!("image: {}", kind),
//!     Some(kind) => println!("document: {}", kind),
//!     None => println!("unknown"),
//! }
//! ```
//!
//! # Example - Custom options
//!
//! ```
//! use filekind::{FileKind, SniffOptions, Sniffer};
//!
//! let sniffer = Sniffer::new(SniffOptions::new().with_container_inspection(false));
//! assert_eq!(sniffer.sniff_bytes(b"PK\x03\x04"), Some(FileKind::Zip));
//! ```

pub mod common;

// Re-export the detection API at the crate root
pub use common::detection::{
    CBX_ENGINE_KINDS, FileKind, IMAGE_ENGINE_KINDS, KindSet, PdbDocType, PdbReader, SniffOptions,
    Sniffer, detect_file_kind, detect_file_kind_from_bytes, detect_file_kind_from_data,
    detect_image_format, file_kind_from_file_name, is_cbx_engine_kind, is_djvu_file_name,
    is_engine_multi_file_name, is_epub_dir, is_epub_file, is_image_engine_kind,
    is_image_engine_supported_file, is_mobi_file, is_pdf_file_content, is_pdf_file_name,
    is_ps_file_content, is_xps_archive, match_extension, match_signature,
};
pub use common::error::{Error, Result};
