//! Common types, readers and detection logic.

// Submodule declarations
pub mod binary;
pub mod detection;
pub mod error;
pub mod io;

// Re-exports for convenience
pub use detection::{FileKind, detect_file_kind, file_kind_from_file_name};
pub use error::{Error, Result};
