//! Error types for filekind.
//!
//! Classification itself never fails: an unrecognised or unreadable input is
//! reported as `None`. These errors are produced by the internal readers
//! (bounded file reads, ZIP entry lookup, PalmDB header parsing) and are
//! swallowed by the public probes.
use thiserror::Error;

/// Main error type for filekind operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Not enough data to read the requested structure
    #[error("Insufficient data: expected {expected}, got {available}")]
    InsufficientData { expected: usize, available: usize },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Malformed PalmDB container
    #[error("Invalid PalmDB: {0}")]
    InvalidPdb(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for filekind operations.
pub type Result<T> = std::result::Result<T, Error>;
