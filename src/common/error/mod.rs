//! Unified error types for filekind.
//!
//! Internal readers report failures through this type; the public
//! classification functions fold them into "unknown".

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
