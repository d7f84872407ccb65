//! Binary data parsing utilities shared across detectors.
//!
//! Bounds-checked integer readers. Windows EPS headers are little-endian,
//! PalmDB headers are big-endian.

use zerocopy::{BE, FromBytes, LE, U16, U32};

/// Binary parsing error type
#[derive(Debug, Clone)]
pub enum BinaryError {
    /// Not enough data to read the requested type
    InsufficientData { expected: usize, available: usize },
    /// Failed to parse the data
    ParseError(String),
}

impl std::fmt::Display for BinaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryError::InsufficientData {
                expected,
                available,
            } => {
                write!(
                    f,
                    "Insufficient data: expected {}, got {}",
                    expected, available
                )
            },
            BinaryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for BinaryError {}

/// Result type for binary operations
pub type BinaryResult<T> = Result<T, BinaryError>;

#[inline]
fn slice_at(data: &[u8], offset: usize, len: usize) -> BinaryResult<&[u8]> {
    match offset.checked_add(len) {
        Some(end) if end <= data.len() => Ok(&data[offset..end]),
        _ => Err(BinaryError::InsufficientData {
            expected: offset.saturating_add(len),
            available: data.len(),
        }),
    }
}

/// Read a little-endian u32 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use filekind::common::binary::read_u32_le;
/// let data = [0x78, 0x56, 0x34, 0x12];
/// assert_eq!(read_u32_le(&data, 0).unwrap(), 0x12345678);
/// ```
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> BinaryResult<u32> {
    U32::<LE>::read_from_bytes(slice_at(data, offset, 4)?)
        .map(|v| v.get())
        .map_err(|_| BinaryError::ParseError("Failed to read u32".to_string()))
}

/// Read a big-endian u16 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use filekind::common::binary::read_u16_be;
/// let data = [0x12, 0x34];
/// assert_eq!(read_u16_be(&data, 0).unwrap(), 0x1234);
/// ```
#[inline]
pub fn read_u16_be(data: &[u8], offset: usize) -> BinaryResult<u16> {
    U16::<BE>::read_from_bytes(slice_at(data, offset, 2)?)
        .map(|v| v.get())
        .map_err(|_| BinaryError::ParseError("Failed to read u16".to_string()))
}

/// Read a big-endian u32 from a byte slice at the given offset.
#[inline]
pub fn read_u32_be(data: &[u8], offset: usize) -> BinaryResult<u32> {
    U32::<BE>::read_from_bytes(slice_at(data, offset, 4)?)
        .map(|v| v.get())
        .map_err(|_| BinaryError::ParseError("Failed to read u32".to_string()))
}
