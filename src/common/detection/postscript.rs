//! PostScript detection.
//!
//! Three forms are recognised:
//! - plain PostScript starting with the `%!PS-Adobe-` DSC comment,
//! - Windows-format EPS with a binary header (see the Adobe EPSF spec, 5002),
//! - PostScript wrapped in an HP PJL job.

use super::utils::{find_pattern, signature_matches};
use crate::common::binary::read_u32_le;

/// DSC header comment that opens a PostScript program.
pub const PS_HEADER: &[u8] = b"%!PS-Adobe-";

/// Binary header magic of a Windows-format EPS file.
pub const EPS_BINARY_MAGIC: &[u8] = &[0xC5, 0xD0, 0xD3, 0xC6];

/// Universal Exit Language command that starts a PJL job.
pub const PJL_HEADER: &[u8] = b"\x1B%-12345X@PJL";

/// Minimum number of bytes needed before any form is considered.
pub const PS_MIN_LEN: usize = 64;

/// Check whether `data` is the start of a PostScript file.
///
/// # Examples
///
/// ```rust
/// use filekind::common::detection::postscript::is_ps_file_content;
///
/// let mut data = b"%!PS-Adobe-3.0\n".to_vec();
/// data.resize(64, b' ');
/// assert!(is_ps_file_content(&data));
/// assert!(!is_ps_file_content(&data[..63]));
/// ```
pub fn is_ps_file_content(data: &[u8]) -> bool {
    let n = data.len();
    if n < PS_MIN_LEN {
        return false;
    }

    if signature_matches(data, EPS_BINARY_MAGIC) {
        // offset of the PostScript section; n >= 64 so the read can't fail
        let Ok(ps_start) = read_u32_le(data, 4) else {
            return false;
        };
        let ps_start = ps_start as usize;
        // a start offset past the buffered prefix can't be verified here
        return ps_start >= n - 12 || signature_matches(&data[ps_start..], PS_HEADER);
    }

    if signature_matches(data, PS_HEADER) {
        return true;
    }

    if signature_matches(data, PJL_HEADER) {
        return find_pattern(&data[PJL_HEADER.len()..], b"\n%!PS-Adobe-").is_some();
    }

    false
}
