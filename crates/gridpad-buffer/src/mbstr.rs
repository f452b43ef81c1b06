#![forbid(unsafe_code)]

//! Bounded multibyte decoding for the narrow insert path.
//!
//! Converts a byte string in the active locale encoding (UTF-8) into the
//! sequence of code points it denotes, stopping at the first of:
//!
//! - a terminating NUL byte,
//! - the caller's byte cap,
//! - the fixed internal maximum [`DECODE_MAX`],
//! - a malformed or truncated sequence: the "no further progress"
//!   condition. Everything decoded up to that point is kept, the rest is
//!   dropped.
//!
//! The output is a plain code-point sequence; feeding it to the insert
//! shifter, including the reversed traversal, is the caller's business.

use memchr::memchr;
use smallvec::SmallVec;

/// Fixed internal maximum on the bytes examined per conversion.
pub const DECODE_MAX: usize = 512;

/// Inline capacity of the decoded buffer; typical sources are short.
const DECODE_INLINE: usize = 32;

/// Decoded code points.
pub type Decoded = SmallVec<[char; DECODE_INLINE]>;

/// Decode at most `cap` bytes of `bytes` into code points.
///
/// # Example
///
/// ```
/// use gridpad_buffer::mbstr;
///
/// let out = mbstr::decode("héllo".as_bytes(), usize::MAX);
/// assert_eq!(out.as_slice(), &['h', 'é', 'l', 'l', 'o']);
///
/// // A NUL byte ends the source early.
/// let out = mbstr::decode(b"ab\0cd", usize::MAX);
/// assert_eq!(out.as_slice(), &['a', 'b']);
/// ```
pub fn decode(bytes: &[u8], cap: usize) -> Decoded {
    let mut limit = cap.min(DECODE_MAX).min(bytes.len());
    if let Some(nul) = memchr(0, &bytes[..limit]) {
        limit = nul;
    }
    let window = &bytes[..limit];

    // Valid prefix length; a malformed or cap-truncated sequence halts
    // the decode there.
    let valid_len = match core::str::from_utf8(window) {
        Ok(_) => window.len(),
        Err(err) => err.valid_up_to(),
    };

    let mut out = Decoded::new();
    if let Ok(s) = core::str::from_utf8(&window[..valid_len]) {
        out.extend(s.chars());
    }
    out
}
