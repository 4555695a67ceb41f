//! UTF-8 validation driven by a fixed lead-byte table.
//!
//! Every sequence is decoded to its code point and checked:
//! - continuation bytes must look like `10xxxxxx`
//! - overlong encodings are rejected
//! - 3-byte sequences may not encode a surrogate (`U+D800..=U+DFFF`) or the
//!   non-characters `U+FFFE` / `U+FFFF`
//! - 4-byte sequences go through a surrogate-pair split: the code point minus
//!   `0x10000` must divide into a high half in `0xD800..=0xDBFF` and a low half
//!   in `0xDC00..=0xDFFF`. This keeps exactly `U+10000..=U+10FFFF`.
//!
//! The table is shared with the segmenter, which uses [`sequence_len`] to size
//! each multi-byte token.

use std::fmt;

/// Continuation-byte count, indexed by `lead >> 3`.
///
/// `None` marks bytes that can never start a sequence: stray continuation
/// bytes (`0x80..=0xBF`) and `0xF8..=0xFF`.
const EXTRA_BYTES: [Option<u8>; 32] = [
    // 0x00..=0x7F: ASCII
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    Some(0),
    // 0x80..=0xBF: continuation bytes
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    // 0xC0..=0xDF
    Some(1),
    Some(1),
    Some(1),
    Some(1),
    // 0xE0..=0xEF
    Some(2),
    Some(2),
    // 0xF0..=0xF7
    Some(3),
    // 0xF8..=0xFF
    None,
];

/// Marker bits of a 2-byte sequence, accumulated into the code point.
const OFFSET_2: u32 = 0x0000_3080;
/// Marker bits of a 3-byte sequence.
const OFFSET_3: u32 = 0x000E_2080;
/// Marker bits of a 4-byte sequence.
const OFFSET_4: u32 = 0x03C8_2080;

const SP_HALF_SHIFT: u32 = 10;
const SP_HALF_BASE: u32 = 0x0001_0000;
const SP_HALF_MASK: u32 = 0x0000_03FF;
const SP_HIGH_FIRST: u32 = 0xD800;
const SP_HIGH_LAST: u32 = 0xDBFF;
const SP_LOW_FIRST: u32 = 0xDC00;
const SP_LOW_LAST: u32 = 0xDFFF;

/// A malformed byte sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid UTF-8 at byte {pos}: {kind}")]
pub struct Utf8Error {
    /// Offset of the lead byte of the offending sequence.
    pub pos: usize,
    /// What is wrong with it.
    pub kind: Utf8ErrorKind,
}

/// Kind of UTF-8 violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Utf8ErrorKind {
    /// Byte can never start a sequence (`0x80..=0xBF`, `0xF8..=0xFF`).
    InvalidLeadByte,
    /// Buffer ends before the sequence is complete.
    Truncated,
    /// A continuation byte is not of the form `10xxxxxx`.
    BadContinuation,
    /// Code point encoded with more bytes than needed.
    Overlong,
    /// 3-byte encoding of `U+D800..=U+DFFF`.
    Surrogate,
    /// 3-byte encoding of `U+FFFE` or `U+FFFF`.
    NonCharacter,
    /// 4-byte sequence above `U+10FFFF`.
    OutOfRange,
}

impl fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Utf8ErrorKind::InvalidLeadByte => "byte cannot start a character",
            Utf8ErrorKind::Truncated => "sequence truncated by end of input",
            Utf8ErrorKind::BadContinuation => "expected a continuation byte",
            Utf8ErrorKind::Overlong => "overlong encoding",
            Utf8ErrorKind::Surrogate => "encoded surrogate code point",
            Utf8ErrorKind::NonCharacter => "encoded non-character U+FFFE/U+FFFF",
            Utf8ErrorKind::OutOfRange => "code point above U+10FFFF",
        })
    }
}

impl From<std::str::Utf8Error> for Utf8Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Utf8Error {
            pos: err.valid_up_to(),
            kind: if err.error_len().is_none() {
                Utf8ErrorKind::Truncated
            } else {
                Utf8ErrorKind::BadContinuation
            },
        }
    }
}

/// Total byte length of the sequence started by `lead`.
///
/// Returns `Some(1)` for ASCII, `Some(2..=4)` for multi-byte lead bytes and
/// `None` for bytes that cannot start a character.
#[inline]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    match EXTRA_BYTES[(lead >> 3) as usize] {
        Some(extra) => Some(extra as usize + 1),
        None => None,
    }
}

/// Check that `bytes` is entirely well-formed.
///
/// The whole buffer is examined, including bytes after an interior NUL.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] < 0x80 {
            pos += 1;
            continue;
        }
        pos += check_sequence(&bytes[pos..]).map_err(|kind| Utf8Error { pos, kind })?;
    }
    Ok(())
}

/// Validate `bytes` and view them as a string.
pub fn decode(bytes: &[u8]) -> Result<&str, Utf8Error> {
    validate(bytes)?;
    // Every buffer accepted above is also accepted by the standard library.
    Ok(std::str::from_utf8(bytes)?)
}

/// Check the multi-byte sequence at the start of `seq`, returning its length.
fn check_sequence(seq: &[u8]) -> Result<usize, Utf8ErrorKind> {
    let lead = seq[0];
    let len = sequence_len(lead).ok_or(Utf8ErrorKind::InvalidLeadByte)?;
    if seq.len() < len {
        return Err(Utf8ErrorKind::Truncated);
    }

    let mut ch = u32::from(lead);
    for &byte in &seq[1..len] {
        if byte >> 6 != 0b10 {
            return Err(Utf8ErrorKind::BadContinuation);
        }
        ch = (ch << 6) + u32::from(byte);
    }

    match len {
        2 => {
            if ch.wrapping_sub(OFFSET_2) < 0x80 {
                return Err(Utf8ErrorKind::Overlong);
            }
        }
        3 => {
            let ch = ch.wrapping_sub(OFFSET_3);
            if ch < 0x800 {
                return Err(Utf8ErrorKind::Overlong);
            }
            if (0xD800..=0xDFFF).contains(&ch) {
                return Err(Utf8ErrorKind::Surrogate);
            }
            if ch == 0xFFFE || ch == 0xFFFF {
                return Err(Utf8ErrorKind::NonCharacter);
            }
        }
        _ => check_supplementary(ch.wrapping_sub(OFFSET_4))?,
    }
    Ok(len)
}

/// Split a 4-byte code point the way a UTF-16 encoder would and require both
/// halves to land in their surrogate ranges.
fn check_supplementary(code_point: u32) -> Result<(), Utf8ErrorKind> {
    let ch = code_point.wrapping_sub(SP_HALF_BASE);
    let high = (ch >> SP_HALF_SHIFT) + SP_HIGH_FIRST;
    let low = (ch & SP_HALF_MASK) + SP_LOW_FIRST;
    if (SP_HIGH_FIRST..=SP_HIGH_LAST).contains(&high) && (SP_LOW_FIRST..=SP_LOW_LAST).contains(&low)
    {
        return Ok(());
    }
    if code_point < SP_HALF_BASE {
        Err(Utf8ErrorKind::Overlong)
    } else {
        Err(Utf8ErrorKind::OutOfRange)
    }
}
