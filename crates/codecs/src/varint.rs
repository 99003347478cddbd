//! The two variable-length integer encodings used on the wire.

use crate::{read_u16_le, read_u32_le, read_u64_le, read_u8, DecodeError};
use bytes::BufMut;

/// Writes `n` in the size-tagged compact form: values below `0xfd` are a
/// single byte, larger values are a tag byte followed by the value as a
/// little-endian `u16`, `u32` or `u64`.
pub fn write_compact_size(out: &mut dyn BufMut, n: u64) {
    if n < 0xfd {
        out.put_u8(n as u8);
    } else if n <= u16::MAX as u64 {
        out.put_u8(0xfd);
        out.put_u16_le(n as u16);
    } else if n <= u32::MAX as u64 {
        out.put_u8(0xfe);
        out.put_u32_le(n as u32);
    } else {
        out.put_u8(0xff);
        out.put_u64_le(n);
    }
}

/// Number of bytes [`write_compact_size`] emits for `n`.
pub fn compact_size_len(n: u64) -> usize {
    if n < 0xfd {
        1
    } else if n <= u16::MAX as u64 {
        3
    } else if n <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Reads a size-tagged compact size integer.
///
/// Each value has exactly one accepted encoding: a value carried in a
/// wider form than [`write_compact_size`] would pick is rejected as
/// [`DecodeError::Invalid`].
pub fn read_compact_size(buf: &mut &[u8], field: &'static str) -> Result<u64, DecodeError> {
    let non_canonical = DecodeError::Invalid { field, detail: "non-canonical compact size" };
    match read_u8(buf, field)? {
        0xfd => {
            let n = read_u16_le(buf, field)? as u64;
            if n < 0xfd {
                return Err(non_canonical);
            }
            Ok(n)
        }
        0xfe => {
            let n = read_u32_le(buf, field)? as u64;
            if n <= u16::MAX as u64 {
                return Err(non_canonical);
            }
            Ok(n)
        }
        0xff => {
            let n = read_u64_le(buf, field)?;
            if n <= u32::MAX as u64 {
                return Err(non_canonical);
            }
            Ok(n)
        }
        n => Ok(n as u64),
    }
}

/// Writes `n` as a continuation-bit varuint: base-128 digits, most
/// significant first, with the high bit set on every byte but the last.
///
/// Each digit past the lowest is reduced by one before emission, so every
/// byte-length class covers a disjoint range and each value has exactly
/// one encoding.
pub fn write_varuint(out: &mut dyn BufMut, mut n: u64) {
    // Digits are produced least significant first; ten bytes cover u64.
    let mut scratch = [0u8; 10];
    let mut len = 0;
    loop {
        let mut digit = (n & 0x7f) as u8;
        if len > 0 {
            digit |= 0x80;
        }
        scratch[len] = digit;
        len += 1;
        if n <= 0x7f {
            break;
        }
        n = (n >> 7) - 1;
    }
    for digit in scratch[..len].iter().rev() {
        out.put_u8(*digit);
    }
}

/// Number of bytes [`write_varuint`] emits for `n`.
pub fn varuint_len(mut n: u64) -> usize {
    let mut len = 1;
    while n > 0x7f {
        n = (n >> 7) - 1;
        len += 1;
    }
    len
}

/// Reads a continuation-bit varuint.
///
/// Accumulation past `u64::MAX` fails with [`DecodeError::Overflow`]
/// rather than wrapping.
pub fn read_varuint(buf: &mut &[u8], field: &'static str) -> Result<u64, DecodeError> {
    let mut n: u64 = 0;
    loop {
        let digit = read_u8(buf, field)?;
        if n > u64::MAX >> 7 {
            return Err(DecodeError::Overflow { field });
        }
        n = (n << 7) | (digit & 0x7f) as u64;
        if digit & 0x80 != 0 {
            n = n.checked_add(1).ok_or(DecodeError::Overflow { field })?;
        } else {
            return Ok(n);
        }
    }
}
