//! Length-prefixed byte strings.

use crate::{read_compact_size, write_compact_size, DecodeError};
use bytes::{Buf, BufMut, Bytes};

/// Writes `bytes` prefixed with its length as a compact size.
pub fn write_var_bytes(out: &mut dyn BufMut, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.put_slice(bytes);
}

/// Reads a compact size length prefix and that many raw bytes.
///
/// The declared length is checked against `max` and against the bytes
/// actually remaining before the payload is copied, so an oversized or
/// truncated prefix never allocates.
pub fn read_var_bytes(
    buf: &mut &[u8],
    max: usize,
    field: &'static str,
) -> Result<Bytes, DecodeError> {
    let declared = read_compact_size(buf, field)?;
    let len = usize::try_from(declared).map_err(|_| DecodeError::Overflow { field })?;
    if len > max {
        return Err(DecodeError::Oversize { field, limit: max, actual: len });
    }
    if buf.remaining() < len {
        return Err(DecodeError::UnexpectedEof { field });
    }
    Ok(buf.copy_to_bytes(len))
}
